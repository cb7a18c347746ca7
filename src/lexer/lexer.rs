use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
}

/// On-demand tokenizer over a single source buffer.
///
/// Each call to [`Lexer::next_token`] scans exactly one token starting at the
/// read cursor. Once the end of input is reached every further call yields
/// another EOF token; the [`Iterator`] implementation stops after the first.
/// A lexer cannot be rewound, build a new one over the same text instead.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    exhausted: bool,
}

impl Lexer {
    /// Positions are stored as `u32` byte offsets. Offsets past `u32::MAX`
    /// (inputs over 4 GiB) are clamped to `u32::MAX`.
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.into(),
            pos: 0,
            file: file_name,
            exhausted: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(current) = self.at() else {
            return self.emit(TokenKind::EOF, 0);
        };

        if let Some(symbol) = SYMBOL_PATTERN.find(self.remainder()) {
            let value = symbol.as_str();
            let len = value.len();
            let kind = RESERVED_LOOKUP
                .get(value)
                .copied()
                .unwrap_or(TokenKind::Identifier);
            return self.emit(kind, len);
        }

        if let Some(number) = NUMBER_PATTERN.find(self.remainder()) {
            let len = number.len();
            return self.emit(TokenKind::Int, len);
        }

        let next_is_equals = self.peek_char() == Some('=');
        let (kind, len) = match current {
            '=' if next_is_equals => (TokenKind::Equals, 2),
            '=' => (TokenKind::Assignment, 1),
            '!' if next_is_equals => (TokenKind::NotEquals, 2),
            '!' => (TokenKind::Not, 1),
            '+' => (TokenKind::Plus, 1),
            '-' => (TokenKind::Dash, 1),
            '*' => (TokenKind::Star, 1),
            '/' => (TokenKind::Slash, 1),
            '<' => (TokenKind::Less, 1),
            '>' => (TokenKind::Greater, 1),
            ',' => (TokenKind::Comma, 1),
            ';' => (TokenKind::Semicolon, 1),
            '(' => (TokenKind::OpenParen, 1),
            ')' => (TokenKind::CloseParen, 1),
            '{' => (TokenKind::OpenCurly, 1),
            '}' => (TokenKind::CloseCurly, 1),
            other => {
                trace!("illegal character {:?} at offset {}", other, self.pos);
                (TokenKind::Illegal, other.len_utf8())
            }
        };

        self.emit(kind, len)
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            let len = matched.end();
            self.advance_n(len);
        }
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let literal = String::from(&self.source[start..start + len]);
        self.advance_n(len);

        MK_TOKEN!(
            kind,
            literal,
            Span {
                start: Position(clamp_offset(start), Rc::clone(&self.file)),
                end: Position(clamp_offset(self.pos), Rc::clone(&self.file)),
            }
        )
    }
}

pub(crate) fn clamp_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.exhausted = true;
        }

        Some(token)
    }
}

/// Scans the whole source eagerly. The returned vector always ends with
/// exactly one EOF token.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
