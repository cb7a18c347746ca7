//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! its lexer on demand and keeps exactly two of them: the token being parsed
//! and the one after it. Statement parsing lives in `stmt`, expression
//! parsing in `expr`, and the prefix/infix dispatch in `lookups`.
//!
//! Syntax errors never abort the parse. A failing statement is dropped, its
//! error is recorded and the parser skips to the end of that statement
//! before trying the next one.

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Span,
};

use super::stmt::parse_stmt;

/// Deepest expression nesting accepted before the statement is rejected.
/// Every nested operand, group, block body and folded operator counts one
/// level, so the AST and the recursion that builds it stay bounded.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, owned exclusively by the parser
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in the order they were found
    errors: Vec<Error>,
    /// Number of blocks entered but not yet closed. Read by recovery to
    /// know how many `}` still belong to the failed statement.
    block_depth: usize,
    /// Expression nesting of the statement being parsed
    nesting_depth: usize,
}

impl Parser {
    /// Creates a new Parser, priming the current and peek slots from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            block_depth: 0,
            nesting_depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead into the current slot and pulls the next token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances onto the lookahead token if it has the expected kind,
    /// otherwise fails without consuming anything.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `expected` - Description of what was expected, used in the error
    pub fn expect_peek_error(
        &mut self,
        expected_kind: TokenKind,
        expected: &str,
    ) -> Result<(), Error> {
        if self.peek.kind != expected_kind {
            return Err(self.unexpected_peek(expected));
        }

        self.advance();
        Ok(())
    }

    /// Like [`Parser::expect_peek_error`] with the token's own spelling as
    /// the description.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        let expected = match expected_kind.symbol() {
            Some(symbol) => format!("`{}`", symbol),
            None => expected_kind.to_string(),
        };
        self.expect_peek_error(expected_kind, &expected)
    }

    /// Builds an UnexpectedToken error for the lookahead token.
    pub fn unexpected_peek(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                got_kind: self.peek.kind,
                got_literal: self.peek.literal.clone(),
            },
            self.peek.span.start.clone(),
        )
    }

    /// Builds an UnexpectedToken error for the current token.
    pub fn unexpected_current(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                got_kind: self.current.kind,
                got_literal: self.current.literal.clone(),
            },
            self.current.span.start.clone(),
        )
    }

    /// Span from the start of `start` to the end of the current token.
    pub fn span_from(&self, start: &Span) -> Span {
        Span {
            start: start.start.clone(),
            end: self.current.span.end.clone(),
        }
    }

    pub(crate) fn enter_block(&mut self) {
        self.block_depth += 1;
    }

    pub(crate) fn leave_block(&mut self) {
        self.block_depth = self.block_depth.saturating_sub(1);
    }

    pub(crate) fn nesting_depth(&self) -> usize {
        self.nesting_depth
    }

    /// Goes one expression level deeper, failing on the current token once
    /// [`MAX_NESTING_DEPTH`] is exceeded.
    pub(crate) fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current.span.start.clone(),
            ));
        }

        self.nesting_depth += 1;
        Ok(())
    }

    pub(crate) fn restore_nesting(&mut self, depth: usize) {
        self.nesting_depth = depth;
    }

    /// Parses statements until EOF.
    ///
    /// Always returns a program; inspect [`Parser::errors`] afterwards to
    /// find out whether it is complete.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!(
                        "dropping statement at offset {}: {}",
                        error.get_position().0,
                        error
                    );
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.len(),
            self.errors.len()
        );

        program
    }

    /// Skips the remaining tokens of a failed statement, stopping on its
    /// terminator: a `;` outside any block, the `}` closing the block the
    /// failure happened in, or EOF. The caller advances past the terminator.
    fn synchronize(&mut self) {
        let mut depth = std::mem::take(&mut self.block_depth);
        let mut skipped = 0usize;

        loop {
            match self.current.kind {
                TokenKind::EOF => break,
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::CloseCurly if depth == 0 => break,
                TokenKind::CloseCurly => {
                    depth -= 1;
                    let continues = matches!(
                        self.peek.kind,
                        TokenKind::Semicolon | TokenKind::Else
                    );
                    if depth == 0 && !continues {
                        break;
                    }
                }
                TokenKind::OpenCurly => depth += 1,
                _ => {}
            }

            self.advance();
            skipped += 1;
        }

        debug!(
            "recovered after skipping {} tokens, resuming at {}",
            skipped, self.current
        );
    }

    /// Messages of every error recorded so far, in source order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// The recorded errors with their positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Consumes the parser, returning its recorded errors.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Lexes and parses `source` in one go.
///
/// # Arguments
///
/// * `source` - Program text
/// * `file` - Name stamped into every position, `"shell"` when `None`
///
/// # Returns
///
/// The (possibly partial) program and every error recorded while parsing it.
pub fn parse(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
