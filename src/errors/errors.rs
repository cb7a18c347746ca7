use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parse error together with the position it was detected at.
///
/// Displays as the bare message of the underlying [`ErrorImpl`].
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFunction { .. } => "NoPrefixParseFunction",
            ErrorImpl::InvalidIntegerLiteral { .. } => "InvalidIntegerLiteral",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                got_kind: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Input ended early, is a closing delimiter missing?",
            )),
            ErrorImpl::UnexpectedToken { got_literal, .. } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", got_literal))
            }
            ErrorImpl::NoPrefixParseFunction {
                kind: TokenKind::Illegal,
                literal,
            } => ErrorTip::Suggestion(format!("`{}` is not a valid character", literal)),
            ErrorImpl::NoPrefixParseFunction { kind: TokenKind::Semicolon, .. } => {
                ErrorTip::Suggestion(String::from("Expected an expression before `;`"))
            }
            ErrorImpl::NoPrefixParseFunction { .. } => ErrorTip::None,
            ErrorImpl::InvalidIntegerLiteral { text } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                text
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression with `let` bindings",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, got `{got_kind}`")]
    UnexpectedToken {
        expected: String,
        got_kind: TokenKind,
        got_literal: String,
    },
    #[error("no prefix parse function for `{kind}` found")]
    NoPrefixParseFunction { kind: TokenKind, literal: String },
    #[error("could not parse {text:?} as integer")]
    InvalidIntegerLiteral { text: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
