//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn position(offset: u32) -> Position {
    Position(offset, Rc::new("test.monkey".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::InvalidIntegerLiteral {
            text: "99999999999999999999".to_string(),
        },
        position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.monkey");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`=` after the name in a let statement".to_string(),
            got_kind: TokenKind::Int,
            got_literal: "5".to_string(),
        },
        position(6),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected `=` after the name in a let statement, got `Int`"
    );
}

#[test]
fn test_no_prefix_parse_function_error() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFunction {
            kind: TokenKind::CloseParen,
            literal: ")".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFunction");
    assert_eq!(
        error.to_string(),
        "no prefix parse function for `CloseParen` found"
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_invalid_integer_literal_error() {
    let error = Error::new(
        ErrorImpl::InvalidIntegerLiteral {
            text: "99999999999999999999".to_string(),
        },
        position(0),
    );

    assert_eq!(error.get_error_name(), "InvalidIntegerLiteral");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFunction {
            kind: TokenKind::Illegal,
            literal: "@".to_string(),
        },
        position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`@` is not a valid character"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_at_eof() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`)`".to_string(),
            got_kind: TokenKind::EOF,
            got_literal: String::new(),
        },
        position(3),
    );

    assert!(error.get_tip().to_string().contains("ended early"));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, position(300));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 256 levels");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
