use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
    Call,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
/// Receives the folded left operand and the literal of its leading token.
pub type LEDHandler = fn(&mut Parser, Expr, &str, BindingPower) -> Result<Expr, Error>;

/// Binding power of `kind` when it appears in infix position. Tokens that
/// cannot continue an expression bind at `Default`, which ends the loop in
/// `parse_expr`.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::Less | TokenKind::Greater => BindingPower::Relational,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::OpenParen => BindingPower::Call,
        _ => BindingPower::Default,
    }
}

pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        // Literals and symbols
        TokenKind::Identifier => parse_identifier_expr,
        TokenKind::Int => parse_integer_expr,
        TokenKind::True | TokenKind::False => parse_boolean_expr,

        TokenKind::Not | TokenKind::Dash => parse_prefix_expr,
        TokenKind::OpenParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Function => parse_function_expr,
        _ => return None,
    };

    Some(handler)
}

pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => parse_infix_expr,

        TokenKind::OpenParen => parse_call_expr,
        _ => return None,
    };

    Some(handler)
}
