use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    MK_IDENT,
};

use super::parser::Parser;

/// Dispatches on the current token. `let` and `return` have their own
/// forms, everything else (including `if`) is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().span.clone();

    parser.expect_peek_error(TokenKind::Identifier, "identifier after `let`")?;
    let name = MK_IDENT!(parser.current_token());

    parser.expect_peek_error(TokenKind::Assignment, "`=` after the name in a let statement")?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Let(LetStmt {
        span: parser.span_from(&start),
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_token().span.clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt {
        span: parser.span_from(&start),
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().literal.clone();
    let expression = parse_expr(parser, BindingPower::Default)?;
    let span = expression.get_span().clone();
    skip_optional_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt {
        span: parser.span_from(&span),
        expression,
        token,
    }))
}

/// Parses `{ ... }` with the parser sitting on the opening brace and leaves
/// it on the closing one.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.current_token().span.clone();
    parser.enter_block();
    parser.advance();

    let mut body = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::EOF {
        return Err(parser.unexpected_current("`}` to close the block"));
    }
    parser.leave_block();

    Ok(BlockStmt {
        span: parser.span_from(&start),
        body,
    })
}
