use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, Identifier, IfExpr, InfixExpr, InfixOperator,
            IntegerExpr, PrefixExpr, PrefixOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    MK_IDENT,
};

use super::{
    lookups::{binding_power, led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Pratt loop. Starts on the first token of the expression and leaves the
/// parser on its last token.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.nesting_depth();
    let result = parse_nested_expr(parser, bp);
    parser.restore_nesting(depth);

    result
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;

    // Every node folded below starts with this token
    let leading = parser.current_token().literal.clone();

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup(token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFunction {
                kind: token_kind,
                literal: parser.current_token().literal.clone(),
            },
            parser.current_token().span.start.clone(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon
        && binding_power(parser.peek_token_kind()) > bp
    {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            break;
        };

        parser.advance();
        // Each fold wraps lhs one level deeper
        parser.enter_nesting()?;
        let operator_bp = binding_power(parser.current_token_kind());
        left = led(parser, left, &leading, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Identifier(MK_IDENT!(parser.current_token())))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr {
            value,
            literal: token.literal.clone(),
            span: token.span.clone(),
        })),
        Err(_) => Err(Error::new(
            ErrorImpl::InvalidIntegerLiteral {
                text: token.literal.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        span: token.span.clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let Some(operator) = PrefixOperator::from_token_kind(operator_token.kind) else {
        return Err(parser.unexpected_current("prefix operator"));
    };

    parser.advance();
    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: parser.span_from(&operator_token.span),
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expr,
    leading: &str,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let Some(operator) = InfixOperator::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected_current("infix operator"));
    };

    parser.advance();
    // Same binding power as the operator, so equal operators group to the left
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: parser.span_from(left.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
        token: leading.to_string(),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek_error(TokenKind::CloseParen, "`)` to close the group")?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.current_token().span.clone();

    parser.expect_peek_error(TokenKind::OpenParen, "`(` after `if`")?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek_error(TokenKind::CloseParen, "`)` after the if condition")?;

    parser.expect_peek_error(TokenKind::OpenCurly, "`{` to open the if body")?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek_error(TokenKind::OpenCurly, "`{` after `else`")?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        span: parser.span_from(&start),
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.current_token().span.clone();

    parser.expect_peek_error(TokenKind::OpenParen, "`(` after `fn`")?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek_error(TokenKind::OpenCurly, "`{` to open the function body")?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionExpr {
        span: parser.span_from(&start),
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the parser sitting on the opening parenthesis.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek_error(TokenKind::Identifier, "parameter name")?;
    parameters.push(MK_IDENT!(parser.current_token()));

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.expect_peek_error(TokenKind::Identifier, "parameter name after `,`")?;
        parameters.push(MK_IDENT!(parser.current_token()));
    }

    parser.expect_peek_error(TokenKind::CloseParen, "`)` after the parameter list")?;

    Ok(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expr,
    leading: &str,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect_peek_error(TokenKind::CloseParen, "`)` after the call arguments")?;
    }

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(left.get_span()),
        function: Box::new(left),
        arguments,
        token: leading.to_string(),
    }))
}
