use std::{fmt::Display, slice::Iter};

use super::{
    expressions::{
        write_comma_separated, BooleanExpr, CallExpr, FunctionExpr, Identifier, IfExpr,
        InfixExpr, IntegerExpr, PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};
use crate::Span;

/// Statement Types
///
/// The closed set of statement forms. Each variant owns its node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    /// A braced block. Blocks only occur nested inside `if` and `fn`, so
    /// [`crate::Parser`] never produces this variant at program level; it
    /// lets a block body be handled as one statement.
    Block(BlockStmt),
}

impl Stmt {
    /// Literal text of the token the statement starts with.
    pub fn token_literal(&self) -> String {
        match self {
            Stmt::Let(_) => String::from("let"),
            Stmt::Return(_) => String::from("return"),
            Stmt::Expression(stmt) => stmt.token.clone(),
            Stmt::Block(_) => String::from("{"),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
///
/// The closed set of expression forms. Children are boxed so that every
/// node has exactly one owner.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

impl Expr {
    /// Literal text of the token the expression starts with, as written in
    /// the source. For infix and call expressions that is the first token of
    /// the left operand, including an opening `(`.
    pub fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(ident) => ident.name.clone(),
            Expr::Integer(int) => int.literal.clone(),
            Expr::Boolean(boolean) => boolean.value.to_string(),
            Expr::Prefix(prefix) => prefix.operator.to_string(),
            Expr::Infix(infix) => infix.token.clone(),
            Expr::If(_) => String::from("if"),
            Expr::Function(_) => String::from("fn"),
            Expr::Call(call) => call.token.clone(),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Integer(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Infix(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
            Expr::Function(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }
}

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map(Stmt::token_literal)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

// Canonical source rendering. Operator expressions are fully parenthesised
// so that the parsed grouping is visible.

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "let {} = {};", stmt.name, stmt.value),
            Stmt::Return(stmt) => write!(f, "return {};", stmt.value),
            Stmt::Expression(stmt) => write!(f, "{}", stmt.expression),
            Stmt::Block(block) => write!(f, "{}", block),
        }
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for stmt in &self.body {
            write!(f, " {}", stmt)?;
        }
        f.write_str(" }")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{}", ident),
            Expr::Integer(int) => write!(f, "{}", int.value),
            Expr::Boolean(boolean) => write!(f, "{}", boolean.value),
            Expr::Prefix(prefix) => write!(f, "({}{})", prefix.operator, prefix.operand),
            Expr::Infix(infix) => {
                write!(f, "({} {} {})", infix.left, infix.operator, infix.right)
            }
            Expr::If(if_expr) => {
                write!(f, "if {} {}", if_expr.condition, if_expr.consequence)?;
                if let Some(alternative) = &if_expr.alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expr::Function(function) => {
                f.write_str("fn(")?;
                write_comma_separated(f, &function.parameters)?;
                write!(f, ") {}", function.body)
            }
            Expr::Call(call) => {
                write!(f, "{}(", call.function)?;
                write_comma_separated(f, &call.arguments)?;
                f.write_str(")")
            }
        }
    }
}
