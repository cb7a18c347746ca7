/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The Program root and the Stmt/Expr sum types
/// - expressions: Definitions for the expression node shapes and operators
/// - statements: Definitions for the statement node shapes
pub mod ast;
pub mod expressions;
pub mod statements;
