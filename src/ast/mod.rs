/// AST (Abstract Syntax Tree) module
/// Contains the expression tree built by the parser
///
/// Submodules:
/// - ast: The `Expr` node enum and the `Name` leaf
/// - operators: Typed prefix, binary and postfix operators
pub mod ast;
pub mod operators;
