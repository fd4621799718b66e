//! Pratt parser for a small expression language.
//!
//! Source text flows through the lexer, the parser (driven by a table of
//! parselets) and into an `Expr` tree, which the printer renders in a
//! canonical, fully parenthesized form.
//!
//! ```
//! let expr = pratt::parse("a = b ? -c : f(d, e!)").unwrap();
//! assert_eq!(pratt::print(&expr), "(a = (b ? (-c) : f(d, (e!))))");
//! ```

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

extern crate regex;

pub use ast::ast::Expr;
pub use errors::errors::Error;
pub use parser::parser::parse;
pub use printer::printer::print;
