//! Parser module for building the expression tree.
//!
//! This module contains a Pratt parser that transforms a stream of tokens
//! into an `Expr`. Each token kind may own a NUD (null denotation, prefix
//! position) parselet and a LED (left denotation, infix/postfix position)
//! parselet, each with a binding power:
//!
//! - Names and parenthesized groups
//! - Prefix `+ - ~ !` and postfix `!`
//! - Binary `+ - * / ^`, all left-associative
//! - Conditionals `?:` and assignment `=`, both right-associative
//! - Calls with one or more arguments

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
