//! Canonical printer.
//!
//! Renders an expression with every implicit grouping made explicit, which
//! is how a parse's precedence and associativity decisions are observed.

pub mod printer;
