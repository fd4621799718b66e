//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts expression source
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of names (runs of letters) and single-character punctuation
//! - Silently discarding every other character, digits and whitespace included
//! - Lazy, pull-based delivery of tokens to the parser

pub mod lexer;
pub mod tokens;
