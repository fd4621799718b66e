//! Error types for the parser.
//!
//! This module defines the closed set of parse failures, along with
//! their names and human-readable suggestions used by the CLI.

pub mod errors;
