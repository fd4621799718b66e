use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// Every way a parse can fail. Any of them aborts the whole parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("{token} is not a prefix operator")]
    NoPrefixRule { token: Token },
    #[error("mismatched parenthesis: expected RightParen, found {found}")]
    MismatchedParen { found: TokenKind },
    #[error("invalid assignment target: {target}")]
    InvalidAssignTarget { target: String },
    #[error("unexpected trailing input: {token}")]
    TrailingInput { token: Token },
    #[error("expected {expected}, found {found}")]
    RequiredTokenMissing { expected: TokenKind, found: TokenKind },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            Error::NoPrefixRule { .. } => "NoPrefixRule",
            Error::MismatchedParen { .. } => "MismatchedParen",
            Error::InvalidAssignTarget { .. } => "InvalidAssignTarget",
            Error::TrailingInput { .. } => "TrailingInput",
            Error::RequiredTokenMissing { .. } => "RequiredTokenMissing",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::UnexpectedEndOfInput => ErrorTip::None,
            Error::NoPrefixRule { token } => ErrorTip::Suggestion(format!(
                "{} cannot start an expression, expected a name, `(` or a prefix operator",
                token
            )),
            Error::MismatchedParen { found } => ErrorTip::Suggestion(format!(
                "Expected `)` to close the group, found {}",
                found
            )),
            Error::InvalidAssignTarget { target } => ErrorTip::Suggestion(format!(
                "Only a bare name can be assigned to, found `{}`",
                target
            )),
            Error::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Expression is complete but {} follows, is an operator missing?",
                token
            )),
            Error::RequiredTokenMissing { expected, found } => match expected.as_char() {
                Some(c) => ErrorTip::Suggestion(format!("Expected `{}`, found {}", c, found)),
                None => ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found)),
            },
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
