//! Parser state and the top-level entry points.
//!
//! The parser keeps one token of lookahead and pulls the rest lazily from
//! the lexer. Which rule applies to a token, and how tightly it binds, is
//! looked up in a [`Parselets`] registry.

use tracing::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, Parselets, PARSELETS},
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Remaining token stream
    tokens: Lexer<'a>,
    /// One-token lookahead; `EndOfInput` once the stream is exhausted
    current: Token,
    /// Rules and binding powers per token kind
    parselets: &'a Parselets,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, parselets: &'a Parselets) -> Self {
        let mut tokens = Lexer::new(source);
        let current = tokens.next().unwrap_or_else(Token::eof);

        Parser {
            tokens,
            current,
            parselets,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// Past the end of the stream this keeps returning `EndOfInput`.
    pub fn advance(&mut self) -> Token {
        let next = self.tokens.next().unwrap_or_else(Token::eof);
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes a token of the expected kind, or fails with `error`.
    ///
    /// Without a custom error the failure is `RequiredTokenMissing`.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            Err(error.unwrap_or(Error::RequiredTokenMissing {
                expected: expected_kind,
                found: kind,
            }))
        } else {
            Ok(self.advance())
        }
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    pub fn get_parselets(&self) -> &'a Parselets {
        self.parselets
    }
}

/// Parses a complete expression using the process-wide registry.
///
/// # Example
///
/// ```
/// use pratt::{parse, print};
///
/// let expr = parse("a + b * c").unwrap();
/// assert_eq!(print(&expr), "(a + (b * c))");
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    parse_with(source, &PARSELETS)
}

/// Parses raw input bytes.
///
/// Invalid UTF-8 sequences decode to U+FFFD, which the lexer discards like
/// any other unrecognised character, so byte input is never rejected.
pub fn parse_bytes(input: &[u8]) -> Result<Expr, Error> {
    parse(&String::from_utf8_lossy(input))
}

/// Parses a complete expression with an explicitly supplied registry.
///
/// The whole source must form a single expression; anything left over is
/// reported as `TrailingInput`.
pub fn parse_with(source: &str, parselets: &Parselets) -> Result<Expr, Error> {
    debug!(len = source.len(), "parsing expression");

    let mut parser = Parser::new(source, parselets);
    let expr = parse_expr(&mut parser, BindingPower::Default)?;

    if !parser.current_token().is_eof() {
        debug!(token = %parser.current_token(), "input left after expression");
        return Err(Error::TrailingInput {
            token: parser.current_token().clone(),
        });
    }

    debug!("parse complete");
    Ok(expr)
}
