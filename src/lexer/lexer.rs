use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Turns the text matched by a pattern into a token, or `None` to drop it.
pub type RegexHandler = fn(&str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Anchored patterns tried in order at the current position.
    ///
    /// The three character classes (letters, punctuation, everything else) are
    /// disjoint and cover every character, so some pattern always matches.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\p{L}+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
        RegexPattern { regex: Regex::new(r"^~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~") },
        RegexPattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: Regex::new(r"^\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: Regex::new(r"^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new(r"^[^\p{L}(),=+\-*/\^~!?:]+").unwrap(), handler: skip_handler },
    ];
}

/// A lazy token stream over a source string.
///
/// Tokens are produced on demand, one `next()` call at a time. The stream
/// ends (returns `None`) once the source is exhausted; the parser treats
/// that as `EndOfInput`. Unrecognised characters, including digits and
/// whitespace, are discarded, so the lexer never fails.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, pos: 0 }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        'scan: while !self.at_eof() {
            let remaining = self.remainder();

            for pattern in PATTERNS.iter() {
                if let Some(matched) = pattern.regex.find(remaining) {
                    self.advance_n(matched.end());

                    match (pattern.handler)(matched.as_str()) {
                        Some(token) => {
                            trace!(kind = %token.kind, value = %token.value, "token");
                            return Some(token);
                        }
                        None => continue 'scan,
                    }
                }
            }

            // Unreachable with the table above; drop one character rather than spin.
            let width = remaining.chars().next().map_or(1, char::len_utf8);
            self.advance_n(width);
        }

        None
    }
}

fn symbol_handler(matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Name, String::from(matched)))
}

fn skip_handler(matched: &str) -> Option<Token> {
    trace!(skipped = matched, "discarding unrecognised input");
    None
}
