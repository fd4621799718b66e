use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,

    LeftParen,
    RightParen,
    Comma,
    Assign,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,
    Tilde,
    Bang,
    Question,
    Colon,

    Name,
}

impl TokenKind {
    /// Returns the single character a punctuation kind is spelled with.
    ///
    /// `EndOfInput` and `Name` have no fixed spelling and return `None`.
    pub fn as_char(&self) -> Option<char> {
        match self {
            TokenKind::LeftParen => Some('('),
            TokenKind::RightParen => Some(')'),
            TokenKind::Comma => Some(','),
            TokenKind::Assign => Some('='),
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            TokenKind::Asterisk => Some('*'),
            TokenKind::Slash => Some('/'),
            TokenKind::Caret => Some('^'),
            TokenKind::Tilde => Some('~'),
            TokenKind::Bang => Some('!'),
            TokenKind::Question => Some('?'),
            TokenKind::Colon => Some(':'),
            TokenKind::EndOfInput | TokenKind::Name => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    /// The terminal token handed out once the source is exhausted.
    pub fn eof() -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            value: String::new(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Name => write!(f, "{} `{}`", self.kind, self.value),
            _ => write!(f, "{}", self.kind),
        }
    }
}
