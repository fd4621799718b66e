use std::fmt::Display;

/// Unary operators accepted in prefix position.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PrefixOp {
    Plus,
    Minus,
    Tilde,
    Bang,
}

impl PrefixOp {
    pub fn symbol(&self) -> char {
        match self {
            PrefixOp::Plus => '+',
            PrefixOp::Minus => '-',
            PrefixOp::Tilde => '~',
            PrefixOp::Bang => '!',
        }
    }
}

/// Binary infix operators. All five are left-associative.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Power => '^',
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PostfixOp {
    Bang,
}

impl PostfixOp {
    pub fn symbol(&self) -> char {
        match self {
            PostfixOp::Bang => '!',
        }
    }
}

impl Display for PrefixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for PostfixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
