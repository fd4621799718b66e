use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::operators::{BinaryOp, PostfixOp, PrefixOp},
    lexer::tokens::TokenKind,
};

/// Operator precedence, lowest to highest.
///
/// `Default` is the floor every top-level, group and argument parse starts from.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Assignment,
    Conditional,
    Sum,
    Product,
    Exponent,
    Prefix,
    Postfix,
    Call,
}

impl BindingPower {
    /// The next weaker level. `Default` is its own floor.
    pub fn lower(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Assignment => BindingPower::Default,
            BindingPower::Conditional => BindingPower::Assignment,
            BindingPower::Sum => BindingPower::Conditional,
            BindingPower::Product => BindingPower::Sum,
            BindingPower::Exponent => BindingPower::Product,
            BindingPower::Prefix => BindingPower::Exponent,
            BindingPower::Postfix => BindingPower::Prefix,
            BindingPower::Call => BindingPower::Postfix,
        }
    }
}

/// What to do with a token found where an operand is expected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixRule {
    Group,
    Name,
    Operator(PrefixOp),
}

/// What to do with a token found after a complete left operand.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixRule {
    Binary(BinaryOp),
    Postfix(PostfixOp),
    Conditional,
    Call,
    Assign,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PrefixParselet {
    pub binding_power: BindingPower,
    pub rule: PrefixRule,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct InfixParselet {
    pub binding_power: BindingPower,
    pub rule: InfixRule,
}

pub type NUDLookup = HashMap<TokenKind, PrefixParselet>;
pub type LEDLookup = HashMap<TokenKind, InfixParselet>;

/// The parselet registry: one table for prefix position, one for infix/postfix.
///
/// Tables are filled once by [`Parselets::new`] and are read-only afterwards,
/// so a single instance can be shared by any number of concurrent parses.
#[derive(Debug, Clone)]
pub struct Parselets {
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
}

impl Parselets {
    pub fn new() -> Self {
        let mut parselets = Parselets {
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parselets);
        parselets
    }

    /// Returns the prefix parselet registered for a token kind.
    pub fn get_nud(&self, kind: TokenKind) -> Option<PrefixParselet> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Returns the infix/postfix parselet registered for a token kind.
    pub fn get_led(&self, kind: TokenKind) -> Option<InfixParselet> {
        self.led_lookup.get(&kind).copied()
    }

    fn nud(&mut self, kind: TokenKind, binding_power: BindingPower, rule: PrefixRule) {
        self.nud_lookup.insert(kind, PrefixParselet { binding_power, rule });
    }

    fn led(&mut self, kind: TokenKind, binding_power: BindingPower, rule: InfixRule) {
        self.led_lookup.insert(kind, InfixParselet { binding_power, rule });
    }
}

impl Default for Parselets {
    fn default() -> Self {
        Parselets::new()
    }
}

fn create_token_lookups(parselets: &mut Parselets) {
    // Operands
    parselets.nud(TokenKind::LeftParen, BindingPower::Default, PrefixRule::Group);
    parselets.nud(TokenKind::Name, BindingPower::Default, PrefixRule::Name);

    // Unary prefix
    parselets.nud(TokenKind::Plus, BindingPower::Prefix, PrefixRule::Operator(PrefixOp::Plus));
    parselets.nud(TokenKind::Minus, BindingPower::Prefix, PrefixRule::Operator(PrefixOp::Minus));
    parselets.nud(TokenKind::Tilde, BindingPower::Prefix, PrefixRule::Operator(PrefixOp::Tilde));
    parselets.nud(TokenKind::Bang, BindingPower::Prefix, PrefixRule::Operator(PrefixOp::Bang));

    parselets.led(TokenKind::Bang, BindingPower::Postfix, InfixRule::Postfix(PostfixOp::Bang));

    // Sum, product and exponent
    parselets.led(TokenKind::Plus, BindingPower::Sum, InfixRule::Binary(BinaryOp::Add));
    parselets.led(TokenKind::Minus, BindingPower::Sum, InfixRule::Binary(BinaryOp::Subtract));
    parselets.led(TokenKind::Asterisk, BindingPower::Product, InfixRule::Binary(BinaryOp::Multiply));
    parselets.led(TokenKind::Slash, BindingPower::Product, InfixRule::Binary(BinaryOp::Divide));
    parselets.led(TokenKind::Caret, BindingPower::Exponent, InfixRule::Binary(BinaryOp::Power));

    parselets.led(TokenKind::Question, BindingPower::Conditional, InfixRule::Conditional);
    parselets.led(TokenKind::LeftParen, BindingPower::Call, InfixRule::Call);
    parselets.led(TokenKind::Assign, BindingPower::Assignment, InfixRule::Assign);
}

lazy_static! {
    /// Process-wide registry, built on first use.
    pub static ref PARSELETS: Parselets = Parselets::new();
}
