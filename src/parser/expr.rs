use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, Name},
        operators::{BinaryOp, PostfixOp, PrefixOp},
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    printer::printer::print,
};

use super::{
    lookups::{BindingPower, InfixRule, PrefixRule},
    parser::Parser,
};

/// Remaining stack below which a recursive step moves onto a fresh segment.
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each heap-allocated stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Every rule that recurses comes back through here, so nesting depth is
/// bounded by memory rather than by the thread's stack.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || parse_expr_inner(parser, bp))
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if token_kind == TokenKind::EndOfInput {
        return Err(Error::UnexpectedEndOfInput);
    }

    let Some(nud) = parser.get_parselets().get_nud(token_kind) else {
        return Err(Error::NoPrefixRule {
            token: parser.current_token().clone(),
        });
    };

    let token = parser.advance();
    trace!(rule = ?nud.rule, ?bp, "prefix");

    let mut left = match nud.rule {
        PrefixRule::Group => parse_grouping_expr(parser)?,
        PrefixRule::Name => parse_name_expr(token),
        PrefixRule::Operator(op) => parse_prefix_expr(parser, op, nud.binding_power)?,
    };

    // While the next token binds tighter than the current floor, keep extending lhs
    while let Some(led) = parser.get_parselets().get_led(parser.current_token_kind()) {
        if led.binding_power <= bp {
            break;
        }

        parser.advance();
        trace!(rule = ?led.rule, ?bp, "infix");

        left = match led.rule {
            InfixRule::Binary(op) => parse_binary_expr(parser, left, op, led.binding_power)?,
            InfixRule::Postfix(op) => parse_postfix_expr(left, op),
            InfixRule::Conditional => parse_conditional_expr(parser, left, led.binding_power)?,
            InfixRule::Call => parse_call_expr(parser, left)?,
            InfixRule::Assign => parse_assignment_expr(parser, left, led.binding_power)?,
        };
    }

    Ok(left)
}

pub fn parse_name_expr(token: Token) -> Expr {
    Expr::Name(Name(token.value))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    let found = parser.current_token_kind();
    parser.expect_error(TokenKind::RightParen, Some(Error::MismatchedParen { found }))?;

    Ok(expr)
}

/// The operand is parsed at prefix strength, so `-a+b` is `(-a) + b`.
pub fn parse_prefix_expr(parser: &mut Parser, op: PrefixOp, bp: BindingPower) -> Result<Expr, Error> {
    let operand = parse_expr(parser, bp)?;

    Ok(Expr::prefix(op, operand))
}

pub fn parse_postfix_expr(left: Expr, op: PostfixOp) -> Expr {
    Expr::postfix(op, left)
}

/// The right side is parsed at the operator's own strength, which makes
/// every binary operator left-associative, `^` included.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, op: BinaryOp, bp: BindingPower) -> Result<Expr, Error> {
    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(op, left, right))
}

/// `cond ? then : otherwise`. The else branch is parsed one level below the
/// conditional so that a chained conditional nests to the right.
pub fn parse_conditional_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let then = parse_expr(parser, bp)?;
    parser.expect(TokenKind::Colon)?;
    let otherwise = parse_expr(parser, bp.lower())?;

    Ok(Expr::cond(left, then, otherwise))
}

/// At least one argument is required; `f()` is rejected.
pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let mut args = vec![];

    loop {
        args.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::RightParen {
            parser.advance();
            break;
        }

        parser.expect(TokenKind::Comma)?;
    }

    Ok(Expr::call(callee, args))
}

/// Right-associative: the value is parsed one level below assignment.
pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let target = match &left {
        Expr::Name(name) => name.clone(),
        other => {
            return Err(Error::InvalidAssignTarget {
                target: print(other),
            })
        }
    };

    let value = parse_expr(parser, bp.lower())?;

    Ok(Expr::Assign {
        target,
        value: Box::new(value),
    })
}
