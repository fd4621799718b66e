//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Precedence and associativity of every operator level
//! - Prefix, postfix, conditional, call and assignment parselets
//! - Each error the parser can report
//! - The parselet registry itself

use crate::{
    ast::{
        ast::Expr,
        operators::{BinaryOp, PostfixOp, PrefixOp},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    printer::printer::print,
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, InfixRule, Parselets, PrefixRule, PARSELETS},
    parser::{parse, parse_with, Parser},
};

fn canonical(source: &str) -> String {
    print(&parse(source).unwrap())
}

#[test]
fn test_parse_name() {
    assert_eq!(parse("abc").unwrap(), Expr::name("abc"));
}

#[test]
fn test_parse_sum_and_product() {
    assert_eq!(canonical("a+b*c"), "(a + (b * c))");
    assert_eq!(canonical("a*b+c"), "((a * b) + c)");
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(canonical("a-b-c"), "((a - b) - c)");
    assert_eq!(canonical("a/b*c"), "((a / b) * c)");
    assert_eq!(canonical("a^b^c"), "((a ^ b) ^ c)");
}

#[test]
fn test_exponent_binds_tighter_than_product() {
    assert_eq!(canonical("a*b^c"), "(a * (b ^ c))");
    assert_eq!(canonical("a^b*c"), "((a ^ b) * c)");
}

#[test]
fn test_prefix_binds_tighter_than_sum() {
    assert_eq!(
        parse("-a+b").unwrap(),
        Expr::binary(
            BinaryOp::Add,
            Expr::prefix(PrefixOp::Minus, Expr::name("a")),
            Expr::name("b"),
        )
    );
    assert_eq!(canonical("-a^b"), "((-a) ^ b)");
}

#[test]
fn test_nested_prefix() {
    assert_eq!(canonical("-~!+a"), "(-(~(!(+a))))");
}

#[test]
fn test_postfix_binds_tighter_than_prefix() {
    assert_eq!(canonical("-a!"), "(-(a!))");
    assert_eq!(canonical("a!!"), "((a!)!)");
}

#[test]
fn test_bang_as_prefix_and_postfix() {
    assert_eq!(
        parse("!a!").unwrap(),
        Expr::prefix(PrefixOp::Bang, Expr::postfix(PostfixOp::Bang, Expr::name("a")))
    );
}

#[test]
fn test_group_overrides_precedence() {
    assert_eq!(canonical("(a+b)*c"), "((a + b) * c)");
    assert_eq!(canonical("a^(b^c)"), "(a ^ (b ^ c))");
    assert_eq!(canonical("((a))"), "a");
}

#[test]
fn test_conditional() {
    assert_eq!(canonical("a?b:c"), "(a ? b : c)");
    assert_eq!(canonical("a+b?c*d:e-f"), "((a + b) ? (c * d) : (e - f))");
}

#[test]
fn test_conditional_is_right_associative() {
    assert_eq!(
        parse("a?b:c?d:e").unwrap(),
        Expr::cond(
            Expr::name("a"),
            Expr::name("b"),
            Expr::cond(Expr::name("c"), Expr::name("d"), Expr::name("e")),
        )
    );
}

#[test]
fn test_conditional_else_does_not_swallow_assignment() {
    assert_eq!(
        parse("a?b:c=d"),
        Err(Error::InvalidAssignTarget {
            target: "(a ? b : c)".to_string()
        })
    );
}

#[test]
fn test_conditional_missing_colon() {
    assert_eq!(
        parse("a?b"),
        Err(Error::RequiredTokenMissing {
            expected: TokenKind::Colon,
            found: TokenKind::EndOfInput,
        })
    );
    assert_eq!(
        parse("a?b,c"),
        Err(Error::RequiredTokenMissing {
            expected: TokenKind::Colon,
            found: TokenKind::Comma,
        })
    );
}

#[test]
fn test_call() {
    assert_eq!(
        parse("f(a,b,c)").unwrap(),
        Expr::call(
            Expr::name("f"),
            vec![Expr::name("a"), Expr::name("b"), Expr::name("c")],
        )
    );
    assert_eq!(canonical("f(a,b,c)"), "f(a, b, c)");
}

#[test]
fn test_call_arguments_are_full_expressions() {
    assert_eq!(canonical("f(a=b, c?d:e)"), "f((a = b), (c ? d : e))");
}

#[test]
fn test_call_binds_tightest() {
    assert_eq!(canonical("-f(a)!"), "(-(f(a)!))");
    assert_eq!(canonical("f(a)(b)"), "f(a)(b)");
    assert_eq!(canonical("a+f(b)"), "(a + f(b))");
}

#[test]
fn test_zero_argument_call_is_rejected() {
    assert_eq!(
        parse("f()"),
        Err(Error::NoPrefixRule {
            token: crate::lexer::tokens::Token {
                kind: TokenKind::RightParen,
                value: ")".to_string(),
            }
        })
    );
}

#[test]
fn test_call_missing_separator() {
    assert_eq!(
        parse("f(a b)"),
        Err(Error::RequiredTokenMissing {
            expected: TokenKind::Comma,
            found: TokenKind::Name,
        })
    );
    assert_eq!(
        parse("f(a,"),
        Err(Error::UnexpectedEndOfInput)
    );
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        parse("a=b=c").unwrap(),
        Expr::assign("a", Expr::assign("b", Expr::name("c")))
    );
    assert_eq!(canonical("a=b?c:d"), "(a = (b ? c : d))");
}

#[test]
fn test_invalid_assign_target() {
    assert_eq!(
        parse("(a+b)=c"),
        Err(Error::InvalidAssignTarget {
            target: "(a + b)".to_string()
        })
    );
    assert!(matches!(parse("f(a)=b"), Err(Error::InvalidAssignTarget { .. })));
}

#[test]
fn test_assignment_target_must_be_whole_left_side() {
    // `=` is the weakest operator, so the left side of `a+b=c` is `(a + b)`.
    assert!(matches!(parse("a+b=c"), Err(Error::InvalidAssignTarget { .. })));
}

#[test]
fn test_mismatched_paren() {
    assert_eq!(
        parse("(a"),
        Err(Error::MismatchedParen {
            found: TokenKind::EndOfInput
        })
    );
    assert_eq!(
        parse("(a:"),
        Err(Error::MismatchedParen {
            found: TokenKind::Colon
        })
    );
}

#[test]
fn test_trailing_input() {
    assert!(matches!(
        parse("a b"),
        Err(Error::TrailingInput { token }) if token.value == "b"
    ));
    assert!(matches!(parse("a)"), Err(Error::TrailingInput { .. })));
}

#[test]
fn test_unexpected_end_of_input() {
    assert_eq!(parse(""), Err(Error::UnexpectedEndOfInput));
    assert_eq!(parse("  42 "), Err(Error::UnexpectedEndOfInput));
    assert_eq!(parse("a+"), Err(Error::UnexpectedEndOfInput));
    assert_eq!(parse("-"), Err(Error::UnexpectedEndOfInput));
}

#[test]
fn test_no_prefix_rule() {
    assert!(matches!(
        parse("*a"),
        Err(Error::NoPrefixRule { token }) if token.kind == TokenKind::Asterisk
    ));
    assert!(matches!(
        parse(":"),
        Err(Error::NoPrefixRule { token }) if token.kind == TokenKind::Colon
    ));
}

#[test]
fn test_discarded_characters_are_invisible() {
    assert_eq!(canonical("a 1 + 2 b"), "(a + b)");
    assert_eq!(canonical("ab"), "ab");
}

#[test]
fn test_parse_expr_respects_floor() {
    let mut parser = Parser::new("a+b*c", &PARSELETS);
    let expr = parse_expr(&mut parser, BindingPower::Sum).unwrap();

    assert_eq!(expr, Expr::name("a"));
    assert_eq!(parser.current_token_kind(), TokenKind::Plus);
}

#[test]
fn test_parser_advance_past_end() {
    let mut parser = Parser::new("a", &PARSELETS);

    assert_eq!(parser.advance().value, "a");
    assert!(parser.advance().is_eof());
    assert!(parser.current_token().is_eof());
}

#[test]
fn test_parse_with_private_registry() {
    let parselets = Parselets::new();

    assert_eq!(parse_with("a*b+c", &parselets), parse("a*b+c"));
}

#[test]
fn test_binding_power_order() {
    let order = [
        BindingPower::Default,
        BindingPower::Assignment,
        BindingPower::Conditional,
        BindingPower::Sum,
        BindingPower::Product,
        BindingPower::Exponent,
        BindingPower::Prefix,
        BindingPower::Postfix,
        BindingPower::Call,
    ];

    for pair in order.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!(pair[1].lower(), pair[0]);
    }
    assert_eq!(BindingPower::Default.lower(), BindingPower::Default);
}

#[test]
fn test_registry_contents() {
    let parselets = &*PARSELETS;

    let kinds = [
        TokenKind::EndOfInput,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Comma,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Caret,
        TokenKind::Tilde,
        TokenKind::Bang,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Name,
    ];

    let nud_count = kinds.iter().filter(|k| parselets.get_nud(**k).is_some()).count();
    let led_count = kinds.iter().filter(|k| parselets.get_led(**k).is_some()).count();
    assert_eq!(nud_count, 6);
    assert_eq!(led_count, 9);

    assert_eq!(
        parselets.get_nud(TokenKind::Minus).map(|p| p.rule),
        Some(PrefixRule::Operator(PrefixOp::Minus))
    );
    assert_eq!(
        parselets.get_led(TokenKind::Minus).map(|p| p.rule),
        Some(InfixRule::Binary(BinaryOp::Subtract))
    );
    assert_eq!(
        parselets.get_led(TokenKind::LeftParen).map(|p| p.binding_power),
        Some(BindingPower::Call)
    );
    assert!(parselets.get_nud(TokenKind::Asterisk).is_none());
    assert!(parselets.get_led(TokenKind::Name).is_none());
    assert!(parselets.get_led(TokenKind::Colon).is_none());
}

#[test]
fn test_deeply_nested_group() {
    let depth = 100_000;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(parse(&source).unwrap(), Expr::name("a"));
}

#[test]
fn test_deeply_nested_prefix_parses_and_prints() {
    let depth = 100_000;
    let source = format!("{}a", "-".repeat(depth));
    let printed = print(&parse(&source).unwrap());

    assert_eq!(printed, format!("{}a{}", "(-".repeat(depth), ")".repeat(depth)));
}

#[test]
fn test_deep_invalid_assign_target_is_reported() {
    let depth = 100_000;
    let source = format!("({}a)=b", "~".repeat(depth));

    assert!(matches!(parse(&source), Err(Error::InvalidAssignTarget { .. })));
}
