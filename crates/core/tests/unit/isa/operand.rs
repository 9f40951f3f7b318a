//! # Operand Tokenizer Tests

use mipsim_core::common::DiagnosticKind;
use mipsim_core::isa::operand::{self, Token};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("$t0", Token::Register(8))]
#[case("$31", Token::Register(31))]
#[case("42", Token::Value(42))]
#[case("-7", Token::Value(-7))]
#[case("0x10000", Token::Value(65536))]
#[case("8($sp)", Token::Memory { offset: 8, base: 29 })]
#[case("-4($t1)", Token::Memory { offset: -4, base: 9 })]
#[case("($a0)", Token::Memory { offset: 0, base: 4 })]
fn tokenize_resolves(#[case] text: &str, #[case] expected: Token) {
    assert_eq!(operand::tokenize(text), Ok(expected));
}

#[rstest]
#[case("$t10", DiagnosticKind::InvalidRegister("$t10".into()))]
#[case("$", DiagnosticKind::InvalidRegister("$".into()))]
#[case("loop", DiagnosticKind::UnknownValue("loop".into()))]
#[case("12abc", DiagnosticKind::UnknownValue("12abc".into()))]
#[case("--3", DiagnosticKind::UnknownValue("--3".into()))]
#[case("4($xx)", DiagnosticKind::InvalidRegister("$xx".into()))]
#[case("x($sp)", DiagnosticKind::UnknownValue("x".into()))]
fn tokenize_reports(#[case] text: &str, #[case] expected: DiagnosticKind) {
    assert_eq!(operand::tokenize(text), Err(expected));
}

/// Operands are trimmed and an inline comment ends the list.
#[test]
fn split_operands_stops_at_comment() {
    assert_eq!(
        operand::split_operands(" $t0 ,$t1,  4 "),
        vec!["$t0", "$t1", "4"]
    );
    assert_eq!(
        operand::split_operands("$t0, $t1 # , $t2"),
        vec!["$t0", "$t1"]
    );
    assert_eq!(operand::split_operands("$t0, # $t1"), vec!["$t0"]);
}
