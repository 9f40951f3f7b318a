//! # ALU Tests

use mipsim_core::core::units::alu::{Alu, AluOp};
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, i32::MAX, 1, i32::MIN)]
#[case(AluOp::Sub, i32::MIN, 1, i32::MAX)]
#[case(AluOp::Sub, 3, 5, -2)]
#[case(AluOp::And, 0b1100, 0b1010, 0b1000)]
#[case(AluOp::Or, 0b1100, 0b1010, 0b1110)]
#[case(AluOp::Xor, 0b1100, 0b1010, 0b0110)]
#[case(AluOp::Nor, 0, 0, -1)]
#[case(AluOp::Slt, -1, 1, 1)]
#[case(AluOp::Slt, 1, -1, 0)]
#[case(AluOp::Sltu, -1, 1, 0)]
#[case(AluOp::Sltu, 1, -1, 1)]
#[case(AluOp::Sll, 1, 31, i32::MIN)]
#[case(AluOp::Sll, 3, 33, 6)]
#[case(AluOp::Srl, -16, 28, 15)]
#[case(AluOp::Sra, -16, 2, -4)]
#[case(AluOp::Sra, i32::MIN, 31, -1)]
#[case(AluOp::Srl, -1, 0, -1)]
fn execute(#[case] op: AluOp, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}
