//! # Opcode Table Tests

use std::collections::HashSet;

use mipsim_core::isa::opcode::{LabelMode, Opcode, OperandFormat, UnknownOpcode};
use rstest::rstest;

/// Every opcode has a distinct mnemonic that maps back to itself.
#[test]
fn mnemonics_round_trip() {
    let mut seen = HashSet::new();
    for op in Opcode::ALL {
        assert!(seen.insert(op.mnemonic()), "duplicate mnemonic {op}");
        assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        assert_eq!(op.to_string().parse::<Opcode>(), Ok(op));
    }
    assert_eq!(seen.len(), 38);
}

/// Lookup ignores ASCII case.
#[rstest]
#[case("ADDIU", Opcode::Addiu)]
#[case("Beq", Opcode::Beq)]
#[case("jALr", Opcode::Jalr)]
fn lookup_is_case_insensitive(#[case] text: &str, #[case] op: Opcode) {
    assert_eq!(Opcode::from_mnemonic(text), Some(op));
}

/// Unsupported mnemonics fail to parse.
#[test]
fn unknown_mnemonic() {
    assert_eq!(Opcode::from_mnemonic("mult"), None);
    assert_eq!("syscall".parse::<Opcode>(), Err(UnknownOpcode("syscall".into())));
}

/// Only jumps and branches carry label operands.
#[rstest]
#[case(Opcode::J, Some(LabelMode::Absolute))]
#[case(Opcode::Jal, Some(LabelMode::Absolute))]
#[case(Opcode::Beq, Some(LabelMode::Relative))]
#[case(Opcode::Bgez, Some(LabelMode::Relative))]
#[case(Opcode::Jr, None)]
#[case(Opcode::Jalr, None)]
#[case(Opcode::Addiu, None)]
#[case(Opcode::Sw, None)]
fn label_modes(#[case] op: Opcode, #[case] mode: Option<LabelMode>) {
    assert_eq!(op.label_mode(), mode);
}

#[rstest]
#[case(Opcode::Lui, OperandFormat::UpperImm, (2, 2))]
#[case(Opcode::Jalr, OperandFormat::JumpRegLink, (1, 2))]
#[case(Opcode::Bltz, OperandFormat::BranchZero, (2, 2))]
#[case(Opcode::Srav, OperandFormat::ShiftReg, (3, 3))]
#[case(Opcode::Lbu, OperandFormat::Memory, (2, 2))]
fn formats(#[case] op: Opcode, #[case] format: OperandFormat, #[case] counts: (usize, usize)) {
    assert_eq!(op.format(), format);
    assert_eq!(format.operand_counts(), counts);
}
