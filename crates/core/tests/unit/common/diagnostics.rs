//! # Diagnostics Tests
//!
//! Checks the text form, the error-class taxonomy, and the append-only ordering of the
//! collector.

use mipsim_core::common::{
    AccessType, Diagnostic, DiagnosticKind, Diagnostics, ErrorClass, SimError,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(DiagnosticKind::DuplicateLabel("loop".into()), ErrorClass::Label)]
#[case(DiagnosticKind::LabelContainsDigits("l1".into()), ErrorClass::Label)]
#[case(DiagnosticKind::EmptyLabel, ErrorClass::Label)]
#[case(DiagnosticKind::UndefinedLabel("x".into()), ErrorClass::Label)]
#[case(DiagnosticKind::InvalidInstruction("halt".into()), ErrorClass::Syntax)]
#[case(DiagnosticKind::InvalidRegister("$t10".into()), ErrorClass::Syntax)]
#[case(DiagnosticKind::UnknownValue("abc".into()), ErrorClass::Syntax)]
#[case(
    DiagnosticKind::OperandCount { mnemonic: "addu", expected: 3, found: 2 },
    ErrorClass::Syntax
)]
#[case(DiagnosticKind::UnsupportedOperation("mul".into()), ErrorClass::Semantic)]
#[case(
    DiagnosticKind::ImmediateOverflow { value: 65536, bits: 16 },
    ErrorClass::Semantic
)]
#[case(
    DiagnosticKind::InvalidMemoryLocation { address: -4, access: AccessType::Write },
    ErrorClass::Runtime
)]
#[case(DiagnosticKind::MisalignedTarget(6), ErrorClass::Runtime)]
#[case(DiagnosticKind::NestedTransfer("beq"), ErrorClass::Runtime)]
fn kinds_map_to_classes(#[case] kind: DiagnosticKind, #[case] class: ErrorClass) {
    assert_eq!(kind.class(), class);
}

/// The boundary text form carries the class, the source line, and the message.
#[test]
fn display_includes_class_and_line() {
    let diag = Diagnostic::new(7, DiagnosticKind::ImmediateOverflow {
        value: 65536,
        bits: 16,
    });
    assert_eq!(
        diag.to_string(),
        "SemanticError [line 7]: immediate more than 16 bits: 65536"
    );

    let diag = Diagnostic::new(3, DiagnosticKind::InvalidMemoryLocation {
        address: 16777216,
        access: AccessType::Read,
    });
    assert_eq!(
        diag.to_string(),
        "RuntimeError [line 3]: invalid memory location for read: 16777216"
    );
}

/// Entries keep insertion order and are never merged.
#[test]
fn collector_preserves_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.push(5, DiagnosticKind::UndefinedLabel("end".into()));
    diagnostics.push(2, DiagnosticKind::DuplicateLabel("top".into()));
    diagnostics.push(5, DiagnosticKind::UndefinedLabel("end".into()));

    assert_eq!(diagnostics.len(), 3);
    let lines: Vec<usize> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![5, 2, 5]);
    assert_eq!(
        diagnostics.messages(),
        vec![
            "LabelError [line 5]: undefined label: end".to_string(),
            "LabelError [line 2]: found multiple instances of label: top".to_string(),
            "LabelError [line 5]: undefined label: end".to_string(),
        ]
    );
    assert_eq!(diagnostics.as_slice().len(), (&diagnostics).into_iter().count());
}

/// Host I/O failures name the path.
#[test]
fn io_error_mentions_path() {
    let err = SimError::Io {
        path: "missing.s".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(
        err.to_string(),
        "could not read program source 'missing.s': no such file"
    );
}
