//! Diagnostic and Error definitions.
//!
//! This module defines the fault reporting mechanisms of the simulator. It provides:
//! 1. **Diagnostic Kinds:** One variant per detectable program fault, with context values.
//! 2. **Error Classes:** The label/syntax/semantic/runtime taxonomy derived from a kind.
//! 3. **Diagnostics Collector:** An append-only, line-annotated record of faults.
//! 4. **Host Errors:** Failures outside the simulated program (I/O, configuration).
//!
//! Program faults are never fatal. They are recorded and execution resumes with a
//! defined fallback, so a single run surfaces as many defects as possible.

use std::fmt;
use std::path::PathBuf;
use std::slice;

use serde::Serialize;
use thiserror::Error;

use super::data::AccessType;

/// Broad category of a program fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorClass {
    /// Duplicate, malformed, or undefined labels.
    Label,
    /// Malformed instructions and unresolvable operands.
    Syntax,
    /// Unsupported mnemonics and oversized immediates.
    Semantic,
    /// Faults that only appear while executing.
    Runtime,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorClass::Label => write!(f, "LabelError"),
            ErrorClass::Syntax => write!(f, "SyntaxError"),
            ErrorClass::Semantic => write!(f, "SemanticError"),
            ErrorClass::Runtime => write!(f, "RuntimeError"),
        }
    }
}

/// A detectable program fault.
///
/// The `Display` form is the human-readable message; the source line is carried
/// separately by [`Diagnostic`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    /// A label was defined more than once; the last definition wins.
    #[error("found multiple instances of label: {0}")]
    DuplicateLabel(String),

    /// A label name contains a digit and was discarded.
    #[error("label contains digits: {0}")]
    LabelContainsDigits(String),

    /// A label definition line consisted of the colon alone.
    #[error("label name is empty")]
    EmptyLabel,

    /// A jump or branch referenced a label that is never defined.
    #[error("undefined label: {0}")]
    UndefinedLabel(String),

    /// A line without operands that is not `nop`.
    #[error("invalid instruction: {0}")]
    InvalidInstruction(String),

    /// A register operand that does not name one of the 32 registers.
    #[error("invalid register: {0}")]
    InvalidRegister(String),

    /// An operand that could not be parsed as an integer.
    #[error("unknown value: {0}")]
    UnknownValue(String),

    /// An instruction was given the wrong number of operands.
    #[error("{mnemonic} expects {expected} operand(s), found {found}")]
    OperandCount {
        /// Mnemonic of the instruction.
        mnemonic: &'static str,
        /// Number of operands the instruction takes.
        expected: usize,
        /// Number of operands supplied.
        found: usize,
    },

    /// The mnemonic is not part of the supported instruction set.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An immediate does not fit its field; the low bits are used.
    #[error("immediate more than {bits} bits: {value}")]
    ImmediateOverflow {
        /// The literal as written.
        value: i64,
        /// Width of the field it was truncated to.
        bits: u32,
    },

    /// A load or store touched an address outside the 24-bit space.
    #[error("invalid memory location for {access}: {address}")]
    InvalidMemoryLocation {
        /// Effective address of the access.
        address: i64,
        /// Direction of the access.
        access: AccessType,
    },

    /// A jump register target is not a multiple of four; the low bits are dropped.
    #[error("misaligned jump target: {0:#x}")]
    MisalignedTarget(u32),

    /// A jump or branch was placed in another transfer's delay slot.
    #[error("nested transfer in delay slot: {0}")]
    NestedTransfer(&'static str),
}

impl DiagnosticKind {
    /// Returns the taxonomy class of this fault.
    pub const fn class(&self) -> ErrorClass {
        match self {
            DiagnosticKind::DuplicateLabel(_)
            | DiagnosticKind::LabelContainsDigits(_)
            | DiagnosticKind::EmptyLabel
            | DiagnosticKind::UndefinedLabel(_) => ErrorClass::Label,
            DiagnosticKind::InvalidInstruction(_)
            | DiagnosticKind::InvalidRegister(_)
            | DiagnosticKind::UnknownValue(_)
            | DiagnosticKind::OperandCount { .. } => ErrorClass::Syntax,
            DiagnosticKind::UnsupportedOperation(_) | DiagnosticKind::ImmediateOverflow { .. } => {
                ErrorClass::Semantic
            }
            DiagnosticKind::InvalidMemoryLocation { .. }
            | DiagnosticKind::MisalignedTarget(_)
            | DiagnosticKind::NestedTransfer(_) => ErrorClass::Runtime,
        }
    }
}

/// A fault tagged with the 1-based source line of the offending text.
///
/// The line is the pre-compaction line number, so it matches what the
/// user sees in their editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line.
    pub line: usize,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a diagnostic for `kind` at `line`.
    pub const fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }

    /// Returns the taxonomy class of this diagnostic.
    pub const fn class(&self) -> ErrorClass {
        self.kind.class()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [line {}]: {}", self.class(), self.line, self.kind)
    }
}

/// Append-only, ordered record of program faults.
///
/// Entries are never removed or reordered. Every component that detects a fault
/// pushes into the same collector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a fault at `line`.
    pub fn push(&mut self, line: usize, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(line, kind);
        tracing::warn!(line, class = %diagnostic.class(), "{}", diagnostic.kind);
        self.entries.push(diagnostic);
    }

    /// Number of recorded faults.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the faults in the order they were produced.
    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Returns the faults as a slice.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns the fault kinds without their lines.
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.entries.iter().map(|d| d.kind.clone()).collect()
    }

    /// Formats every fault as text, in order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Host-level failures that are not faults of the simulated program.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program source could not be read from disk.
    #[error("could not read program source '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
