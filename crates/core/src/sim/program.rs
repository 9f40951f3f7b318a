//! Linked Program.
//!
//! A [`Program`] is built once from source text and is immutable afterwards. Each entry
//! keeps the decoded instruction, the linked text it came from, and its source line.
//! The position of an entry is its word address divided by four.

use std::slice;

use crate::common::Diagnostics;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

use super::linker;
use super::loader::{self, LabelTable};

/// One decoded program instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramEntry {
    /// 1-based source line.
    pub line: usize,
    /// Instruction text after label rewriting.
    pub source: String,
    /// Decoded form executed by the CPU.
    pub instruction: Instruction,
}

/// An immutable, linked, decoded program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    entries: Vec<ProgramEntry>,
    labels: LabelTable,
}

impl Program {
    /// Loads, links, and decodes program text.
    ///
    /// Faults are recorded in `diagnostics` in pipeline order: label definitions,
    /// undefined references, then decode faults in program order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::Diagnostics;
    /// use mipsim_core::sim::Program;
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let program = Program::assemble("top:\n  j top\n  nop\n", &mut diagnostics);
    /// assert_eq!(program.len(), 2);
    /// assert_eq!(program.get(0).map(|e| e.source.as_str()), Some("j 0"));
    /// assert!(diagnostics.is_empty());
    /// ```
    pub fn assemble(source: &str, diagnostics: &mut Diagnostics) -> Self {
        let mut loaded = loader::load(source, diagnostics);
        linker::link(&mut loaded.lines, &loaded.labels, diagnostics);

        let entries = loaded
            .lines
            .into_iter()
            .map(|line| ProgramEntry {
                instruction: decode(&line.text, line.line, diagnostics),
                line: line.line,
                source: line.text,
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            instructions = entries.len(),
            invalid = entries
                .iter()
                .filter(|e| e.instruction == Instruction::Invalid)
                .count(),
            "decoded program"
        );

        Self {
            entries,
            labels: loaded.labels,
        }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at a word index.
    pub fn get(&self, index: usize) -> Option<&ProgramEntry> {
        self.entries.get(index)
    }

    /// Iterates over the entries in program order.
    pub fn entries(&self) -> slice::Iter<'_, ProgramEntry> {
        self.entries.iter()
    }

    /// Returns the program index a label was bound to.
    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// Returns the word index of the first instruction from source line `line`.
    pub fn index_of_line(&self, line: usize) -> Option<usize> {
        self.entries.iter().position(|e| e.line == line)
    }
}
