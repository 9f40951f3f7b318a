//! Label Linker.
//!
//! Rewrites the label operand of every jump and branch:
//! 1. **Jumps** (`j`, `jal`): the label becomes its absolute program index.
//! 2. **Branches**: the label becomes `index - (current + 1)`, a word offset from the
//!    delay-slot instruction.
//! 3. **Undefined labels** are reported and replaced by a sentinel that sends control
//!    outside the program: `0x3ffffff` for jumps, `0x7fff` for branches.
//!
//! Numeric operands are left as written. Every other instruction is untouched.

use crate::common::constants::{REGISTER_SIGIL, UNDEFINED_BRANCH_OFFSET, UNDEFINED_JUMP_TARGET};
use crate::common::{DiagnosticKind, Diagnostics};
use crate::isa::decode::split_mnemonic;
use crate::isa::opcode::{LabelMode, Opcode};
use crate::isa::operand;

use super::loader::{LabelTable, SourceLine};

/// Resolves label references in place.
///
/// # Arguments
///
/// * `lines` - Compacted program lines; the position of each is its word index.
/// * `labels` - Label definitions from the loader.
/// * `diagnostics` - Collector for undefined-label faults.
pub fn link(lines: &mut [SourceLine], labels: &LabelTable, diagnostics: &mut Diagnostics) {
    let mut rewritten = 0usize;

    for (index, entry) in lines.iter_mut().enumerate() {
        let Some((mnemonic, rest)) = split_mnemonic(&entry.text) else {
            continue;
        };
        let Some(mode) = Opcode::from_mnemonic(mnemonic).and_then(Opcode::label_mode) else {
            continue;
        };
        let mut operands = operand::split_operands(rest);
        let Some(&label) = operands.last() else {
            continue;
        };
        if label.starts_with(REGISTER_SIGIL) || operand::parse_value(label).is_ok() {
            continue;
        }

        let value = match (labels.get(label), mode) {
            (Some(&target), LabelMode::Absolute) => target as i64,
            (Some(&target), LabelMode::Relative) => target as i64 - (index as i64 + 1),
            (None, mode) => {
                diagnostics.push(entry.line, DiagnosticKind::UndefinedLabel(label.to_string()));
                match mode {
                    LabelMode::Absolute => UNDEFINED_JUMP_TARGET,
                    LabelMode::Relative => UNDEFINED_BRANCH_OFFSET,
                }
            }
        };

        let value = value.to_string();
        let _ = operands.pop();
        operands.push(&value);
        entry.text = format!("{mnemonic} {}", operands.join(", "));
        rewritten += 1;
    }

    tracing::debug!(rewritten, "linked label references");
}
