//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Totals:** Instructions executed, counting delay-slot instructions.
//! 2. **Instruction mix:** Counts by category (ALU, shift, load, store, transfer).
//! 3. **Control flow:** Taken transfers, executed delay slots, and rejected nested transfers.

use std::fmt::Write as _;

use serde::Serialize;

/// Execution statistics for one CPU.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions executed, including no-ops and invalid lines.
    pub instructions_executed: u64,

    /// Count of immediate, register, `lui`, and conditional-move instructions.
    pub inst_alu: u64,
    /// Count of shift instructions (immediate and variable).
    pub inst_shift: u64,
    /// Count of load instructions.
    pub inst_load: u64,
    /// Count of store instructions.
    pub inst_store: u64,
    /// Count of jump and branch instructions.
    pub inst_transfer: u64,
    /// Count of `nop` and lines that failed to decode.
    pub inst_nop: u64,

    /// Transfers whose target was committed.
    pub transfers_taken: u64,
    /// Instructions executed in a delay slot.
    pub delay_slots_executed: u64,
    /// Transfers rejected because they sat in another transfer's delay slot.
    pub nested_transfers_rejected: u64,
    /// Loads and stores rejected for an out-of-range address.
    pub memory_faults: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to [`SimStats::report_sections`] to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

impl SimStats {
    /// Renders every statistics section as text.
    pub fn report(&self) -> String {
        self.report_sections(&[])
    }

    /// Renders only the requested sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Section names from [`STATS_SECTIONS`], or empty for all.
    pub fn report_sections(&self, sections: &[&str]) -> String {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let total = self.instructions_executed.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let mut out = String::new();

        if want("summary") {
            let _ = writeln!(out, "sim_insts                {}", self.instructions_executed);
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.shift", self.inst_shift),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.transfer", self.inst_transfer),
                ("op.nop", self.inst_nop),
            ] {
                let _ = writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count));
            }
        }
        if want("control") {
            let _ = writeln!(out, "CONTROL FLOW");
            let _ = writeln!(out, "  transfers.taken        {}", self.transfers_taken);
            let _ = writeln!(out, "  delay_slots            {}", self.delay_slots_executed);
            let _ = writeln!(out, "  nested.rejected        {}", self.nested_transfers_rejected);
            let _ = writeln!(out, "  memory.faults          {}", self.memory_faults);
        }
        out
    }
}
