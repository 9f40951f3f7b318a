//! # Statistics Tests
//!
//! Verifies that the instruction mix and control-flow counters track what ran.

use crate::common::TestContext;
use mipsim_core::stats::{STATS_SECTIONS, SimStats};

const PROGRAM: &str = "\
addiu $t0, $zero, 2
loop:
sll $t1, $t0, 2
sw $t1, 0($zero)
lw $t2, 0($zero)
addiu $t0, $t0, -1
bne $t0, $zero, loop
nop
";

/// Counts for a two-iteration loop.
#[test]
fn loop_counts() {
    let ctx = TestContext::new(PROGRAM).run();
    let stats = &ctx.sim.cpu.stats;
    assert_eq!(stats.instructions_executed, 13);
    assert_eq!(stats.inst_alu, 3);
    assert_eq!(stats.inst_shift, 2);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_store, 2);
    assert_eq!(stats.inst_transfer, 2);
    assert_eq!(stats.inst_nop, 2);
    assert_eq!(stats.transfers_taken, 1);
    assert_eq!(stats.delay_slots_executed, 2);
    assert_eq!(stats.nested_transfers_rejected, 0);
}

/// Reports include only the requested sections.
#[test]
fn report_sections() {
    let stats = SimStats {
        instructions_executed: 4,
        inst_alu: 1,
        ..SimStats::default()
    };
    let all = stats.report();
    assert!(all.contains("sim_insts                4"));
    assert!(all.contains("op.alu"));
    assert!(all.contains("25.00%"));
    assert!(all.contains("CONTROL FLOW"));

    let control = stats.report_sections(&["control"]);
    assert!(!control.contains("INSTRUCTION MIX"));
    assert!(control.contains("transfers.taken"));
    assert_eq!(STATS_SECTIONS.len(), 3);
}

/// An empty run reports zeros without dividing by zero.
#[test]
fn empty_report() {
    let report = SimStats::default().report_sections(&["instruction_mix"]);
    assert!(report.contains("0 (0.00%)"));
}
