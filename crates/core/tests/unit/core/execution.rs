//! # Execution Tests
//!
//! Per-opcode results, fault fallbacks, and the run entry points.

use crate::common::TestContext;
use mipsim_core::RunOutcome;
use mipsim_core::common::DiagnosticKind;
use mipsim_core::config::Config;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::addiu_negative("addiu $t0, $zero, -1", -1)]
#[case::addiu_sign_extends("addiu $t0, $zero, 0xffff", -1)]
#[case::ori_zero_extends("ori $t0, $zero, 0xffff", 0xffff)]
#[case::andi("addiu $t1, $zero, -1\nandi $t0, $t1, 0x8000", 0x8000)]
#[case::xori("addiu $t1, $zero, 0xf0\nxori $t0, $t1, 0xff", 0x0f)]
#[case::slti_true("slti $t0, $zero, 1", 1)]
#[case::slti_false("slti $t0, $zero, -1", 0)]
#[case::sltiu_unsigned("sltiu $t0, $zero, -1", 1)]
#[case::lui("lui $t0, 0x1234", 0x1234_0000)]
#[case::lui_high_bit("lui $t0, 0xffff", -65536)]
#[case::addu_wraps(
    "lui $t1, 0x7fff\nori $t1, $t1, 0xffff\naddiu $t2, $zero, 1\naddu $t0, $t1, $t2",
    i32::MIN
)]
#[case::subu("addiu $t1, $zero, 3\naddiu $t2, $zero, 5\nsubu $t0, $t1, $t2", -2)]
#[case::and("addiu $t1, $zero, 12\naddiu $t2, $zero, 10\nand $t0, $t1, $t2", 8)]
#[case::or("addiu $t1, $zero, 12\naddiu $t2, $zero, 10\nor $t0, $t1, $t2", 14)]
#[case::xor("addiu $t1, $zero, 12\naddiu $t2, $zero, 10\nxor $t0, $t1, $t2", 6)]
#[case::nor("nor $t0, $zero, $zero", -1)]
#[case::slt_signed("addiu $t1, $zero, -1\naddiu $t2, $zero, 1\nslt $t0, $t1, $t2", 1)]
#[case::sltu_unsigned("addiu $t1, $zero, -1\naddiu $t2, $zero, 1\nsltu $t0, $t1, $t2", 0)]
#[case::movn_moves("addiu $t1, $zero, 9\naddiu $t2, $zero, 1\nmovn $t0, $t1, $t2", 9)]
#[case::movn_holds("addiu $t1, $zero, 9\nmovn $t0, $t1, $zero", 0)]
#[case::movz_moves("addiu $t1, $zero, 9\nmovz $t0, $t1, $zero", 9)]
#[case::movz_holds("addiu $t1, $zero, 9\naddiu $t2, $zero, 1\nmovz $t0, $t1, $t2", 0)]
#[case::sll("addiu $t1, $zero, 1\nsll $t0, $t1, 31", i32::MIN)]
#[case::srl_zero_fills("addiu $t1, $zero, -16\nsrl $t0, $t1, 28", 15)]
#[case::sra_sign_fills("addiu $t1, $zero, -16\nsra $t0, $t1, 2", -4)]
#[case::sllv_masks("addiu $t1, $zero, 3\naddiu $t2, $zero, 33\nsllv $t0, $t1, $t2", 6)]
#[case::srlv("addiu $t1, $zero, -1\naddiu $t2, $zero, 31\nsrlv $t0, $t1, $t2", 1)]
#[case::srav("addiu $t1, $zero, -8\naddiu $t2, $zero, 1\nsrav $t0, $t1, $t2", -4)]
fn opcode_results(#[case] source: &str, #[case] expected: i32) {
    let ctx = TestContext::new(source).run();
    assert!(ctx.kinds().is_empty(), "{:?}", ctx.kinds());
    assert_eq!(ctx.reg("t0"), expected);
}

/// Writes to `$zero` never stick.
#[test]
fn zero_register_stays_zero() {
    let ctx = TestContext::new(
        "addiu $zero, $zero, 5\n\
         lui $0, 1\n\
         nor $zero, $zero, $zero\n\
         addu $t0, $zero, $zero\n",
    )
    .run();
    assert_eq!(ctx.reg("zero"), 0);
    assert_eq!(ctx.reg("t0"), 0);
}

/// `0x10000` is reported and the add proceeds with the masked value.
#[test]
fn immediate_overflow_uses_masked_value() {
    let ctx = TestContext::new("addiu $t0, $zero, 7\naddiu $t0, $t0, 0x10000\n").run();
    assert_eq!(ctx.reg("t0"), 7);
    assert_eq!(
        ctx.diagnostics(),
        vec![(
            2,
            DiagnosticKind::ImmediateOverflow {
                value: 65536,
                bits: 16
            }
        )]
    );
}

/// Lines that cannot execute are reported once, leave state alone, and advance the pc.
#[test]
fn faulty_lines_are_inert() {
    let ctx = TestContext::new(
        "addiu $t0, $zero, 1\n\
         bogus\n\
         mul $t0, $t0, $t0\n\
         addiu $t0, $nope, 9\n\
         addiu $t1, $zero, 2\n",
    )
    .run();
    assert_eq!(ctx.reg("t0"), 1);
    assert_eq!(ctx.reg("t1"), 2);
    assert_eq!(
        ctx.diagnostics(),
        vec![
            (2, DiagnosticKind::InvalidInstruction("bogus".into())),
            (3, DiagnosticKind::UnsupportedOperation("mul".into())),
            (4, DiagnosticKind::InvalidRegister("$nope".into())),
        ]
    );
    assert_eq!(ctx.sim.cpu.stats.inst_nop, 3);
}

/// Diagnostics carry source line numbers, not program indices.
#[test]
fn diagnostics_use_source_lines() {
    let ctx = TestContext::new(
        "# header comment\n\
         \n\
         start:\n\
         addiu $t0, $zero, 1   # fine\n\
         \n\
         addiu $t0, $t0, 70000\n",
    );
    assert_eq!(
        ctx.diagnostics(),
        vec![(
            6,
            DiagnosticKind::ImmediateOverflow {
                value: 70000,
                bits: 16
            }
        )]
    );
}

/// `step` past the end of the program does nothing.
#[test]
fn step_past_end_is_noop() {
    let mut ctx = TestContext::new("addiu $t0, $zero, 1\n");
    ctx.step(3);
    assert_eq!(ctx.reg("t0"), 1);
    assert_eq!(ctx.sim.cpu.pc, 4);
    assert_eq!(ctx.sim.cpu.stats.instructions_executed, 1);
    assert!(ctx.sim.is_finished());
}

/// An empty program halts immediately.
#[test]
fn empty_program_halts() {
    let mut ctx = TestContext::new("# nothing here\n\n");
    assert!(ctx.sim.program().is_empty());
    assert_eq!(ctx.sim.run(), RunOutcome::Halted);
    assert_eq!(ctx.sim.cpu.pc, 0);
}

/// `run_until_line` executes the instruction on the requested line, then stops.
#[test]
fn run_until_line_executes_target_line() {
    let mut ctx = TestContext::new(
        "addiu $t0, $zero, 1\n\
         addiu $t1, $zero, 2\n\
         addiu $t2, $zero, 3\n\
         addiu $t3, $zero, 4\n",
    );
    assert_eq!(ctx.sim.run_until_line(3), RunOutcome::Breakpoint { line: 3 });
    assert_eq!(ctx.reg("t1"), 2);
    assert_eq!(ctx.reg("t2"), 3);
    assert_eq!(ctx.reg("t3"), 0);
    assert_eq!(ctx.sim.current_line(), Some(4));

    // Line 3 is not fetched again, so a repeat call runs to the end.
    assert_eq!(ctx.sim.run_until_line(3), RunOutcome::Halted);
    assert_eq!(ctx.reg("t3"), 4);
    assert_eq!(ctx.sim.run_until_line(99), RunOutcome::Halted);
}

/// `run_until_line` finds a line that is reached through a branch.
#[test]
fn run_until_line_follows_control_flow() {
    let mut ctx = TestContext::new(
        "j later\n\
         nop\n\
         addiu $t0, $zero, 1\n\
         later:\n\
         addiu $t1, $zero, 1\n\
         j back\n\
         nop\n\
         back:\n\
         addiu $t2, $zero, 1\n",
    );
    assert_eq!(ctx.sim.run_until_line(5), RunOutcome::Breakpoint { line: 5 });
    assert_eq!(ctx.reg("t0"), 0);
    assert_eq!(ctx.reg("t1"), 1);
    assert_eq!(ctx.reg("t2"), 0);

    assert_eq!(ctx.sim.run_until_line(9), RunOutcome::Breakpoint { line: 9 });
    assert_eq!(ctx.reg("t2"), 1);
    assert!(ctx.sim.is_finished());
}

/// A line that only ever runs as a delay slot is not matched.
#[test]
fn run_until_line_skips_delay_slot_lines() {
    let mut ctx = TestContext::new(
        "j done\n\
         addiu $t0, $zero, 7\n\
         done:\n\
         addiu $t1, $zero, 1\n",
    );
    assert_eq!(ctx.sim.run_until_line(2), RunOutcome::Halted);
    assert_eq!(ctx.reg("t0"), 7);
    assert_eq!(ctx.reg("t1"), 1);
}

/// An opt-in step ceiling ends an infinite loop.
#[test]
fn step_limit_stops_infinite_loop() {
    let mut config = Config::default();
    config.general.step_limit = Some(10);
    let mut ctx = TestContext::with_config("spin:\nj spin\nnop\n", &config);
    assert_eq!(ctx.sim.run(), RunOutcome::StepLimit { steps: 10 });
    assert_eq!(ctx.sim.cpu.stats.inst_transfer, 10);
    assert!(ctx.kinds().is_empty());
}

/// Tracing every instruction does not change results.
#[test]
fn tracing_does_not_change_results() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let ctx = TestContext::with_config(
        "beq $0, $0, skip\naddiu $t0, $t0, 1\nskip:\naddiu $t0, $t0, 5\n",
        &config,
    )
    .run();
    assert_eq!(ctx.reg("t0"), 6);
}
