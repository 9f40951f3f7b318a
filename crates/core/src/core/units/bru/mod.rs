//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional branch predicates and computes transfer targets. The
//! CPU captures register values before the delay slot runs and passes them here,
//! so the outcome never depends on what the delay-slot instruction writes.

use crate::common::constants::{INSTRUCTION_BYTES, JUMP_REGION_MASK};
use crate::isa::instruction::BranchCond;

/// Returns `true` if the branch is taken for the given operand values.
///
/// For the compare-with-zero forms `b` is ignored.
pub const fn taken(cond: BranchCond, a: i32, b: i32) -> bool {
    match cond {
        BranchCond::Beq => a == b,
        BranchCond::Bne => a != b,
        BranchCond::Bltz => a < 0,
        BranchCond::Blez => a <= 0,
        BranchCond::Bgtz => a > 0,
        BranchCond::Bgez => a >= 0,
    }
}

/// Computes a branch target from the delay-slot address and a signed word offset.
pub const fn branch_target(delay_slot_pc: u32, offset: i32) -> u32 {
    delay_slot_pc.wrapping_add(offset.wrapping_mul(INSTRUCTION_BYTES as i32) as u32)
}

/// Computes a `j`/`jal` target: the top four bits of the delay-slot address
/// combined with the word index shifted left by two.
pub const fn jump_target(delay_slot_pc: u32, index: u32) -> u32 {
    (delay_slot_pc & JUMP_REGION_MASK) | (index << 2)
}
