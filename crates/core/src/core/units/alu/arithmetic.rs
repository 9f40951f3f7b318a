//! ALU arithmetic operations.
//!
//! `addu`/`subu`/`addiu` never trap on overflow; results wrap modulo 2^32.

use super::AluOp;

/// Executes an arithmetic operation. Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
