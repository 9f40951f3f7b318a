//! ALU logic and comparison operations.
//!
//! Bitwise operations work on the raw 32 bits. `Slt` compares as signed,
//! `Sltu` reinterprets both operands as unsigned 32-bit values.

use super::AluOp;

/// Executes a logic or compare operation. Returns `0` for other opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => i32::from(a < b),
        AluOp::Sltu => i32::from((a as u32) < (b as u32)),
        _ => 0,
    }
}
