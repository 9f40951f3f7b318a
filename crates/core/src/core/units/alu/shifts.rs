//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). The shift amount is masked to 5 bits (0-31)
//! for both the immediate and the register forms.

use super::AluOp;
use crate::common::constants::SHAMT_MASK;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The shift to perform.
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount; only the low 5 bits are used.
///
/// # Returns
///
/// The shifted value, or `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let sh = b as u32 & SHAMT_MASK;
    match op {
        AluOp::Sll => ((a as u32) << sh) as i32,
        AluOp::Srl => ((a as u32) >> sh) as i32,
        AluOp::Sra => a >> sh,
        _ => 0,
    }
}
