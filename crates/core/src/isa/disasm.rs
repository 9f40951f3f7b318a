//! Instruction Disassembler.
//!
//! Converts a decoded [`Instruction`] back into canonical assembly text for debug
//! tracing, logging, and test diagnostics. Registers use their ABI names, jump
//! targets print as word indices, and branch offsets print as signed word counts,
//! exactly as the linker wrote them.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! use mipsim_core::isa::instruction::{ImmOp, Instruction};
//!
//! let inst = Instruction::Immediate { op: ImmOp::Addiu, rt: 8, rs: 0, imm: 5 };
//! assert_eq!(disassemble(&inst), "addiu $t0, $zero, 5");
//! ```

use crate::isa::abi;
use crate::isa::instruction::Instruction;

/// Returns `$name` for a register index.
#[inline]
fn reg(idx: usize) -> String {
    format!("${}", abi::name(idx))
}

/// Disassembles a decoded instruction into a human-readable string.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
pub fn disassemble(inst: &Instruction) -> String {
    let mnemonic = inst.mnemonic();
    match *inst {
        Instruction::Nop | Instruction::Invalid => mnemonic.to_string(),
        Instruction::Immediate { op, rt, rs, imm } => {
            format!("{mnemonic} {}, {}, {}", reg(rt), reg(rs), op.extend(imm))
        }
        Instruction::LoadUpper { rt, imm } => format!("{mnemonic} {}, {imm:#x}", reg(rt)),
        Instruction::Register { rd, rs, rt, .. }
        | Instruction::ConditionalMove { rd, rs, rt, .. } => {
            format!("{mnemonic} {}, {}, {}", reg(rd), reg(rs), reg(rt))
        }
        Instruction::Shift { rd, rt, shamt, .. } => {
            format!("{mnemonic} {}, {}, {shamt}", reg(rd), reg(rt))
        }
        Instruction::ShiftVariable { rd, rt, rs, .. } => {
            format!("{mnemonic} {}, {}, {}", reg(rd), reg(rt), reg(rs))
        }
        Instruction::Jump { target, .. } => format!("{mnemonic} {target}"),
        Instruction::JumpRegister { link, rs } => match link {
            Some(rd) if rd != abi::REG_RA => format!("{mnemonic} {}, {}", reg(rd), reg(rs)),
            _ => format!("{mnemonic} {}", reg(rs)),
        },
        Instruction::Branch {
            cond,
            rs,
            rt,
            offset,
        } => {
            if cond.compares_registers() {
                format!("{mnemonic} {}, {}, {offset}", reg(rs), reg(rt))
            } else {
                format!("{mnemonic} {}, {offset}", reg(rs))
            }
        }
        Instruction::Load {
            rt, base, offset, ..
        }
        | Instruction::Store {
            rt, base, offset, ..
        } => format!("{mnemonic} {}, {offset}({})", reg(rt), reg(base)),
    }
}
