//! MIPS Instruction Decoder.
//!
//! This module turns one linked source line into a structured [`Instruction`]. It
//! performs the following:
//! 1. **Splitting:** Separates the mnemonic from the comma-separated operand list.
//! 2. **Validation:** Checks the mnemonic and operand count against the opcode table.
//! 3. **Resolution:** Resolves every operand through the tokenizer and range-checks
//!    immediates, shift amounts, jump targets, and branch offsets.
//!
//! Every fault is recorded in the diagnostics collector. Oversized values are reported
//! and truncated; unresolvable operands turn the whole line into
//! [`Instruction::Invalid`], which executes as a no-op.

use crate::common::constants::{
    IMMEDIATE_BITS, IMMEDIATE_MASK, IMMEDIATE_SIGNED_MIN, JUMP_INDEX_BITS, JUMP_INDEX_MASK,
    NOP_MNEMONIC, SHAMT_BITS, SHAMT_MASK,
};
use crate::common::error::{DiagnosticKind, Diagnostics};
use crate::isa::abi;
use crate::isa::instruction::{
    BranchCond, ImmOp, Instruction, LoadOp, MoveCond, RegOp, ShiftOp, StoreOp,
};
use crate::isa::opcode::Opcode;
use crate::isa::operand::{self, Token};

/// Operand cursor that records faults against one source line.
struct Operands<'a, 'd> {
    tokens: Vec<&'a str>,
    line: usize,
    diagnostics: &'d mut Diagnostics,
    failed: bool,
}

impl Operands<'_, '_> {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Records a fault that leaves the instruction usable.
    fn report(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(self.line, kind);
    }

    /// Records a fault that makes the instruction unusable.
    fn fail(&mut self, kind: DiagnosticKind) {
        self.report(kind);
        self.failed = true;
    }

    fn register(&mut self, i: usize) -> usize {
        let text = self.tokens[i];
        match operand::tokenize(text) {
            Ok(Token::Register(idx)) => idx,
            Ok(_) => {
                self.fail(DiagnosticKind::InvalidRegister(text.to_string()));
                abi::REG_ZERO
            }
            Err(kind) => {
                self.fail(kind);
                abi::REG_ZERO
            }
        }
    }

    fn value(&mut self, i: usize) -> Option<i64> {
        let text = self.tokens[i];
        match operand::tokenize(text) {
            Ok(Token::Value(value)) => Some(value),
            Ok(_) => {
                self.fail(DiagnosticKind::UnknownValue(text.to_string()));
                None
            }
            Err(kind) => {
                self.fail(kind);
                None
            }
        }
    }

    /// A 16-bit immediate. Values that fit neither the signed nor the unsigned
    /// interpretation are reported and truncated to the low 16 bits.
    fn immediate(&mut self, i: usize) -> u16 {
        let Some(value) = self.value(i) else {
            return 0;
        };
        if !(IMMEDIATE_SIGNED_MIN..=IMMEDIATE_MASK).contains(&value) {
            self.report(DiagnosticKind::ImmediateOverflow {
                value,
                bits: IMMEDIATE_BITS,
            });
        }
        (value & IMMEDIATE_MASK) as u16
    }

    fn shift_amount(&mut self, i: usize) -> u32 {
        let Some(value) = self.value(i) else {
            return 0;
        };
        if !(0..=i64::from(SHAMT_MASK)).contains(&value) {
            self.report(DiagnosticKind::ImmediateOverflow {
                value,
                bits: SHAMT_BITS,
            });
        }
        (value & i64::from(SHAMT_MASK)) as u32
    }

    fn jump_target(&mut self, i: usize) -> u32 {
        let Some(value) = self.value(i) else {
            return 0;
        };
        if !(0..=JUMP_INDEX_MASK).contains(&value) {
            self.report(DiagnosticKind::ImmediateOverflow {
                value,
                bits: JUMP_INDEX_BITS,
            });
        }
        (value & JUMP_INDEX_MASK) as u32
    }

    fn branch_offset(&mut self, i: usize) -> i32 {
        let Some(value) = self.value(i) else {
            return 0;
        };
        if i16::try_from(value).is_err() {
            self.report(DiagnosticKind::ImmediateOverflow {
                value,
                bits: IMMEDIATE_BITS,
            });
        }
        i32::from(value as i16)
    }

    /// An `offset(base)` operand. A bare integer is an absolute address off `$zero`.
    fn memory(&mut self, i: usize) -> (i32, usize) {
        let text = self.tokens[i];
        let (offset, base) = match operand::tokenize(text) {
            Ok(Token::Memory { offset, base }) => (offset, base),
            Ok(Token::Value(offset)) => (offset, abi::REG_ZERO),
            Ok(Token::Register(_)) => {
                self.fail(DiagnosticKind::UnknownValue(text.to_string()));
                return (0, abi::REG_ZERO);
            }
            Err(kind) => {
                self.fail(kind);
                return (0, abi::REG_ZERO);
            }
        };
        let narrowed = i32::try_from(offset).unwrap_or_else(|_| {
            self.report(DiagnosticKind::ImmediateOverflow {
                value: offset,
                bits: 32,
            });
            offset as i32
        });
        (narrowed, base)
    }
}

/// Splits a line into its mnemonic and operand text at the first whitespace.
///
/// Returns `None` when the line has no separator.
pub fn split_mnemonic(text: &str) -> Option<(&str, &str)> {
    text.trim()
        .split_once(char::is_whitespace)
        .map(|(mnemonic, rest)| (mnemonic, rest.trim()))
}

/// Decodes one linked, comment-free source line.
///
/// # Arguments
///
/// * `text` - The instruction text, with label references already rewritten.
/// * `line` - 1-based source line used to tag diagnostics.
/// * `diagnostics` - Collector receiving every fault found.
///
/// # Returns
///
/// The decoded instruction, or [`Instruction::Invalid`] if it cannot be executed.
pub fn decode(text: &str, line: usize, diagnostics: &mut Diagnostics) -> Instruction {
    let Some((mnemonic, rest)) = split_mnemonic(text) else {
        let text = text.trim();
        if text.eq_ignore_ascii_case(NOP_MNEMONIC) {
            return Instruction::Nop;
        }
        diagnostics.push(line, DiagnosticKind::InvalidInstruction(text.to_string()));
        return Instruction::Invalid;
    };

    let Some(opcode) = Opcode::from_mnemonic(mnemonic) else {
        diagnostics.push(
            line,
            DiagnosticKind::UnsupportedOperation(mnemonic.to_string()),
        );
        return Instruction::Invalid;
    };

    let tokens = operand::split_operands(rest);
    let (min, max) = opcode.format().operand_counts();
    if tokens.len() < min || tokens.len() > max {
        diagnostics.push(
            line,
            DiagnosticKind::OperandCount {
                mnemonic: opcode.mnemonic(),
                expected: max,
                found: tokens.len(),
            },
        );
        return Instruction::Invalid;
    }

    let mut ops = Operands {
        tokens,
        line,
        diagnostics,
        failed: false,
    };
    let instruction = build(opcode, &mut ops);
    if ops.failed {
        Instruction::Invalid
    } else {
        instruction
    }
}

fn immediate(ops: &mut Operands<'_, '_>, op: ImmOp) -> Instruction {
    Instruction::Immediate {
        op,
        rt: ops.register(0),
        rs: ops.register(1),
        imm: ops.immediate(2),
    }
}

fn register(ops: &mut Operands<'_, '_>, op: RegOp) -> Instruction {
    Instruction::Register {
        op,
        rd: ops.register(0),
        rs: ops.register(1),
        rt: ops.register(2),
    }
}

fn conditional_move(ops: &mut Operands<'_, '_>, cond: MoveCond) -> Instruction {
    Instruction::ConditionalMove {
        cond,
        rd: ops.register(0),
        rs: ops.register(1),
        rt: ops.register(2),
    }
}

fn shift(ops: &mut Operands<'_, '_>, op: ShiftOp) -> Instruction {
    Instruction::Shift {
        op,
        rd: ops.register(0),
        rt: ops.register(1),
        shamt: ops.shift_amount(2),
    }
}

fn shift_variable(ops: &mut Operands<'_, '_>, op: ShiftOp) -> Instruction {
    Instruction::ShiftVariable {
        op,
        rd: ops.register(0),
        rt: ops.register(1),
        rs: ops.register(2),
    }
}

fn branch(ops: &mut Operands<'_, '_>, cond: BranchCond) -> Instruction {
    if cond.compares_registers() {
        Instruction::Branch {
            cond,
            rs: ops.register(0),
            rt: ops.register(1),
            offset: ops.branch_offset(2),
        }
    } else {
        Instruction::Branch {
            cond,
            rs: ops.register(0),
            rt: abi::REG_ZERO,
            offset: ops.branch_offset(1),
        }
    }
}

fn load(ops: &mut Operands<'_, '_>, op: LoadOp) -> Instruction {
    let rt = ops.register(0);
    let (offset, base) = ops.memory(1);
    Instruction::Load {
        op,
        rt,
        base,
        offset,
    }
}

fn store(ops: &mut Operands<'_, '_>, op: StoreOp) -> Instruction {
    let rt = ops.register(0);
    let (offset, base) = ops.memory(1);
    Instruction::Store {
        op,
        rt,
        base,
        offset,
    }
}

fn build(opcode: Opcode, ops: &mut Operands<'_, '_>) -> Instruction {
    match opcode {
        Opcode::Addiu => immediate(ops, ImmOp::Addiu),
        Opcode::Andi => immediate(ops, ImmOp::Andi),
        Opcode::Ori => immediate(ops, ImmOp::Ori),
        Opcode::Xori => immediate(ops, ImmOp::Xori),
        Opcode::Slti => immediate(ops, ImmOp::Slti),
        Opcode::Sltiu => immediate(ops, ImmOp::Sltiu),
        Opcode::Lui => Instruction::LoadUpper {
            rt: ops.register(0),
            imm: ops.immediate(1),
        },
        Opcode::Addu => register(ops, RegOp::Addu),
        Opcode::Subu => register(ops, RegOp::Subu),
        Opcode::And => register(ops, RegOp::And),
        Opcode::Or => register(ops, RegOp::Or),
        Opcode::Xor => register(ops, RegOp::Xor),
        Opcode::Nor => register(ops, RegOp::Nor),
        Opcode::Slt => register(ops, RegOp::Slt),
        Opcode::Sltu => register(ops, RegOp::Sltu),
        Opcode::Movn => conditional_move(ops, MoveCond::Movn),
        Opcode::Movz => conditional_move(ops, MoveCond::Movz),
        Opcode::Sll => shift(ops, ShiftOp::Sll),
        Opcode::Srl => shift(ops, ShiftOp::Srl),
        Opcode::Sra => shift(ops, ShiftOp::Sra),
        Opcode::Sllv => shift_variable(ops, ShiftOp::Sll),
        Opcode::Srlv => shift_variable(ops, ShiftOp::Srl),
        Opcode::Srav => shift_variable(ops, ShiftOp::Sra),
        Opcode::J => Instruction::Jump {
            link: false,
            target: ops.jump_target(0),
        },
        Opcode::Jal => Instruction::Jump {
            link: true,
            target: ops.jump_target(0),
        },
        Opcode::Jr => Instruction::JumpRegister {
            link: None,
            rs: ops.register(0),
        },
        Opcode::Jalr => {
            if ops.len() == 2 {
                Instruction::JumpRegister {
                    link: Some(ops.register(0)),
                    rs: ops.register(1),
                }
            } else {
                Instruction::JumpRegister {
                    link: Some(abi::REG_RA),
                    rs: ops.register(0),
                }
            }
        }
        Opcode::Beq => branch(ops, BranchCond::Beq),
        Opcode::Bne => branch(ops, BranchCond::Bne),
        Opcode::Bltz => branch(ops, BranchCond::Bltz),
        Opcode::Blez => branch(ops, BranchCond::Blez),
        Opcode::Bgtz => branch(ops, BranchCond::Bgtz),
        Opcode::Bgez => branch(ops, BranchCond::Bgez),
        Opcode::Lw => load(ops, LoadOp::Lw),
        Opcode::Lb => load(ops, LoadOp::Lb),
        Opcode::Lbu => load(ops, LoadOp::Lbu),
        Opcode::Sw => store(ops, StoreOp::Sw),
        Opcode::Sb => store(ops, StoreOp::Sb),
    }
}
