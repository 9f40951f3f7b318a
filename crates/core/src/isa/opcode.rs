//! Supported mnemonics.
//!
//! The simulator accepts a closed set of MIPS32 instructions. Each [`Opcode`] knows its
//! textual mnemonic, the shape of its operand list, and whether its last operand is a
//! label reference the linker must resolve.

use std::fmt;
use std::str::FromStr;

/// Every instruction mnemonic the simulator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Add immediate unsigned (no overflow trap).
    Addiu,
    /// Bitwise AND with zero-extended immediate.
    Andi,
    /// Bitwise OR with zero-extended immediate.
    Ori,
    /// Bitwise XOR with zero-extended immediate.
    Xori,
    /// Set on less than sign-extended immediate.
    Slti,
    /// Set on less than sign-extended immediate, unsigned compare.
    Sltiu,
    /// Load upper immediate.
    Lui,
    /// Add unsigned (no overflow trap).
    Addu,
    /// Subtract unsigned (no overflow trap).
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set on less than.
    Slt,
    /// Set on less than, unsigned compare.
    Sltu,
    /// Move conditional on not zero.
    Movn,
    /// Move conditional on zero.
    Movz,
    /// Shift left logical by immediate.
    Sll,
    /// Shift right logical by immediate.
    Srl,
    /// Shift right arithmetic by immediate.
    Sra,
    /// Shift left logical by register.
    Sllv,
    /// Shift right logical by register.
    Srlv,
    /// Shift right arithmetic by register.
    Srav,
    /// Jump.
    J,
    /// Jump and link.
    Jal,
    /// Jump register.
    Jr,
    /// Jump and link register.
    Jalr,
    /// Branch on equal.
    Beq,
    /// Branch on not equal.
    Bne,
    /// Branch on less than zero.
    Bltz,
    /// Branch on less than or equal to zero.
    Blez,
    /// Branch on greater than zero.
    Bgtz,
    /// Branch on greater than or equal to zero.
    Bgez,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Load byte, sign-extended.
    Lb,
    /// Load byte, zero-extended.
    Lbu,
    /// Store byte.
    Sb,
}

/// Shape of an instruction's operand list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandFormat {
    /// `rt, rs, imm`
    RegImm,
    /// `rt, imm`
    UpperImm,
    /// `rd, rs, rt`
    ThreeReg,
    /// `rd, rt, sa`
    ShiftImm,
    /// `rd, rt, rs`
    ShiftReg,
    /// `target`
    Jump,
    /// `rs`
    JumpReg,
    /// `rs` or `rd, rs`
    JumpRegLink,
    /// `rs, rt, offset`
    BranchCompare,
    /// `rs, offset`
    BranchZero,
    /// `rt, offset(base)`
    Memory,
}

impl OperandFormat {
    /// Returns the accepted operand counts as an inclusive range.
    pub const fn operand_counts(self) -> (usize, usize) {
        match self {
            OperandFormat::Jump | OperandFormat::JumpReg => (1, 1),
            OperandFormat::JumpRegLink => (1, 2),
            OperandFormat::UpperImm | OperandFormat::BranchZero | OperandFormat::Memory => (2, 2),
            OperandFormat::RegImm
            | OperandFormat::ThreeReg
            | OperandFormat::ShiftImm
            | OperandFormat::ShiftReg
            | OperandFormat::BranchCompare => (3, 3),
        }
    }
}

/// How the linker rewrites the last operand of a control-transfer instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelMode {
    /// Absolute word index (`j`, `jal`).
    Absolute,
    /// Signed word offset from the delay-slot instruction (conditional branches).
    Relative,
}

impl Opcode {
    /// All supported opcodes.
    pub const ALL: [Opcode; 38] = [
        Opcode::Addiu,
        Opcode::Andi,
        Opcode::Ori,
        Opcode::Xori,
        Opcode::Slti,
        Opcode::Sltiu,
        Opcode::Lui,
        Opcode::Addu,
        Opcode::Subu,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Nor,
        Opcode::Slt,
        Opcode::Sltu,
        Opcode::Movn,
        Opcode::Movz,
        Opcode::Sll,
        Opcode::Srl,
        Opcode::Sra,
        Opcode::Sllv,
        Opcode::Srlv,
        Opcode::Srav,
        Opcode::J,
        Opcode::Jal,
        Opcode::Jr,
        Opcode::Jalr,
        Opcode::Beq,
        Opcode::Bne,
        Opcode::Bltz,
        Opcode::Blez,
        Opcode::Bgtz,
        Opcode::Bgez,
        Opcode::Lw,
        Opcode::Sw,
        Opcode::Lb,
        Opcode::Lbu,
        Opcode::Sb,
    ];

    /// Returns the lowercase mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Addiu => "addiu",
            Opcode::Andi => "andi",
            Opcode::Ori => "ori",
            Opcode::Xori => "xori",
            Opcode::Slti => "slti",
            Opcode::Sltiu => "sltiu",
            Opcode::Lui => "lui",
            Opcode::Addu => "addu",
            Opcode::Subu => "subu",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Nor => "nor",
            Opcode::Slt => "slt",
            Opcode::Sltu => "sltu",
            Opcode::Movn => "movn",
            Opcode::Movz => "movz",
            Opcode::Sll => "sll",
            Opcode::Srl => "srl",
            Opcode::Sra => "sra",
            Opcode::Sllv => "sllv",
            Opcode::Srlv => "srlv",
            Opcode::Srav => "srav",
            Opcode::J => "j",
            Opcode::Jal => "jal",
            Opcode::Jr => "jr",
            Opcode::Jalr => "jalr",
            Opcode::Beq => "beq",
            Opcode::Bne => "bne",
            Opcode::Bltz => "bltz",
            Opcode::Blez => "blez",
            Opcode::Bgtz => "bgtz",
            Opcode::Bgez => "bgez",
            Opcode::Lw => "lw",
            Opcode::Sw => "sw",
            Opcode::Lb => "lb",
            Opcode::Lbu => "lbu",
            Opcode::Sb => "sb",
        }
    }

    /// Returns the operand shape of this opcode.
    pub const fn format(self) -> OperandFormat {
        match self {
            Opcode::Addiu
            | Opcode::Andi
            | Opcode::Ori
            | Opcode::Xori
            | Opcode::Slti
            | Opcode::Sltiu => OperandFormat::RegImm,
            Opcode::Lui => OperandFormat::UpperImm,
            Opcode::Addu
            | Opcode::Subu
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Nor
            | Opcode::Slt
            | Opcode::Sltu
            | Opcode::Movn
            | Opcode::Movz => OperandFormat::ThreeReg,
            Opcode::Sll | Opcode::Srl | Opcode::Sra => OperandFormat::ShiftImm,
            Opcode::Sllv | Opcode::Srlv | Opcode::Srav => OperandFormat::ShiftReg,
            Opcode::J | Opcode::Jal => OperandFormat::Jump,
            Opcode::Jr => OperandFormat::JumpReg,
            Opcode::Jalr => OperandFormat::JumpRegLink,
            Opcode::Beq | Opcode::Bne => OperandFormat::BranchCompare,
            Opcode::Bltz | Opcode::Blez | Opcode::Bgtz | Opcode::Bgez => OperandFormat::BranchZero,
            Opcode::Lw | Opcode::Sw | Opcode::Lb | Opcode::Lbu | Opcode::Sb => {
                OperandFormat::Memory
            }
        }
    }

    /// Returns how the linker treats the last operand, or `None` if it is not a label.
    pub const fn label_mode(self) -> Option<LabelMode> {
        match self.format() {
            OperandFormat::Jump => Some(LabelMode::Absolute),
            OperandFormat::BranchCompare | OperandFormat::BranchZero => Some(LabelMode::Relative),
            _ => None,
        }
    }

    /// Looks up a mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when parsing an unknown mnemonic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported operation: {0}")]
pub struct UnknownOpcode(pub String);

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| UnknownOpcode(s.to_string()))
    }
}
