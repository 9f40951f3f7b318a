//! Decoded instruction record.
//!
//! Source text is decoded once, after linking, into an [`Instruction`]. Each variant
//! groups instructions that share an operand shape and carries an operation enum that
//! selects the exact behavior, so the CPU matches exhaustively and never re-parses text.

use crate::core::units::alu::AluOp;

/// Immediate-operand ALU operations (`rt = rs op imm`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmOp {
    /// `addiu`
    Addiu,
    /// `andi`
    Andi,
    /// `ori`
    Ori,
    /// `xori`
    Xori,
    /// `slti`
    Slti,
    /// `sltiu`
    Sltiu,
}

impl ImmOp {
    /// Returns the ALU operation performed.
    pub const fn alu_op(self) -> AluOp {
        match self {
            ImmOp::Addiu => AluOp::Add,
            ImmOp::Andi => AluOp::And,
            ImmOp::Ori => AluOp::Or,
            ImmOp::Xori => AluOp::Xor,
            ImmOp::Slti => AluOp::Slt,
            ImmOp::Sltiu => AluOp::Sltu,
        }
    }

    /// Widens a 16-bit immediate to 32 bits.
    ///
    /// Arithmetic and compare forms sign-extend; logical forms zero-extend.
    pub const fn extend(self, imm: u16) -> i32 {
        match self {
            ImmOp::Addiu | ImmOp::Slti | ImmOp::Sltiu => imm as i16 as i32,
            ImmOp::Andi | ImmOp::Ori | ImmOp::Xori => imm as i32,
        }
    }

    /// Returns the mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            ImmOp::Addiu => "addiu",
            ImmOp::Andi => "andi",
            ImmOp::Ori => "ori",
            ImmOp::Xori => "xori",
            ImmOp::Slti => "slti",
            ImmOp::Sltiu => "sltiu",
        }
    }
}

/// Three-register ALU operations (`rd = rs op rt`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegOp {
    /// `addu`
    Addu,
    /// `subu`
    Subu,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `nor`
    Nor,
    /// `slt`
    Slt,
    /// `sltu`
    Sltu,
}

impl RegOp {
    /// Returns the ALU operation performed.
    pub const fn alu_op(self) -> AluOp {
        match self {
            RegOp::Addu => AluOp::Add,
            RegOp::Subu => AluOp::Sub,
            RegOp::And => AluOp::And,
            RegOp::Or => AluOp::Or,
            RegOp::Xor => AluOp::Xor,
            RegOp::Nor => AluOp::Nor,
            RegOp::Slt => AluOp::Slt,
            RegOp::Sltu => AluOp::Sltu,
        }
    }

    /// Returns the mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            RegOp::Addu => "addu",
            RegOp::Subu => "subu",
            RegOp::And => "and",
            RegOp::Or => "or",
            RegOp::Xor => "xor",
            RegOp::Nor => "nor",
            RegOp::Slt => "slt",
            RegOp::Sltu => "sltu",
        }
    }
}

/// Shift operations, by immediate or by register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    /// Shift left logical.
    Sll,
    /// Shift right logical (zero fill).
    Srl,
    /// Shift right arithmetic (sign fill).
    Sra,
}

impl ShiftOp {
    /// Returns the ALU operation performed.
    pub const fn alu_op(self) -> AluOp {
        match self {
            ShiftOp::Sll => AluOp::Sll,
            ShiftOp::Srl => AluOp::Srl,
            ShiftOp::Sra => AluOp::Sra,
        }
    }

    /// Returns the mnemonic of the immediate form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            ShiftOp::Sll => "sll",
            ShiftOp::Srl => "srl",
            ShiftOp::Sra => "sra",
        }
    }

    /// Returns the mnemonic of the register form.
    pub const fn variable_mnemonic(self) -> &'static str {
        match self {
            ShiftOp::Sll => "sllv",
            ShiftOp::Srl => "srlv",
            ShiftOp::Sra => "srav",
        }
    }
}

/// Conditional move predicates, tested on the condition register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveCond {
    /// `movn`: move if not zero.
    Movn,
    /// `movz`: move if zero.
    Movz,
}

impl MoveCond {
    /// Returns `true` if the move should happen for this condition value.
    pub const fn holds(self, value: i32) -> bool {
        match self {
            MoveCond::Movn => value != 0,
            MoveCond::Movz => value == 0,
        }
    }

    /// Returns the mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            MoveCond::Movn => "movn",
            MoveCond::Movz => "movz",
        }
    }
}

/// Conditional branch predicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchCond {
    /// `beq rs, rt`
    Beq,
    /// `bne rs, rt`
    Bne,
    /// `bltz rs`
    Bltz,
    /// `blez rs`
    Blez,
    /// `bgtz rs`
    Bgtz,
    /// `bgez rs`
    Bgez,
}

impl BranchCond {
    /// Returns `true` if the branch compares two registers rather than one against zero.
    pub const fn compares_registers(self) -> bool {
        matches!(self, BranchCond::Beq | BranchCond::Bne)
    }

    /// Returns the mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            BranchCond::Beq => "beq",
            BranchCond::Bne => "bne",
            BranchCond::Bltz => "bltz",
            BranchCond::Blez => "blez",
            BranchCond::Bgtz => "bgtz",
            BranchCond::Bgez => "bgez",
        }
    }
}

/// Load operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadOp {
    /// `lw`: four bytes, little-endian.
    Lw,
    /// `lb`: one byte, sign-extended.
    Lb,
    /// `lbu`: one byte, zero-extended.
    Lbu,
}

impl LoadOp {
    /// Returns the mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            LoadOp::Lw => "lw",
            LoadOp::Lb => "lb",
            LoadOp::Lbu => "lbu",
        }
    }
}

/// Store operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// `sw`: four bytes, little-endian.
    Sw,
    /// `sb`: the low byte.
    Sb,
}

impl StoreOp {
    /// Returns the mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            StoreOp::Sw => "sw",
            StoreOp::Sb => "sb",
        }
    }
}

/// A fully decoded instruction with resolved register indices and immediates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `nop`
    Nop,
    /// A line whose decode failed; executes as a no-op.
    Invalid,
    /// `addiu`, `andi`, `ori`, `xori`, `slti`, `sltiu`
    Immediate {
        /// Operation.
        op: ImmOp,
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Raw 16-bit immediate, widened per `op`.
        imm: u16,
    },
    /// `lui`
    LoadUpper {
        /// Destination register.
        rt: usize,
        /// Value for the upper half.
        imm: u16,
    },
    /// `addu`, `subu`, `and`, `or`, `xor`, `nor`, `slt`, `sltu`
    Register {
        /// Operation.
        op: RegOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
    },
    /// `movn`, `movz`
    ConditionalMove {
        /// Predicate on `rt`.
        cond: MoveCond,
        /// Destination register.
        rd: usize,
        /// Source register.
        rs: usize,
        /// Condition register.
        rt: usize,
    },
    /// `sll`, `srl`, `sra`
    Shift {
        /// Operation.
        op: ShiftOp,
        /// Destination register.
        rd: usize,
        /// Register to shift.
        rt: usize,
        /// Shift amount (0-31).
        shamt: u32,
    },
    /// `sllv`, `srlv`, `srav`
    ShiftVariable {
        /// Operation.
        op: ShiftOp,
        /// Destination register.
        rd: usize,
        /// Register to shift.
        rt: usize,
        /// Register holding the shift amount; only the low 5 bits are used.
        rs: usize,
    },
    /// `j`, `jal`
    Jump {
        /// Writes the return address into `$ra` when set.
        link: bool,
        /// 26-bit word index of the target.
        target: u32,
    },
    /// `jr`, `jalr`
    JumpRegister {
        /// Register receiving the return address (`jalr` only).
        link: Option<usize>,
        /// Register holding the target byte address.
        rs: usize,
    },
    /// `beq`, `bne`, `bltz`, `blez`, `bgtz`, `bgez`
    Branch {
        /// Predicate.
        cond: BranchCond,
        /// First compared register.
        rs: usize,
        /// Second compared register; `$zero` for the compare-with-zero forms.
        rt: usize,
        /// Signed word offset from the delay-slot instruction.
        offset: i32,
    },
    /// `lw`, `lb`, `lbu`
    Load {
        /// Operation.
        op: LoadOp,
        /// Destination register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Byte offset added to the base.
        offset: i32,
    },
    /// `sw`, `sb`
    Store {
        /// Operation.
        op: StoreOp,
        /// Register holding the value to store.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Byte offset added to the base.
        offset: i32,
    },
}

impl Instruction {
    /// Returns `true` for jumps and branches, which own a delay slot.
    pub const fn is_transfer(&self) -> bool {
        matches!(
            self,
            Instruction::Jump { .. } | Instruction::JumpRegister { .. } | Instruction::Branch { .. }
        )
    }

    /// Returns the mnemonic, or `"nop"`/`"<invalid>"` for the operand-less forms.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Nop => "nop",
            Instruction::Invalid => "<invalid>",
            Instruction::Immediate { op, .. } => op.mnemonic(),
            Instruction::LoadUpper { .. } => "lui",
            Instruction::Register { op, .. } => op.mnemonic(),
            Instruction::ConditionalMove { cond, .. } => cond.mnemonic(),
            Instruction::Shift { op, .. } => op.mnemonic(),
            Instruction::ShiftVariable { op, .. } => op.variable_mnemonic(),
            Instruction::Jump { link: false, .. } => "j",
            Instruction::Jump { link: true, .. } => "jal",
            Instruction::JumpRegister { link: None, .. } => "jr",
            Instruction::JumpRegister { link: Some(_), .. } => "jalr",
            Instruction::Branch { cond, .. } => cond.mnemonic(),
            Instruction::Load { op, .. } => op.mnemonic(),
            Instruction::Store { op, .. } => op.mnemonic(),
        }
    }
}
