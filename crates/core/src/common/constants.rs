//! Global Simulator Constants.
//!
//! This module defines the constants shared across the simulator. It includes:
//! 1. **Machine Constants:** Register count, memory size, and instruction width.
//! 2. **Encoding Constants:** Immediate, shift-amount, and jump-region masks.
//! 3. **Linker Constants:** Sentinels substituted for undefined labels.
//! 4. **Syntax Constants:** Comment, label, and register sigils.

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 32;

/// Number of address bits in the flat memory space.
pub const ADDRESS_BITS: u32 = 24;

/// Size of simulated memory in bytes (2^24 = 16 MiB).
pub const MEMORY_SIZE: usize = 1 << ADDRESS_BITS;

/// Size of one instruction (and one word) in bytes.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Mask for a 16-bit immediate field.
pub const IMMEDIATE_MASK: i64 = 0xffff;

/// Smallest value accepted for a 16-bit immediate written as a signed literal.
pub const IMMEDIATE_SIGNED_MIN: i64 = -0x8000;

/// Width of an immediate field in bits.
pub const IMMEDIATE_BITS: u32 = 16;

/// Mask for a shift amount (5 bits: 0-31).
pub const SHAMT_MASK: u32 = 0x1f;

/// Width of a shift amount field in bits.
pub const SHAMT_BITS: u32 = 5;

/// Mask for the 26-bit word index of a `j`/`jal` target.
pub const JUMP_INDEX_MASK: i64 = 0x3ff_ffff;

/// Width of a jump target field in bits.
pub const JUMP_INDEX_BITS: u32 = 26;

/// High bits of the pc kept when forming a `j`/`jal` target address.
pub const JUMP_REGION_MASK: u32 = 0xf000_0000;

/// Word index substituted for an undefined `j`/`jal` label.
///
/// Points far past any realistic program so execution runs off the end.
pub const UNDEFINED_JUMP_TARGET: i64 = 0x3ff_ffff;

/// Offset substituted for an undefined conditional-branch label.
///
/// A large forward branch that leaves the program.
pub const UNDEFINED_BRANCH_OFFSET: i64 = 0x7fff;

/// Starts a comment that runs to the end of the line.
pub const COMMENT_CHAR: char = '#';

/// Terminates a label definition.
pub const LABEL_SUFFIX: char = ':';

/// Prefix of every register operand.
pub const REGISTER_SIGIL: char = '$';

/// The only instruction accepted without operands.
pub const NOP_MNEMONIC: &str = "nop";
