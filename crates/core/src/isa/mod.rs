//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the supported MIPS32 subset and everything needed to turn source text
//! into structured instructions.
//!
//! # Pipeline
//!
//! * `operand`: Raw operand text to registers, immediates, and `offset(base)` pairs.
//! * `opcode`: The closed set of supported mnemonics and their operand shapes.
//! * `decode`: One linked source line to one [`instruction::Instruction`].
//! * `disasm`: The reverse direction, for tracing and diagnostics.

/// Register name table and well-known register indices.
pub mod abi;

/// Text-to-instruction decoder.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Decoded instruction record and per-group operation enums.
pub mod instruction;

/// Supported mnemonics.
pub mod opcode;

/// Operand tokenizer and resolver.
pub mod operand;
