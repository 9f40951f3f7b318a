//! MIPS32 instructional simulator library.
//!
//! This crate loads a small MIPS assembly program, resolves its labels, and executes it
//! against a synthetic register file and byte-addressable memory:
//! 1. **Loader:** Strips comments, extracts label definitions, compacts the program.
//! 2. **Linker:** Rewrites jump/branch label references into word indices or offsets.
//! 3. **ISA:** Operand tokenizing and a one-time decode into structured instructions.
//! 4. **Core:** Fetch/decode/execute with the branch-delay-slot protocol.
//! 5. **Diagnostics:** A non-fatal, line-annotated fault stream that never halts a run.

/// Common types and constants (registers, access kinds, diagnostics).
pub mod common;
/// Simulator configuration (tracing, step limit, delay slots).
pub mod config;
/// CPU core (execution loop, memory access, control transfer, functional units).
pub mod core;
/// Instruction set (ABI names, opcodes, operand tokenizer, decode, disassembly).
pub mod isa;
/// Program loading, label linking, and the top-level simulator.
pub mod sim;
/// Flat byte-addressable memory.
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// CPU execution context; holds registers, memory, pc, and diagnostics.
pub use crate::core::{Cpu, MachineSnapshot, RunOutcome};
/// Top-level simulator owning a linked program and its CPU.
pub use crate::sim::Simulator;
