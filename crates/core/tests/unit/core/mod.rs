//! Core execution tests.

/// ALU operation semantics.
pub mod alu;


/// Per-opcode execution results and run loops.
pub mod execution;


/// Property-based checks of machine invariants.
pub mod properties;
