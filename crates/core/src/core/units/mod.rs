//! Functional Units.
//!
//! Stateless helpers used by the CPU when executing an instruction:
//! 1. **ALU:** Arithmetic, logical, compare, and shift operations.
//! 2. **BRU:** Conditional branch evaluation.
//! 3. **LSU:** Load extension and store truncation by access width.

/// Arithmetic Logic Unit.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;

/// Load/Store Unit.
pub mod lsu;
