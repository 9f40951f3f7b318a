//! CPU Core.
//!
//! This module contains the execution engine. It provides:
//! 1. **CPU Context:** The `Cpu` structure holding registers, memory, pc, and the
//!    delay-slot flag.
//! 2. **Execution:** Fetch/decode/execute stepping and the run loops.
//! 3. **Functional Units:** ALU, branch condition unit, and load/store unit.

/// CPU state and instruction execution.
pub mod cpu;

/// Functional units used by the execute step.
pub mod units;

pub use cpu::{Cpu, MachineSnapshot, RunOutcome};
