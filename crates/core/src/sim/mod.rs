//! Program Assembly and the Simulator Facade.
//!
//! This module turns program text into something the CPU can run and wires the pieces
//! together:
//! 1. **Loader:** Comment stripping, label extraction, and compaction.
//! 2. **Linker:** Label references in jumps and branches become indices and offsets.
//! 3. **Program:** The immutable, decoded instruction list with source line numbers.
//! 4. **Simulator:** Owns the program and the CPU and exposes the run entry points.

/// Source loading and label extraction.
pub mod loader;

/// Label reference rewriting.
pub mod linker;

/// Linked and decoded program container.
pub mod program;

/// Top-level simulator.
pub mod simulator;

pub use program::{Program, ProgramEntry};
pub use simulator::Simulator;
