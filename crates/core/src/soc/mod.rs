//! System Memory.
//!
//! The simulated machine has a single flat data memory and no devices. This module
//! provides:
//! 1. **Storage:** A zero-initialized byte array covering the 24-bit address space.
//! 2. **Range Checks:** Validation of effective addresses before any access.

/// Flat byte-addressable data memory.
pub mod memory;

pub use memory::Memory;
