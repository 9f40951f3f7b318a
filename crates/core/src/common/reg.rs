//! MIPS General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Register `$zero` is hardwired to zero.
//! 3. **Observability:** Snapshots and dumps of the complete register state.

use crate::common::constants::REGISTER_COUNT;
use crate::isa::abi;

/// General-purpose register file.
///
/// Register `$zero` ignores writes and always reads as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$zero` always returns 0.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 register values, ordered by index.
    pub fn snapshot(&self) -> [i32; REGISTER_COUNT] {
        let mut regs = self.regs;
        regs[abi::REG_ZERO] = 0;
        regs
    }

    /// Formats all registers in pairs with their ABI names, one pair per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in (0..REGISTER_COUNT).step_by(2) {
            out.push_str(&format!(
                "${:<4}={:#010x} ${:<4}={:#010x}\n",
                abi::name(i),
                self.read(i),
                abi::name(i + 1),
                self.read(i + 1)
            ));
        }
        out
    }
}
