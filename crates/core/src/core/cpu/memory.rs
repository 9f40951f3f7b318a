//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and data memory. It performs the
//! following:
//! 1. **Address Generation:** Effective address = base register + signed offset, computed
//!    in 64 bits so it never wraps into range.
//! 2. **Validation:** Every touched byte must lie in `[0, 2^24)`.
//! 3. **Fallback:** An out-of-range load writes 0 to its destination; an out-of-range store
//!    is discarded. Both record an invalid-memory diagnostic.

use super::Cpu;
use crate::common::{AccessType, AccessWidth, DiagnosticKind};
use crate::core::units::lsu;
use crate::isa::instruction::{LoadOp, StoreOp};

impl Cpu {
    /// Computes the effective address of a load or store.
    fn effective_address(&self, base: usize, offset: i32) -> i64 {
        i64::from(self.regs.read(base)) + i64::from(offset)
    }

    /// Executes a load into `rt`.
    ///
    /// # Arguments
    ///
    /// * `op` - Load width and extension.
    /// * `rt` - Destination register.
    /// * `base` - Base address register.
    /// * `offset` - Signed byte offset.
    /// * `line` - Source line, for diagnostics.
    pub fn load(&mut self, op: LoadOp, rt: usize, base: usize, offset: i32, line: usize) {
        let width = lsu::load_width(op);
        let addr = self.effective_address(base, offset);
        let value = match self.memory.check(addr, width) {
            Some(idx) => lsu::extend_load(op, self.memory.read(idx, width)),
            None => {
                self.memory_fault(addr, AccessType::Read, line);
                0
            }
        };
        self.regs.write(rt, value);
        self.stats.inst_load += 1;
    }

    /// Executes a store of `rt`.
    ///
    /// # Arguments
    ///
    /// * `op` - Store width.
    /// * `rt` - Register holding the value.
    /// * `base` - Base address register.
    /// * `offset` - Signed byte offset.
    /// * `line` - Source line, for diagnostics.
    pub fn store(&mut self, op: StoreOp, rt: usize, base: usize, offset: i32, line: usize) {
        let width = lsu::store_width(op);
        let addr = self.effective_address(base, offset);
        match self.memory.check(addr, width) {
            Some(idx) => {
                let value = lsu::truncate_store(op, self.regs.read(rt));
                self.memory.write(idx, width, value);
            }
            None => self.memory_fault(addr, AccessType::Write, line),
        }
        self.stats.inst_store += 1;
    }

    /// Reads a word for inspection, without recording diagnostics.
    ///
    /// Returns `None` if any of the four bytes lies outside memory.
    pub fn read_word(&self, addr: i64) -> Option<i32> {
        self.memory
            .check(addr, AccessWidth::Word)
            .map(|idx| self.memory.read_word(idx) as i32)
    }

    /// Reads a byte for inspection, without recording diagnostics.
    pub fn read_byte(&self, addr: i64) -> Option<u8> {
        self.memory
            .check(addr, AccessWidth::Byte)
            .map(|idx| self.memory.read_byte(idx))
    }

    fn memory_fault(&mut self, address: i64, access: AccessType, line: usize) {
        self.stats.memory_faults += 1;
        self.diagnostics
            .push(line, DiagnosticKind::InvalidMemoryLocation { address, access });
    }
}
