//! Flat Data Memory.
//!
//! Data memory is a contiguous array of `2^24` bytes, zero at start. Program
//! instructions do not live here; they are fetched from the linked program by
//! word index. Words are stored little-endian.

use std::fmt;

use crate::common::constants::MEMORY_SIZE;
use crate::common::data::AccessWidth;

/// Byte-addressable data memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of [`MEMORY_SIZE`] bytes.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE],
        }
    }

    /// Returns the size of the memory in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Validates an effective address for an access of `width`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Effective address, computed without wrapping.
    /// * `width` - Number of bytes the access touches.
    ///
    /// # Returns
    ///
    /// The address as an index if every touched byte lies inside memory,
    /// `None` otherwise.
    pub fn check(&self, addr: i64, width: AccessWidth) -> Option<usize> {
        let start = usize::try_from(addr).ok()?;
        let end = start.checked_add(width.bytes())?;
        (end <= self.bytes.len()).then_some(start)
    }

    /// Reads one byte. The address must have passed [`Memory::check`].
    pub fn read_byte(&self, addr: usize) -> u8 {
        self.bytes[addr]
    }

    /// Writes one byte. The address must have passed [`Memory::check`].
    pub fn write_byte(&mut self, addr: usize, val: u8) {
        self.bytes[addr] = val;
    }

    /// Reads four bytes as a little-endian word.
    pub fn read_word(&self, addr: usize) -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.bytes[addr..addr + 4]);
        u32::from_le_bytes(buf)
    }

    /// Writes a word as four little-endian bytes.
    pub fn write_word(&mut self, addr: usize, val: u32) {
        self.bytes[addr..addr + 4].copy_from_slice(&val.to_le_bytes());
    }

    /// Reads `width` bytes into the low bits of a `u32`.
    pub fn read(&self, addr: usize, width: AccessWidth) -> u32 {
        match width {
            AccessWidth::Byte => u32::from(self.read_byte(addr)),
            AccessWidth::Word => self.read_word(addr),
        }
    }

    /// Writes the low `width` bytes of `val`.
    pub fn write(&mut self, addr: usize, width: AccessWidth, val: u32) {
        match width {
            AccessWidth::Byte => self.write_byte(addr, val as u8),
            AccessWidth::Word => self.write_word(addr, val),
        }
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .field("nonzero_bytes", &used)
            .finish()
    }
}
