//! Load/Store Unit (LSU).
//!
//! Converts between register values and memory bytes for each access width:
//! 1. **Loads:** `lw` assembles four little-endian bytes, `lb` sign-extends a byte,
//!    `lbu` zero-extends it.
//! 2. **Stores:** `sw` splits a word into four little-endian bytes, `sb` keeps the
//!    low byte.

use crate::common::data::AccessWidth;
use crate::isa::instruction::{LoadOp, StoreOp};

/// Returns the access width of a load.
pub const fn load_width(op: LoadOp) -> AccessWidth {
    match op {
        LoadOp::Lw => AccessWidth::Word,
        LoadOp::Lb | LoadOp::Lbu => AccessWidth::Byte,
    }
}

/// Returns the access width of a store.
pub const fn store_width(op: StoreOp) -> AccessWidth {
    match op {
        StoreOp::Sw => AccessWidth::Word,
        StoreOp::Sb => AccessWidth::Byte,
    }
}

/// Widens the raw value read from memory into a register value.
///
/// `raw` holds the loaded bytes in its low bits (little-endian for words).
pub const fn extend_load(op: LoadOp, raw: u32) -> i32 {
    match op {
        LoadOp::Lw => raw as i32,
        LoadOp::Lb => raw as u8 as i8 as i32,
        LoadOp::Lbu => raw as u8 as i32,
    }
}

/// Truncates a register value to the bits a store writes.
pub const fn truncate_store(op: StoreOp, value: i32) -> u32 {
    match op {
        StoreOp::Sw => value as u32,
        StoreOp::Sb => value as u32 & 0xff,
    }
}
