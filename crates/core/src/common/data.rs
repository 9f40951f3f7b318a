//! Memory Access Types.
//!
//! This module classifies data memory accesses. The classification is used for:
//! 1. **Range Validation:** Computing how many bytes an access touches.
//! 2. **Fault Reporting:** Describing the access in out-of-range diagnostics.
//! 3. **Statistics Tracking:** Counting loads and stores separately.

use std::fmt;

use serde::Serialize;

/// Direction of a data memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// Data read by a load instruction.
    Read,
    /// Data written by a store instruction.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Read => write!(f, "read"),
            AccessType::Write => write!(f, "write"),
        }
    }
}

/// Number of bytes moved by a data memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessWidth {
    /// A single byte (`lb`, `lbu`, `sb`).
    Byte,
    /// Four consecutive bytes, little-endian (`lw`, `sw`).
    Word,
}

impl AccessWidth {
    /// Returns the access size in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            AccessWidth::Byte => 1,
            AccessWidth::Word => 4,
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessWidth::Byte => write!(f, "byte"),
            AccessWidth::Word => write!(f, "word"),
        }
    }
}
