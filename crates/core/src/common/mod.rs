//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by the loader, linker, and CPU:
//! 1. **Constants:** Memory size, immediate masks, and linker sentinels.
//! 2. **Memory Access:** Classification of loads/stores by direction and width.
//! 3. **Error Handling:** Structured diagnostics and host-level error types.
//! 4. **Register Management:** The 32-entry integer register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Diagnostic and error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::{AccessType, AccessWidth};
pub use error::{Diagnostic, DiagnosticKind, Diagnostics, ErrorClass, SimError};
pub use reg::RegisterFile;
