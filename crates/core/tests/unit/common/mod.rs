//! Common component tests.


/// Diagnostic formatting, classification, and ordering.
pub mod diagnostics;
