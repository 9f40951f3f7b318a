//! Data memory tests.
