//! Program assembly and simulator facade tests.
