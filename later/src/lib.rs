//! Compiler driver built on the `cscopt` switch parser.

pub mod compilation;
pub mod diagnostics;
pub mod error;
pub mod profile;
