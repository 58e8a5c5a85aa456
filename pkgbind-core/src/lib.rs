//! Core utilities and types for the pkgbind generator.
//!
//! This crate provides the file-writing primitives and naming helpers
//! shared by the other pkgbind crates.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{is_go_identifier, to_file_stem, to_pascal_case};
