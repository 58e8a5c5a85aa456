//! Core operations.
//!
//! This module contains the business logic for pkgbind commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod walk;

pub use check::check;
pub use generate::{GenerateOptions, generate};
