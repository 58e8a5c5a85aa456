//! Shared code generation utilities for pkgbind.
//!
//! This crate provides the language-agnostic pieces used by the Go
//! generator in `pkgbind-codegen-go`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`registration`] - The registration document built from a package's surface

pub mod builder;
pub mod registration;

pub use registration::{
    Accessor, Binding, DocRenderer, RegistrationDoc, Registry, RegistryKind, RegistryNames,
    Section,
};
