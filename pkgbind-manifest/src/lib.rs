//! Parsing and validation of `pkgbind.toml`.
//!
//! The manifest names the Go source root, the packages to bind, where the
//! generated files go, and which exported names are never bound.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, Manifest, ManifestFile, PackageEntry, ParseContext, WalkConfig,
    parse_manifest, starter_manifest,
};
