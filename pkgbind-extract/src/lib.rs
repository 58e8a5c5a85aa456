//! Extraction of a Go package's exported surface.
//!
//! The pipeline for one directory is:
//!
//! - [`filter`] - which files in the directory are parsed at all
//! - [`parser`] - tree-sitter parsing into a [`SourceTree`] with doc comments
//! - [`select`] - picking the single real package out of the tree
//! - [`classify`] - sorting exported declarations into [`SymbolSet`]s
//!
//! [`extract_dir`] runs all of them.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod ast;
mod classify;
mod error;
pub mod filter;
pub mod parser;
mod select;
mod symbols;

use std::path::Path;

pub use ast::{
    CommentGroup, Declaration, FuncDecl, GenDecl, Ident, Package, SourceFile, SourceTree, Spec,
};
pub use classify::{DEPRECATION_MARKERS, ExportPolicy, classify, is_deprecated};
pub use error::{Error, Result};
pub use parser::{parse_dir, parse_source};
pub use select::{ENTRY_POINT_PACKAGE, TEST_PACKAGE_SUFFIX, select_package};
pub use symbols::{ModuleSurface, SymbolKind, SymbolSet};

/// Parse a directory, select its package and classify its declarations.
///
/// Returns `Ok(None)` when the directory has no bindable package or the
/// package exports nothing.
pub fn extract_dir(dir: &Path, policy: &ExportPolicy) -> Result<Option<ModuleSurface>> {
    let tree = parse_dir(dir)?;
    let Some(package) = select_package(&tree, dir)? else {
        tracing::debug!(dir = %dir.display(), "no bindable package");
        return Ok(None);
    };
    Ok(classify(package, policy))
}
