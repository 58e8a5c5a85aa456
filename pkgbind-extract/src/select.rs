use std::path::Path;

use crate::{Error, Package, Result, SourceTree};

/// Package name of executables, which have nothing to bind.
pub const ENTRY_POINT_PACKAGE: &str = "main";

/// Suffix of external test packages.
pub const TEST_PACKAGE_SUFFIX: &str = "_test";

/// Choose the one package in `tree` that can be bound.
///
/// `main` and `*_test` packages are never candidates. No candidate yields
/// `Ok(None)`; more than one is an [`Error::AmbiguousPackage`] for `dir`.
pub fn select_package<'a>(tree: &'a SourceTree, dir: &Path) -> Result<Option<&'a Package>> {
    let candidates: Vec<&Package> = tree
        .packages()
        .filter(|package| is_candidate(&package.name))
        .collect();

    match candidates.as_slice() {
        [] => Ok(None),
        [package] => Ok(Some(*package)),
        _ => Err(Box::new(Error::AmbiguousPackage {
            dir: dir.to_path_buf(),
            candidates: candidates.iter().map(|p| p.name.clone()).collect(),
        })),
    }
}

fn is_candidate(name: &str) -> bool {
    name != ENTRY_POINT_PACKAGE && !name.ends_with(TEST_PACKAGE_SUFFIX)
}
