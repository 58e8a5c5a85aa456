use std::path::Path;

use pkgbind_codegen::{DocRenderer, RegistrationDoc, RegistryNames};
use pkgbind_extract::{ExportPolicy, Result, extract_dir};

use crate::GoRenderer;

/// Settings shared by every package of a generation run.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub policy: ExportPolicy,
    pub registries: RegistryNames,
}

impl ExportOptions {
    pub fn new(policy: ExportPolicy, registries: RegistryNames) -> Self {
        Self { policy, registries }
    }
}

/// Extract `dir` and build its registration document.
///
/// `key` is the registry key (the import path). `Ok(None)` means there is
/// nothing to register.
pub fn registration_doc(
    dir: &Path,
    key: &str,
    init: &str,
    opts: &ExportOptions,
) -> Result<Option<RegistrationDoc>> {
    let Some(surface) = extract_dir(dir, &opts.policy)? else {
        return Ok(None);
    };
    tracing::info!(
        path = key,
        package = %surface.package,
        symbols = surface.len(),
        "exporting package"
    );
    Ok(Some(RegistrationDoc::build(
        init,
        key,
        &surface,
        &opts.registries,
    )))
}

/// Generate the registration function for the package at `root/dir`.
///
/// The function is named `init<init>` and registers the package under
/// `path`. An empty string means the directory has nothing to register.
pub fn export_declarations(
    root: &Path,
    path: &str,
    dir: &str,
    init: &str,
    opts: &ExportOptions,
) -> Result<String> {
    let dir = root.join(dir);
    Ok(registration_doc(&dir, path, init, opts)?
        .map(|doc| GoRenderer.render(&doc))
        .unwrap_or_default())
}
