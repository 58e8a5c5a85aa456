//! Check operation - manifest sanity beyond parsing.

use pkgbind_manifest::ManifestFile;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already validated the manifest; this looks at the filesystem it
/// points to and reports missing directories as warnings.
pub fn check(file: &ManifestFile) -> CheckReport {
    let manifest = file.manifest();
    let root = manifest.generator.root_in(file.base_dir());

    let mut warnings = Vec::new();
    if !root.is_dir() {
        warnings.push(format!("source root {} does not exist", root.display()));
    } else {
        for entry in &manifest.packages {
            let dir = root.join(entry.dir());
            if !dir.is_dir() {
                warnings.push(format!(
                    "package '{}': directory {} does not exist",
                    entry.path,
                    dir.display()
                ));
            }
        }
    }

    CheckReport {
        config_path: file.path().to_path_buf(),
        root,
        package_count: manifest.packages.len(),
        walk: manifest.walk.enabled,
        warnings,
    }
}
