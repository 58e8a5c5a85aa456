//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "pkgbind.toml")
    }
}

impl Manifest {
    /// Parse a pkgbind.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let generator = ctx.push("generator");
    generator.validate_root(&manifest.generator.root)?;
    generator.validate_package_name(&manifest.generator.package)?;
    generator.validate_registry(&manifest.generator.values, "values")?;
    generator.validate_registry(&manifest.generator.types, "types")?;
    for import in &manifest.generator.imports {
        generator.validate_import_path(import)?;
    }
    for name in &manifest.generator.exclude {
        generator.validate_identifier(name, "excluded name")?;
    }

    let packages = ctx.push("packages");
    let mut seen: HashSet<&str> = HashSet::new();
    let mut inits: HashSet<&str> = HashSet::new();
    for entry in &manifest.packages {
        packages.validate_import_path(&entry.path)?;
        if let Some(init) = &entry.init {
            packages.validate_init_suffix(init)?;
            if !inits.insert(init.as_str()) {
                return Err(packages.duplicate_init(init));
            }
        }
        if !seen.insert(entry.path.as_str()) {
            return Err(packages.duplicate_package(&entry.path));
        }
    }

    Ok(())
}
