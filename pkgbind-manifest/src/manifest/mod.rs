//! Manifest types and parsing for pkgbind.toml files.

mod file;
mod parse;
mod template;
mod validate;

use std::path::{Path, PathBuf};

pub use file::ManifestFile;
pub use parse::parse_manifest;
use pkgbind_core::to_pascal_case;
use serde::Deserialize;
pub use template::starter_manifest;
pub use validate::ParseContext;

/// Root manifest for pkgbind.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generator settings shared by every package
    pub generator: GeneratorConfig,

    /// Package discovery under the source root
    #[serde(default)]
    pub walk: WalkConfig,

    /// Explicitly listed packages
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
}

impl Manifest {
    /// Look up an explicitly listed package by its path.
    pub fn package(&self, path: &str) -> Option<&PackageEntry> {
        self.packages.iter().find(|p| p.path == path)
    }
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Directory that package `dir`s are resolved against
    pub root: PathBuf,

    /// Directory the generated files are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Go package clause of the generated files
    #[serde(default = "default_package")]
    pub package: String,

    /// Expression of the name → reflect.Value registry
    #[serde(default = "default_values")]
    pub values: String,

    /// Expression of the name → reflect.Type registry
    #[serde(default = "default_types")]
    pub types: String,

    /// Extra import paths for the generated files (e.g. the registry's package)
    #[serde(default)]
    pub imports: Vec<String>,

    /// Exported constant and variable names that are never bound
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl GeneratorConfig {
    /// Resolve `root` against the directory containing the manifest.
    pub fn root_in(&self, base: &Path) -> PathBuf {
        base.join(&self.root)
    }

    /// Resolve `output` against the directory containing the manifest.
    pub fn output_in(&self, base: &Path) -> PathBuf {
        base.join(&self.output)
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("packages")
}

fn default_package() -> String {
    "packages".to_string()
}

fn default_values() -> String {
    "env.Packages".to_string()
}

fn default_types() -> String {
    "env.PackageTypes".to_string()
}

/// The `[walk]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct WalkConfig {
    /// Discover every package directory under the root
    #[serde(default)]
    pub enabled: bool,

    /// Directory names that are never descended into
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            skip: default_skip(),
        }
    }
}

fn default_skip() -> Vec<String> {
    ["internal", "testdata", "vendor"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// One `[[packages]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageEntry {
    /// Import path; also the registry key
    pub path: String,

    /// Directory relative to the root (defaults to `path`)
    pub dir: Option<String>,

    /// Suffix of the generated `init` function (defaults to PascalCase of `path`)
    pub init: Option<String>,
}

impl PackageEntry {
    /// Create an entry whose directory and init suffix are derived from the path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            dir: None,
            init: None,
        }
    }

    /// Directory of the package relative to the root.
    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(&self.path)
    }

    /// Suffix appended to `init` in the generated function name.
    pub fn init_suffix(&self) -> String {
        match &self.init {
            Some(init) => init.clone(),
            None => to_pascal_case(&self.path),
        }
    }
}
