//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Resolved source root.
    pub root: PathBuf,
    /// Number of explicitly listed packages.
    pub package_count: usize,
    /// Whether directory discovery is enabled.
    pub walk: bool,
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.key_value("root", &self.root.display().to_string());
        out.key_value("packages", &self.package_count.to_string());
        out.key_value("walk", if self.walk { "enabled" } else { "disabled" });
        out.newline();
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
    }
}
