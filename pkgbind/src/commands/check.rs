use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pkgbind_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to pkgbind.toml (defaults to ./pkgbind.toml)
    #[arg(short, long, default_value = "pkgbind.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let report = ops::check(&file);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
