use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pkgbind_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to pkgbind.toml (defaults to ./pkgbind.toml)
    #[arg(short, long, default_value = "pkgbind.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [generator] output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Report packages that fail to export and continue with the rest
    #[arg(long)]
    pub keep_going: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| file.manifest().generator.output_in(file.base_dir()));

        let report = ops::generate(
            &file,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                keep_going: self.keep_going,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        let failed = report.failed_count();
        if failed > 0 {
            eyre::bail!(
                "{} package{} failed to export",
                failed,
                if failed == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }
}
