use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use pkgbind_core::{File, FileRules, WriteResult};
use pkgbind_manifest::starter_manifest;

#[derive(Args)]
pub struct InitCommand {
    /// Go source root written into the manifest
    #[arg(short, long, default_value = "/usr/local/go/src")]
    pub root: String,

    /// Where to write the manifest
    #[arg(short, long, default_value = "pkgbind.toml")]
    pub output: PathBuf,

    /// Overwrite an existing manifest
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let rules = if self.force {
            FileRules::always_overwrite()
        } else {
            FileRules::if_missing()
        };
        let result = File::new(&self.output, starter_manifest(&self.root))
            .with_rules(rules)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        match result {
            WriteResult::Skipped => {
                eprintln!(
                    "{} already exists (use --force to overwrite)",
                    self.output.display()
                );
                std::process::exit(1);
            }
            _ => {
                println!("Created {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Point root at your Go sources and list packages");
                println!("  2. pkgbind check");
                println!("  3. pkgbind generate");
            }
        }
        Ok(())
    }
}
