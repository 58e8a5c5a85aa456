use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use pkgbind_extract::{ExportPolicy, extract_dir};

use super::UnwrapOrExit;
use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    /// Package directory to inspect
    pub dir: PathBuf,

    /// Exported constant or variable name to leave out (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Print the symbols as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let policy: ExportPolicy = self.exclude.iter().collect();
        let surface = extract_dir(&self.dir, &policy).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&surface)
                .wrap_err("Failed to serialize the package surface")?;
            println!("{}", json);
            return Ok(());
        }

        let report = ListReport {
            dir: self.dir.clone(),
            surface,
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
