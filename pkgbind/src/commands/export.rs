use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pkgbind_codegen::RegistryNames;
use pkgbind_codegen_go::{ExportOptions, export_declarations};
use pkgbind_core::to_pascal_case;
use pkgbind_extract::ExportPolicy;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ExportCommand {
    /// Package directory, relative to --root
    pub dir: String,

    /// Import path the package is registered under
    #[arg(short, long)]
    pub path: String,

    /// Suffix of the generated init function (defaults to PascalCase of --path)
    #[arg(short, long)]
    pub init: Option<String>,

    /// Directory DIR is resolved against
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Exported constant or variable name to leave out (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Registry of reflect.Value entries
    #[arg(long, default_value = "env.Packages")]
    pub values: String,

    /// Registry of reflect.Type entries
    #[arg(long, default_value = "env.PackageTypes")]
    pub types: String,
}

impl ExportCommand {
    pub fn run(&self) -> Result<()> {
        let init = self
            .init
            .clone()
            .unwrap_or_else(|| to_pascal_case(&self.path));
        let opts = ExportOptions::new(
            self.exclude.iter().collect::<ExportPolicy>(),
            RegistryNames::new(&self.values, &self.types),
        );

        let output =
            export_declarations(&self.root, &self.path, &self.dir, &init, &opts).unwrap_or_exit();
        if output.is_empty() {
            tracing::info!(dir = %self.dir, "nothing to export");
        } else {
            print!("{}", output);
        }
        Ok(())
    }
}
