//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory the registration files go to.
    pub output_dir: PathBuf,
    /// Whether this was a dry-run preview.
    pub dry_run: bool,
    /// One entry per exported package, in manifest order.
    pub outcomes: Vec<PackageOutcome>,
}

/// What happened to a single package.
#[derive(Debug)]
pub struct PackageOutcome {
    /// Import path of the package.
    pub path: String,
    pub outcome: Outcome,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Registration file was created or replaced.
    Written(String),
    /// Registration file already had the same content.
    Unchanged(String),
    /// No bindable package in the directory.
    Skipped,
    /// Export failed; carries the error message.
    Failed(String),
    /// Dry-run content for the file.
    Preview { file: String, content: String },
}

impl GenerateReport {
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Failed(_)))
            .count()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }
    }
}

impl GenerateReport {
    fn render_preview(&self, out: &mut dyn Output) {
        for entry in &self.outcomes {
            match &entry.outcome {
                Outcome::Preview { file, content } => {
                    out.divider(file);
                    out.preformatted(content);
                }
                Outcome::Skipped => {
                    out.list_item(&format!("{} (no bindable package)", entry.path));
                }
                Outcome::Failed(msg) => out.warning(&format!("{}: {}", entry.path, msg)),
                Outcome::Written(_) | Outcome::Unchanged(_) => {}
            }
        }
    }

    fn render_written(&self, out: &mut dyn Output) {
        out.section(&format!("Packages ({})", self.outcomes.len()));
        for entry in &self.outcomes {
            match &entry.outcome {
                Outcome::Written(file) => out.added_item(&format!("{} -> {}", entry.path, file)),
                Outcome::Unchanged(file) => {
                    out.list_item(&format!("{} -> {} (unchanged)", entry.path, file))
                }
                Outcome::Skipped => {
                    out.list_item(&format!("{} (no bindable package)", entry.path))
                }
                Outcome::Failed(msg) => out.warning(&format!("{}: {}", entry.path, msg)),
                Outcome::Preview { .. } => {}
            }
        }
        out.newline();

        let written = self.count(|o| matches!(o, Outcome::Written(_)));
        let unchanged = self.count(|o| matches!(o, Outcome::Unchanged(_)));
        out.key_value(
            "Generated",
            &format!(
                "{} written, {} unchanged in {}",
                written,
                unchanged,
                self.output_dir.display()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn outcome(path: &str, outcome: Outcome) -> PackageOutcome {
        PackageOutcome {
            path: path.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_render_written_summary() {
        let report = GenerateReport {
            output_dir: PathBuf::from("packages"),
            dry_run: false,
            outcomes: vec![
                outcome("strings", Outcome::Written("strings.go".into())),
                outcome("fmt", Outcome::Unchanged("fmt.go".into())),
                outcome("cmd/tool", Outcome::Skipped),
                outcome("broken", Outcome::Failed("syntax error".into())),
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "Packages (4):",
                "  + strings -> strings.go",
                "  - fmt -> fmt.go (unchanged)",
                "  - cmd/tool (no bindable package)",
                "warning: broken: syntax error",
                "",
                "Generated: 1 written, 1 unchanged in packages",
            ]
        );
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            output_dir: PathBuf::from("packages"),
            dry_run: true,
            outcomes: vec![outcome(
                "strings",
                Outcome::Preview {
                    file: "strings.go".into(),
                    content: "package packages\n".into(),
                },
            )],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["── strings.go ──", "package packages\n"]);
    }
}
