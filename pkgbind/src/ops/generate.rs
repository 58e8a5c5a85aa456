//! Generate operation - registration files for every package of a manifest.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use eyre::{Context, Result};
use pkgbind_codegen::RegistryNames;
use pkgbind_codegen_go::{ExportOptions, RegistrationFile, registration_doc};
use pkgbind_core::{GeneratedFile, WriteResult};
use pkgbind_manifest::{ManifestFile, PackageEntry};

use super::walk;
use crate::reports::{GenerateReport, Outcome, PackageOutcome};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the registration files are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether a failing package is reported instead of aborting the run.
    pub keep_going: bool,
}

/// Execute the generate operation.
///
/// Exports every listed package, plus every discovered one when walking is
/// enabled, and writes one registration file per package with symbols.
pub fn generate(file: &ManifestFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let manifest = file.manifest();
    let generator = &manifest.generator;
    let root = generator.root_in(file.base_dir());

    let packages = packages(file)?;
    let export = ExportOptions::new(
        generator.exclude.iter().collect(),
        RegistryNames::new(&generator.values, &generator.types),
    );

    let mut outcomes = Vec::new();
    let mut claimed = Claimed::default();
    for entry in &packages {
        let dir = root.join(entry.dir());
        let doc = match registration_doc(&dir, &entry.path, &entry.init_suffix(), &export) {
            Ok(doc) => doc,
            Err(e) if opts.keep_going => {
                tracing::warn!(path = %entry.path, error = %e, "skipping package");
                outcomes.push(PackageOutcome {
                    path: entry.path.clone(),
                    outcome: Outcome::Failed(e.to_string()),
                });
                continue;
            }
            Err(e) => {
                return Err(eyre::Report::new(*e)
                    .wrap_err(format!("Failed to export '{}'", entry.path)));
            }
        };

        let Some(doc) = doc else {
            outcomes.push(PackageOutcome {
                path: entry.path.clone(),
                outcome: Outcome::Skipped,
            });
            continue;
        };

        let registration = RegistrationFile::new(&generator.package, &entry.path, doc)
            .with_imports(&generator.imports);
        if let Some(clash) = claimed.claim(
            &entry.path,
            &registration.file_name(),
            &registration.doc().function,
        ) {
            if !opts.keep_going {
                eyre::bail!("Output collision: {}", clash);
            }
            tracing::warn!(path = %entry.path, %clash, "skipping package");
            outcomes.push(PackageOutcome {
                path: entry.path.clone(),
                outcome: Outcome::Failed(clash),
            });
            continue;
        }

        let outcome = if opts.dry_run {
            Outcome::Preview {
                file: registration.file_name(),
                content: registration.contents(),
            }
        } else {
            let result = registration
                .write(opts.output_dir)
                .wrap_err_with(|| format!("Failed to write {}", registration.file_name()))?;
            match result {
                WriteResult::Unchanged => Outcome::Unchanged(registration.file_name()),
                _ => Outcome::Written(registration.file_name()),
            }
        };
        outcomes.push(PackageOutcome {
            path: entry.path.clone(),
            outcome,
        });
    }

    Ok(GenerateReport {
        output_dir: opts.output_dir.to_path_buf(),
        dry_run: opts.dry_run,
        outcomes,
    })
}

/// Output file and function names already taken in this run, with the
/// package path that took them.
#[derive(Default)]
struct Claimed {
    files: HashMap<String, String>,
    functions: HashMap<String, String>,
}

impl Claimed {
    /// Record the names for `path`, or describe the earlier package they
    /// collide with.
    fn claim(&mut self, path: &str, file: &str, function: &str) -> Option<String> {
        if let Some(first) = self.files.get(file) {
            return Some(format!("'{}' and '{}' both generate {}", first, path, file));
        }
        if let Some(first) = self.functions.get(function) {
            return Some(format!(
                "'{}' and '{}' both generate func {}",
                first, path, function
            ));
        }
        self.files.insert(file.to_string(), path.to_string());
        self.functions.insert(function.to_string(), path.to_string());
        None
    }
}

/// Listed packages first, then discovered ones not already listed.
fn packages(file: &ManifestFile) -> Result<Vec<PackageEntry>> {
    let manifest = file.manifest();
    let mut packages = manifest.packages.clone();
    if !manifest.walk.enabled {
        return Ok(packages);
    }

    let root = manifest.generator.root_in(file.base_dir());
    let listed: HashSet<String> = packages.iter().map(|p| p.path.clone()).collect();
    let discovered = walk::discover(&root, &manifest.walk.skip)?;
    packages.extend(
        discovered
            .into_iter()
            .filter(|entry| !listed.contains(&entry.path)),
    );
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn project(manifest: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pkgbind.toml", manifest);
        write(
            dir.path(),
            "src/example.com/widgets/widgets.go",
            "package widgets\n\nconst Foo = 1\n\nfunc DoThing() {}\n\ntype Widget struct{}\n",
        );
        write(
            dir.path(),
            "src/cmd/tool/main.go",
            "package main\n\nfunc Run() {}\n",
        );
        write(
            dir.path(),
            "src/broken/broken.go",
            "package broken\n\nfunc Oops( {\n",
        );
        dir
    }

    const LISTED: &str = r#"
[generator]
root = "src"
imports = ["github.com/mattn/anko/env"]

[[packages]]
path = "example.com/widgets"
init = "Widgets"

[[packages]]
path = "cmd/tool"
"#;

    #[test]
    fn test_generate_listed_packages() {
        let dir = project(LISTED);
        let file = ManifestFile::open(dir.path().join("pkgbind.toml")).unwrap();
        let out = dir.path().join("packages");

        let report = generate(
            &file,
            GenerateOptions {
                output_dir: &out,
                dry_run: false,
                keep_going: false,
            },
        )
        .unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(
            report.outcomes[0].outcome,
            Outcome::Written("example_com_widgets.go".to_string())
        );
        assert_eq!(report.outcomes[1].outcome, Outcome::Skipped);

        let written = fs::read_to_string(out.join("example_com_widgets.go")).unwrap();
        assert!(written.starts_with("// Code generated by pkgbind. DO NOT EDIT.\n\npackage packages\n"));
        assert!(written.contains("\t\"github.com/mattn/anko/env\"\n"));
        assert!(written.contains("func initWidgets() {"));
        assert!(written.contains("\"Widget\": reflect.TypeOf((*widgets.Widget)(nil)).Elem(),"));
        assert!(!out.join("cmd_tool.go").exists());

        // A second run leaves the file alone.
        let again = generate(
            &file,
            GenerateOptions {
                output_dir: &out,
                dry_run: false,
                keep_going: false,
            },
        )
        .unwrap();
        assert_eq!(
            again.outcomes[0].outcome,
            Outcome::Unchanged("example_com_widgets.go".to_string())
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = project(LISTED);
        let file = ManifestFile::open(dir.path().join("pkgbind.toml")).unwrap();
        let out = dir.path().join("packages");

        let report = generate(
            &file,
            GenerateOptions {
                output_dir: &out,
                dry_run: true,
                keep_going: false,
            },
        )
        .unwrap();

        match &report.outcomes[0].outcome {
            Outcome::Preview { file, content } => {
                assert_eq!(file, "example_com_widgets.go");
                assert!(content.contains("\"Foo\": reflect.ValueOf(widgets.Foo),"));
            }
            other => panic!("expected preview, got {:?}", other),
        }
        assert!(!out.exists());
    }

    #[test]
    fn test_walk_and_keep_going() {
        let dir = project(
            r#"
[generator]
root = "src"

[walk]
enabled = true
"#,
        );
        let file = ManifestFile::open(dir.path().join("pkgbind.toml")).unwrap();
        let out = dir.path().join("packages");
        let opts = |keep_going| GenerateOptions {
            output_dir: &out,
            dry_run: true,
            keep_going,
        };

        assert!(generate(&file, opts(false)).is_err());

        let report = generate(&file, opts(true)).unwrap();
        let paths: Vec<_> = report.outcomes.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(paths, vec!["broken", "cmd/tool", "example.com/widgets"]);
        assert!(matches!(report.outcomes[0].outcome, Outcome::Failed(_)));
        assert_eq!(report.outcomes[1].outcome, Outcome::Skipped);
        assert_eq!(report.failed_count(), 1);
    }

    const COLLIDING: &str = r#"
[generator]
root = "src"

[[packages]]
path = "x/a_b"

[[packages]]
path = "x/a/b"
"#;

    fn colliding_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pkgbind.toml", COLLIDING);
        write(dir.path(), "src/x/a_b/one.go", "package a_b\n\nfunc One() {}\n");
        write(dir.path(), "src/x/a/b/two.go", "package b\n\nfunc Two() {}\n");
        dir
    }

    #[test]
    fn test_colliding_file_names_fail() {
        let dir = colliding_project();
        let file = ManifestFile::open(dir.path().join("pkgbind.toml")).unwrap();
        let out = dir.path().join("packages");

        let err = generate(
            &file,
            GenerateOptions {
                output_dir: &out,
                dry_run: false,
                keep_going: false,
            },
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'x/a_b'"));
        assert!(message.contains("'x/a/b'"));
        assert!(message.contains("x_a_b.go"));

        let written = fs::read_to_string(out.join("x_a_b.go")).unwrap();
        assert!(written.contains("\"One\": reflect.ValueOf(a_b.One),"));
        assert!(!written.contains("Two"));
    }

    #[test]
    fn test_colliding_file_names_keep_going() {
        let dir = colliding_project();
        let file = ManifestFile::open(dir.path().join("pkgbind.toml")).unwrap();
        let out = dir.path().join("packages");

        let report = generate(
            &file,
            GenerateOptions {
                output_dir: &out,
                dry_run: false,
                keep_going: true,
            },
        )
        .unwrap();
        assert_eq!(
            report.outcomes[0].outcome,
            Outcome::Written("x_a_b.go".to_string())
        );
        assert!(matches!(
            &report.outcomes[1].outcome,
            Outcome::Failed(msg) if msg.contains("'x/a_b' and 'x/a/b'")
        ));
        assert_eq!(report.failed_count(), 1);

        let written = fs::read_to_string(out.join("x_a_b.go")).unwrap();
        assert!(!written.contains("Two"));
    }

    #[test]
    fn test_claimed_function_names() {
        let mut claimed = Claimed::default();
        assert!(claimed.claim("x/ab", "x_ab.go", "initXAb").is_none());
        let clash = claimed.claim("x/a/b", "x_a_b.go", "initXAb").unwrap();
        assert_eq!(clash, "'x/ab' and 'x/a/b' both generate func initXAb");
    }

    #[test]
    fn test_listed_packages_take_precedence_over_walk() {
        let dir = project(
            r#"
[generator]
root = "src"

[walk]
enabled = true
skip = ["broken", "cmd"]

[[packages]]
path = "example.com/widgets"
init = "W"
"#,
        );
        let file = ManifestFile::open(dir.path().join("pkgbind.toml")).unwrap();
        let entries = packages(&file).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].init_suffix(), "W");
    }
}
