use std::path::{Path, PathBuf};

use eyre::Result;

/// Marker line placed at the top of every generated Go file.
///
/// Go tooling recognizes the `Code generated ... DO NOT EDIT.` form and
/// skips such files in linters.
pub const GENERATED_HEADER: &str = "// Code generated by pkgbind. DO NOT EDIT.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body
    fn render(&self) -> String;

    /// Render the full file content, including the header from the rules
    fn contents(&self) -> String {
        with_header(self.rules().header, self.render())
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.contents(), self.rules().overwrite)
    }
}

fn with_header(header: Option<&str>, body: String) -> String {
    match header {
        Some(header) => format!("{}\n\n{}", header, body),
        None => body,
    }
}

fn write_with_rules(path: &Path, content: &str, overwrite: Overwrite) -> Result<WriteResult> {
    match overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfChanged => {
            if path.exists() && std::fs::read_to_string(path)? == content {
                Ok(WriteResult::Unchanged)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules for this file
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        let content = with_header(self.rules.header, self.content.clone());
        write_with_rules(&self.path, &content, self.rules.overwrite)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated code: always rewrite, no header.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }

    /// Rules for generated code that should leave identical files untouched.
    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
            header: None,
        }
    }

    /// Rules for user-owned files that are only created once.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }

    /// Prepend a header line (followed by a blank line) to the content.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Overwrite only when the content differs
    IfChanged,
    /// Only create if file doesn't exist (starter config)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always_overwrite()
    }
}
