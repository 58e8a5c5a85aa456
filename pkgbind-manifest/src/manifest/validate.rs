//! Validation context and utilities for manifest parsing.

use std::{path::Path, sync::Arc};

use miette::SourceSpan;
use pkgbind_core::is_go_identifier;

use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the manifest source and the table path currently being validated
/// (e.g. `generator` or `packages`) so errors can name where they occurred.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["generator"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages, e.g. "package name in 'generator'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// The source root must be present.
    pub fn validate_root(&self, root: &Path) -> Result<()> {
        if root.as_os_str().is_empty() {
            return Err(self.source.validation_error(
                format!("{} must not be empty", self.context_for("root")),
                find_value_spans(self.source.src(), "root", "").first().copied(),
            ));
        }
        Ok(())
    }

    /// The generated files' package clause must be a non-keyword Go identifier.
    pub fn validate_package_name(&self, name: &str) -> Result<()> {
        let span = find_value_spans(self.source.src(), "package", name)
            .first()
            .copied();

        if is_go_keyword(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("package name"),
                format!("'{}' is a Go keyword", name),
                span,
            ));
        }

        if !is_go_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("package name"),
                "use only letters, digits and underscores, starting with a letter",
                span,
            ));
        }

        Ok(())
    }

    /// A registry must be a selector expression such as `env.Packages`.
    pub fn validate_registry(&self, expr: &str, key: &str) -> Result<()> {
        if !expr.split('.').all(is_go_identifier) {
            return Err(self.source.invalid_identifier_error(
                expr,
                self.context_for(&format!("{} registry", key)),
                "expected a Go identifier or selector such as 'env.Packages'",
                find_value_spans(self.source.src(), key, expr).first().copied(),
            ));
        }
        Ok(())
    }

    /// Import paths must be non-empty, slash-separated and free of whitespace.
    pub fn validate_import_path(&self, path: &str) -> Result<()> {
        let reason = if path.is_empty() {
            Some("must not be empty")
        } else if path.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else if path.starts_with('/') || path.ends_with('/') {
            Some("must not start or end with '/'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(self.source.validation_error(
                format!("{} '{}' {}", self.context_for("import path"), path, reason),
                find_quoted_span(self.source.src(), path),
            )),
            None => Ok(()),
        }
    }

    /// Validate a plain Go identifier such as an excluded symbol name.
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        if is_go_identifier(name) {
            return Ok(());
        }
        Err(self.source.invalid_identifier_error(
            name,
            self.context_for(kind),
            "use only letters, digits and underscores, starting with a letter",
            find_quoted_span(self.source.src(), name),
        ))
    }

    /// The init suffix is appended to `init`, so it may be empty or start with a digit.
    pub fn validate_init_suffix(&self, init: &str) -> Result<()> {
        if init.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Ok(());
        }
        Err(self.source.invalid_identifier_error(
            init,
            self.context_for("init suffix"),
            "use only letters, digits and underscores",
            find_value_spans(self.source.src(), "init", init).first().copied(),
        ))
    }

    /// Build an error for a package path that appears in two entries.
    pub fn duplicate_package(&self, path: &str) -> Box<Error> {
        let spans = find_value_spans(self.source.src(), "path", path);
        let first = spans.first().copied().unwrap_or_else(|| (0, 0).into());
        let second = spans.get(1).copied().unwrap_or(first);
        self.source.duplicate_package_error(path, first, second)
    }

    /// Build an error for an init suffix given to two entries.
    pub fn duplicate_init(&self, init: &str) -> Box<Error> {
        let spans = find_value_spans(self.source.src(), "init", init);
        let first = spans.first().copied().unwrap_or_else(|| (0, 0).into());
        let second = spans.get(1).copied().unwrap_or(first);
        self.source.duplicate_init_error(init, first, second)
    }
}

/// Go reserved keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

/// Check if a name is a Go reserved keyword
pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Find every span of `value` written as `key = "value"` (or single-quoted) in the source.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{} = {}{}{}", key, quote, value, quote);
        // Skip `key = ` and the opening quote
        let skip = key.len() + 4;
        spans.extend(
            src.match_indices(&pattern)
                .map(|(pos, _)| SourceSpan::from((pos + skip, value.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Find the first double-quoted occurrence of `value`, e.g. inside an array.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", value);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
