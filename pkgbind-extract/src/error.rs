use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(pkgbind::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Go grammar: {message}")]
    #[diagnostic(code(pkgbind::grammar))]
    Grammar { message: String },

    #[error("syntax error in '{file}'")]
    #[diagnostic(code(pkgbind::parse_error))]
    Parse {
        file: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{file}' has no package clause")]
    #[diagnostic(
        code(pkgbind::missing_package),
        help("every Go file must start with `package <name>`")
    )]
    MissingPackageClause {
        file: String,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("'{}' declares more than one package: {}", .dir.display(), .candidates.join(", "))]
    #[diagnostic(
        code(pkgbind::ambiguous_package),
        help("keep one non-main, non-test package per directory")
    )]
    AmbiguousPackage {
        dir: PathBuf,
        candidates: Vec<String>,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
