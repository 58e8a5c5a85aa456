//! Top-level declaration tree of a parsed package directory.

use std::path::PathBuf;

use indexmap::IndexMap;

/// A declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name starts with a Unicode upper-case letter (the `Uppercase`
    /// property, not Go's `Lu` category).
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

/// A run of adjacent comments, kept verbatim including markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    comments: Vec<String>,
}

impl CommentGroup {
    pub fn new(comments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }

    /// Raw comments, markers included.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Comment text with markers removed.
    ///
    /// Strips `//`, `/*` and `*/`, the first space of a line comment,
    /// tool directives such as `//go:generate`, trailing whitespace,
    /// and leading, trailing and repeated blank lines. Non-empty text ends
    /// with a newline.
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        for comment in &self.comments {
            let body = if let Some(rest) = comment.strip_prefix("//") {
                if let Some(rest) = rest.strip_prefix(' ') {
                    rest
                } else if is_directive(rest) {
                    continue;
                } else {
                    rest
                }
            } else if let Some(rest) = comment.strip_prefix("/*") {
                rest.strip_suffix("*/").unwrap_or(rest)
            } else {
                comment.as_str()
            };
            lines.extend(body.split('\n').map(str::trim_end));
        }

        let mut text = String::new();
        let mut blank_pending = false;
        for line in lines {
            if line.is_empty() {
                blank_pending = !text.is_empty();
                continue;
            }
            if blank_pending {
                text.push('\n');
                blank_pending = false;
            }
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// `//line`, `//extern`, `//export` and `//word:word` comments are tool directives.
fn is_directive(c: &str) -> bool {
    if c.starts_with("line ") || c.starts_with("extern ") || c.starts_with("export ") {
        return true;
    }
    let Some(colon) = c.find(':') else {
        return false;
    };
    if colon == 0 || colon + 1 >= c.len() {
        return false;
    }
    let is_word = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    c.as_bytes()[..=colon + 1]
        .iter()
        .enumerate()
        .all(|(i, &b)| i == colon || is_word(b))
}

/// One spec of a `const`, `var` or `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    pub names: Vec<Ident>,
    pub doc: Option<CommentGroup>,
}

/// A `const`, `var` or `type` declaration, grouped or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDecl {
    pub doc: Option<CommentGroup>,
    pub specs: Vec<Spec>,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: Ident,
    pub doc: Option<CommentGroup>,
    /// Methods have a receiver; free functions don't.
    pub has_receiver: bool,
}

impl FuncDecl {
    pub fn is_method(&self) -> bool {
        self.has_receiver
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    ConstGroup(GenDecl),
    VarGroup(GenDecl),
    TypeDef(GenDecl),
    FuncDef(FuncDecl),
}

/// One parsed Go file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Name from the package clause
    pub package: String,
    pub decls: Vec<Declaration>,
}

/// All files of a directory that share a package clause.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub files: Vec<SourceFile>,
}

impl Package {
    /// Declarations of every file, file by file.
    pub fn decls(&self) -> impl Iterator<Item = &Declaration> {
        self.files.iter().flat_map(|file| file.decls.iter())
    }
}

/// A parsed directory: package name → package, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SourceTree {
    packages: IndexMap<String, Package>,
}

impl SourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the package named by its package clause.
    pub fn insert(&mut self, file: SourceFile) {
        self.packages
            .entry(file.package.clone())
            .or_insert_with(|| Package {
                name: file.package.clone(),
                files: Vec::new(),
            })
            .files
            .push(file);
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }
}
