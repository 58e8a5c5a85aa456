//! Go source parsing with tree-sitter.

mod comments;
mod lower;

use std::path::Path;

use miette::NamedSource;
use tree_sitter::Parser;

use crate::{
    SourceFile, SourceTree,
    error::{Error, Result},
    filter,
};

/// Parse every accepted `.go` file of `dir` into a [`SourceTree`].
///
/// Files are read in file-name order, so packages appear in the tree in the
/// order their first file sorts. Fails on the first unreadable or malformed
/// file.
pub fn parse_dir(dir: &Path) -> Result<SourceTree> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| Error::io(entry.path(), e))?
            .is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !filter::is_go_source(&name) {
            continue;
        }
        if !filter::accepts(&name, is_dir) {
            tracing::debug!(file = %name, "skipping file");
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut parser = go_parser()?;
    let mut tree = SourceTree::new();
    for name in names {
        let path = dir.join(&name);
        let src = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let file = parse_with(&mut parser, &path, &src)?;
        tracing::debug!(
            file = %path.display(),
            package = %file.package,
            decls = file.decls.len(),
            "parsed"
        );
        tree.insert(file);
    }
    Ok(tree)
}

/// Parse a single file's source text.
pub fn parse_source(path: &Path, src: &str) -> Result<SourceFile> {
    let mut parser = go_parser()?;
    parse_with(&mut parser, path, src)
}

fn go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_go::language())
        .map_err(|e| {
            Box::new(Error::Grammar {
                message: e.to_string(),
            })
        })?;
    Ok(parser)
}

fn parse_with(parser: &mut Parser, path: &Path, src: &str) -> Result<SourceFile> {
    let file = path.display().to_string();
    let Some(tree) = parser.parse(src, None) else {
        return Err(Box::new(Error::Parse {
            src: NamedSource::new(&file, src.to_string()),
            file,
            span: None,
            message: "parser produced no tree".to_string(),
        }));
    };

    let root = tree.root_node();
    if root.has_error() {
        let (span, message) = match lower::first_error(root) {
            Some(bad) => (Some(bad.span), bad.message),
            None => (None, "syntax error".to_string()),
        };
        return Err(Box::new(Error::Parse {
            src: NamedSource::new(&file, src.to_string()),
            file,
            span,
            message,
        }));
    }

    let lowered = lower::lower_file(root, src);
    let Some(package) = lowered.package else {
        return Err(Box::new(Error::MissingPackageClause {
            src: NamedSource::new(&file, src.to_string()),
            file,
        }));
    };

    Ok(SourceFile {
        path: path.to_path_buf(),
        package,
        decls: lowered.decls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Declaration, FuncDecl};

    fn names(decl: &Declaration) -> Vec<&str> {
        match decl {
            Declaration::ConstGroup(group)
            | Declaration::VarGroup(group)
            | Declaration::TypeDef(group) => group
                .specs
                .iter()
                .flat_map(|spec| spec.names.iter().map(|ident| ident.name.as_str()))
                .collect(),
            Declaration::FuncDef(func) => vec![func.name.name.as_str()],
        }
    }

    fn parse(src: &str) -> SourceFile {
        parse_source(Path::new("test.go"), src).expect("Failed to parse test source")
    }

    #[test]
    fn test_package_clause() {
        let file = parse("package widgets\n");
        assert_eq!(file.package, "widgets");
        assert!(file.decls.is_empty());
    }

    #[test]
    fn test_declaration_kinds() {
        let file = parse(
            r#"package widgets

import "fmt"

const Foo = 1

var Bar, baz = 2, 3

type Widget struct{}

type Alias = Widget

func DoThing() { fmt.Println() }

func (w *Widget) Method() {}
"#,
        );

        let kinds: Vec<_> = file
            .decls
            .iter()
            .map(|d| match d {
                Declaration::ConstGroup(_) => "const",
                Declaration::VarGroup(_) => "var",
                Declaration::TypeDef(_) => "type",
                Declaration::FuncDef(_) => "func",
            })
            .collect();
        assert_eq!(kinds, vec!["const", "var", "type", "type", "func", "func"]);
        assert_eq!(names(&file.decls[1]), vec!["Bar", "baz"]);
        assert_eq!(names(&file.decls[3]), vec!["Alias"]);

        match &file.decls[5] {
            Declaration::FuncDef(FuncDecl {
                name, has_receiver, ..
            }) => {
                assert_eq!(name.name, "Method");
                assert!(*has_receiver);
            }
            other => panic!("expected method, got {:?}", other),
        }
    }

    #[test]
    fn test_grouped_declarations() {
        let file = parse(
            r#"package widgets

const (
	A = iota
	B
	c
)

type (
	X int
	Y = X
)
"#,
        );
        assert_eq!(file.decls.len(), 2);
        assert_eq!(names(&file.decls[0]), vec!["A", "B", "c"]);
        assert_eq!(names(&file.decls[1]), vec!["X", "Y"]);
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_source(Path::new("bad.go"), "package bad\n\nfunc Broken( {\n").unwrap_err();
        match *err {
            Error::Parse { file, span, .. } => {
                assert_eq!(file, "bad.go");
                assert!(span.is_some());
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_package_clause() {
        let err = parse_source(Path::new("nopkg.go"), "func F() {}\n").unwrap_err();
        assert!(matches!(*err, Error::MissingPackageClause { .. }));
    }
}
