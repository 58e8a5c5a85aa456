//! Lowering of tree-sitter nodes into [`Declaration`]s.

use miette::SourceSpan;
use tree_sitter::Node;

use super::comments::{text_of, with_docs};
use crate::{Declaration, FuncDecl, GenDecl, Ident, Spec};

/// The package name and top-level declarations of one file.
pub(super) struct LoweredFile {
    pub package: Option<String>,
    pub decls: Vec<Declaration>,
}

/// Location and description of the first syntax error in a tree.
pub(super) struct SyntaxError {
    pub span: SourceSpan,
    pub message: String,
}

pub(super) fn lower_file(root: Node<'_>, src: &str) -> LoweredFile {
    let mut package = None;
    let mut decls = Vec::new();

    for (node, doc) in with_docs(root, src) {
        match node.kind() {
            "package_clause" => {
                if package.is_none() {
                    package = named_child_of_kind(node, "package_identifier")
                        .map(|id| text_of(id, src).to_string());
                }
            }
            "const_declaration" => decls.push(Declaration::ConstGroup(GenDecl {
                doc,
                specs: lower_specs(node, src, &["const_spec"]),
            })),
            "var_declaration" => decls.push(Declaration::VarGroup(GenDecl {
                doc,
                specs: lower_specs(node, src, &["var_spec"]),
            })),
            "type_declaration" => decls.push(Declaration::TypeDef(GenDecl {
                doc,
                specs: lower_specs(node, src, &["type_spec", "type_alias"]),
            })),
            kind @ ("function_declaration" | "method_declaration") => {
                if let Some(name) = node.child_by_field_name("name") {
                    decls.push(Declaration::FuncDef(FuncDecl {
                        name: Ident::new(text_of(name, src)),
                        doc,
                        has_receiver: kind == "method_declaration",
                    }));
                }
            }
            _ => {}
        }
    }

    LoweredFile { package, decls }
}

fn lower_specs(node: Node<'_>, src: &str, kinds: &[&str]) -> Vec<Spec> {
    let mut specs = Vec::new();
    for (child, doc) in with_docs(node, src) {
        if kinds.contains(&child.kind()) {
            specs.push(Spec {
                names: spec_names(child, src),
                doc,
            });
        } else if child.kind().ends_with("_spec_list") {
            specs.extend(lower_specs(child, src, kinds));
        }
    }
    specs
}

fn spec_names(spec: Node<'_>, src: &str) -> Vec<Ident> {
    let mut cursor = spec.walk();
    spec.children_by_field_name("name", &mut cursor)
        .filter(|n| n.is_named())
        .map(|n| Ident::new(text_of(n, src)))
        .collect()
}

fn named_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
pub(super) fn first_error(node: Node<'_>) -> Option<SyntaxError> {
    if node.is_missing() {
        return Some(SyntaxError {
            span: (node.start_byte(), node.end_byte() - node.start_byte()).into(),
            message: format!("missing {}", node.kind()),
        });
    }
    if node.is_error() {
        return Some(SyntaxError {
            span: (node.start_byte(), node.end_byte() - node.start_byte()).into(),
            message: "unexpected syntax".to_string(),
        });
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
