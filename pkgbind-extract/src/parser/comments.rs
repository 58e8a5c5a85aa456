//! Doc comment association.
//!
//! tree-sitter keeps comments as ordinary `comment` children of whatever
//! node they appear in, so docs are recovered from line positions: a run of
//! comments on adjacent lines is a group, and a group whose last line sits
//! directly above a node documents it.

use tree_sitter::Node;

use crate::CommentGroup;

/// Named, non-comment children of `node`, each with its doc comment group.
pub(super) fn with_docs<'t>(node: Node<'t>, src: &str) -> Vec<(Node<'t>, Option<CommentGroup>)> {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();

    let mut out = Vec::new();
    let mut group: Vec<Node<'t>> = Vec::new();
    let mut code_row: Option<usize> = None;

    for child in children {
        if child.kind() == "comment" {
            let row = child.start_position().row;
            if code_row == Some(row) {
                // Trailing comment
                group.clear();
                continue;
            }
            if group
                .last()
                .is_some_and(|last| row > last.end_position().row + 1)
            {
                group.clear();
            }
            group.push(child);
            continue;
        }

        let doc = group
            .last()
            .filter(|last| last.end_position().row + 1 == child.start_position().row)
            .map(|_| CommentGroup::new(group.iter().map(|c| text_of(*c, src))));
        group.clear();

        if child.is_named() {
            code_row = Some(child.end_position().row);
            out.push((child, doc));
        } else {
            // Statement terminators span onto the next line.
            code_row = Some(child.start_position().row);
        }
    }
    out
}

pub(super) fn text_of<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    src.get(node.byte_range()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use tree_sitter::Parser;

    use super::*;

    fn docs(src: &str) -> Vec<(String, Option<String>)> {
        let mut parser = Parser::new();
        parser.set_language(tree_sitter_go::language()).unwrap();
        let tree = parser.parse(src, None).unwrap();
        with_docs(tree.root_node(), src)
            .into_iter()
            .map(|(node, doc)| (node.kind().to_string(), doc.map(|d| d.text())))
            .collect()
    }

    #[test]
    fn test_adjacent_comment_is_doc() {
        let found = docs("package p\n\n// Foo is one.\n// Really.\nconst Foo = 1\n");
        assert_eq!(found[1].0, "const_declaration");
        assert_eq!(found[1].1.as_deref(), Some("Foo is one.\nReally.\n"));
    }

    #[test]
    fn test_blank_line_detaches_comment() {
        let found = docs("package p\n\n// Detached.\n\nconst Foo = 1\n");
        assert_eq!(found[1].1, None);
    }

    #[test]
    fn test_blank_line_splits_groups() {
        let found = docs("package p\n\n// First.\n\n// Second.\nconst Foo = 1\n");
        assert_eq!(found[1].1.as_deref(), Some("Second.\n"));
    }

    #[test]
    fn test_trailing_comment_is_not_doc() {
        let found = docs("package p\n\nconst A = 1 // Deprecated: gone\nconst B = 2\n");
        assert_eq!(found[1].1, None);
        assert_eq!(found[2].1, None);
    }

    #[test]
    fn test_block_comment_doc() {
        let found = docs("package p\n\n/*\nDeprecated. Old.\n*/\nfunc F() {}\n");
        assert_eq!(found[1].0, "function_declaration");
        assert_eq!(found[1].1.as_deref(), Some("Deprecated. Old.\n"));
    }
}
