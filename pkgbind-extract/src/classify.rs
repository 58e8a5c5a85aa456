//! Routing of exported declarations into symbol categories.

use std::collections::BTreeSet;

use crate::{CommentGroup, Declaration, GenDecl, ModuleSurface, Package, SymbolKind};

/// Doc comment phrases that mark a declaration deprecated.
pub const DEPRECATION_MARKERS: [&str; 2] = ["Deprecated:", "Deprecated."];

/// Names the caller never wants bound.
///
/// Exclusions apply to constants and variables only, which is where
/// packages keep sentinel values that cannot be taken by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPolicy {
    excluded: BTreeSet<String>,
}

impl ExportPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for ExportPolicy {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            excluded: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Whether a doc comment carries a deprecation marker.
pub fn is_deprecated(doc: Option<&CommentGroup>) -> bool {
    doc.is_some_and(|doc| {
        let text = doc.text();
        DEPRECATION_MARKERS.iter().any(|marker| text.contains(marker))
    })
}

/// Sort the exported declarations of `package` into a [`ModuleSurface`].
///
/// Returns `None` when nothing survives filtering.
pub fn classify(package: &Package, policy: &ExportPolicy) -> Option<ModuleSurface> {
    let mut surface = ModuleSurface::new(&package.name);

    for decl in package.decls() {
        match decl {
            Declaration::ConstGroup(group) => {
                collect_group(&mut surface, SymbolKind::Constant, group, Some(policy))
            }
            Declaration::VarGroup(group) => {
                collect_group(&mut surface, SymbolKind::Variable, group, Some(policy))
            }
            Declaration::TypeDef(group) => {
                collect_group(&mut surface, SymbolKind::Type, group, None)
            }
            Declaration::FuncDef(func) => {
                if func.is_method() || !func.name.is_exported() {
                    continue;
                }
                if is_deprecated(func.doc.as_ref()) {
                    tracing::debug!(symbol = %func.name.name, "skipping deprecated function");
                    continue;
                }
                surface.functions.insert(func.name.name.as_str());
            }
        }
    }

    if surface.is_empty() {
        tracing::debug!(package = %package.name, "nothing exported");
        return None;
    }
    Some(surface)
}

fn collect_group(
    surface: &mut ModuleSurface,
    kind: SymbolKind,
    group: &GenDecl,
    policy: Option<&ExportPolicy>,
) {
    if is_deprecated(group.doc.as_ref()) {
        tracing::debug!(%kind, specs = group.specs.len(), "skipping deprecated group");
        return;
    }

    for spec in &group.specs {
        if is_deprecated(spec.doc.as_ref()) {
            continue;
        }
        for ident in spec.names.iter().filter(|ident| ident.is_exported()) {
            if policy.is_some_and(|policy| policy.is_excluded(&ident.name)) {
                tracing::debug!(symbol = %ident.name, %kind, "excluded by policy");
                continue;
            }
            surface.symbols_mut(kind).insert(ident.name.as_str());
        }
    }
}
