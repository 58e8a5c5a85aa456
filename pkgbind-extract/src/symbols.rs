use std::{collections::BTreeSet, fmt};

use serde::Serialize;

/// The four categories a bound symbol falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Constant,
    Variable,
    Type,
    Function,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 4] = [
        SymbolKind::Constant,
        SymbolKind::Variable,
        SymbolKind::Type,
        SymbolKind::Function,
    ];

    /// Plural label, as used in generated section comments.
    pub fn plural(self) -> &'static str {
        match self {
            SymbolKind::Constant => "constants",
            SymbolKind::Variable => "variables",
            SymbolKind::Type => "types",
            SymbolKind::Function => "functions",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Constant => "constant",
            SymbolKind::Variable => "variable",
            SymbolKind::Type => "type",
            SymbolKind::Function => "function",
        };
        f.write_str(name)
    }
}

/// Unique symbol names, iterated in byte-wise order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolSet(BTreeSet<String>);

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Names in ascending byte order.
    pub fn sorted(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The exported surface of one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleSurface {
    /// Name from the package clause
    pub package: String,
    pub constants: SymbolSet,
    pub variables: SymbolSet,
    pub types: SymbolSet,
    pub functions: SymbolSet,
}

impl ModuleSurface {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn symbols(&self, kind: SymbolKind) -> &SymbolSet {
        match kind {
            SymbolKind::Constant => &self.constants,
            SymbolKind::Variable => &self.variables,
            SymbolKind::Type => &self.types,
            SymbolKind::Function => &self.functions,
        }
    }

    pub fn symbols_mut(&mut self, kind: SymbolKind) -> &mut SymbolSet {
        match kind {
            SymbolKind::Constant => &mut self.constants,
            SymbolKind::Variable => &mut self.variables,
            SymbolKind::Type => &mut self.types,
            SymbolKind::Function => &mut self.functions,
        }
    }

    /// Total number of symbols across all categories.
    pub fn len(&self) -> usize {
        SymbolKind::ALL
            .iter()
            .map(|kind| self.symbols(*kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
