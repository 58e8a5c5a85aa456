//! The registration document: what one generated `init` function binds.
//!
//! [`RegistrationDoc::build`] turns a [`ModuleSurface`] into a tree of
//! registries, sections and bindings. A [`DocRenderer`] prints it in a
//! target language.

use pkgbind_extract::{ModuleSurface, SymbolKind};

/// Symbol kinds bound in the value registry, in section order.
const VALUE_SECTIONS: [SymbolKind; 3] = [
    SymbolKind::Constant,
    SymbolKind::Variable,
    SymbolKind::Function,
];

/// Expressions of the registries the generated code assigns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryNames {
    /// Name → `reflect.Value` registry
    pub values: String,
    /// Name → `reflect.Type` registry
    pub types: String,
}

impl RegistryNames {
    pub fn new(values: impl Into<String>, types: impl Into<String>) -> Self {
        Self {
            values: values.into(),
            types: types.into(),
        }
    }
}

impl Default for RegistryNames {
    fn default() -> Self {
        Self::new("env.Packages", "env.PackageTypes")
    }
}

/// How a bound symbol is reached from the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// The symbol's value
    Value { qualifier: String, name: String },
    /// The symbol's type, taken through a nil pointer so no value is needed
    Type { qualifier: String, name: String },
}

/// One `"Name": accessor` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub accessor: Accessor,
}

/// A run of bindings under an optional marker comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub comment: Option<String>,
    pub bindings: Vec<Binding>,
}

/// Which of the two registries an assignment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    Values,
    Types,
}

/// One `registry["key"] = map{...}` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub kind: RegistryKind,
    /// Registry expression, e.g. `env.Packages`
    pub target: String,
    /// Map key the package is registered under
    pub key: String,
    pub sections: Vec<Section>,
}

/// A complete registration function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDoc {
    /// Function name, `init` followed by the suffix
    pub function: String,
    pub registries: Vec<Registry>,
}

impl RegistrationDoc {
    /// Build the document for `surface`, registered under `key`.
    ///
    /// Accessors are qualified with the package clause name. The value
    /// registry always carries the constants, variables and functions
    /// sections, even when empty.
    pub fn build(
        init_suffix: &str,
        key: &str,
        surface: &ModuleSurface,
        registries: &RegistryNames,
    ) -> Self {
        let qualifier = surface.package.as_str();

        let value_sections = VALUE_SECTIONS
            .iter()
            .map(|kind| Section {
                comment: Some(kind.plural().to_string()),
                bindings: surface
                    .symbols(*kind)
                    .sorted()
                    .map(|name| Binding {
                        name: name.to_string(),
                        accessor: Accessor::Value {
                            qualifier: qualifier.to_string(),
                            name: name.to_string(),
                        },
                    })
                    .collect(),
            })
            .collect();

        let type_section = Section {
            comment: None,
            bindings: surface
                .types
                .sorted()
                .map(|name| Binding {
                    name: name.to_string(),
                    accessor: Accessor::Type {
                        qualifier: qualifier.to_string(),
                        name: name.to_string(),
                    },
                })
                .collect(),
        };

        Self {
            function: format!("init{}", init_suffix),
            registries: vec![
                Registry {
                    kind: RegistryKind::Values,
                    target: registries.values.clone(),
                    key: key.to_string(),
                    sections: value_sections,
                },
                Registry {
                    kind: RegistryKind::Types,
                    target: registries.types.clone(),
                    key: key.to_string(),
                    sections: vec![type_section],
                },
            ],
        }
    }
}

/// Prints a [`RegistrationDoc`] as source text of a target language.
pub trait DocRenderer {
    fn render(&self, doc: &RegistrationDoc) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> ModuleSurface {
        let mut surface = ModuleSurface::new("widgets");
        surface.constants = ["Foo"].into_iter().collect();
        surface.functions = ["Zap", "DoThing"].into_iter().collect();
        surface.types = ["Widget"].into_iter().collect();
        surface
    }

    #[test]
    fn test_build_function_name() {
        let doc = RegistrationDoc::build("Widgets", "k", &surface(), &RegistryNames::default());
        assert_eq!(doc.function, "initWidgets");

        let doc = RegistrationDoc::build("", "k", &surface(), &RegistryNames::default());
        assert_eq!(doc.function, "init");
    }

    #[test]
    fn test_value_sections_always_present() {
        let doc = RegistrationDoc::build(
            "W",
            "example.com/widgets",
            &surface(),
            &RegistryNames::default(),
        );
        let values = &doc.registries[0];
        assert_eq!(values.kind, RegistryKind::Values);
        assert_eq!(values.target, "env.Packages");
        assert_eq!(values.key, "example.com/widgets");

        let comments: Vec<_> = values
            .sections
            .iter()
            .map(|s| s.comment.as_deref().unwrap())
            .collect();
        assert_eq!(comments, vec!["constants", "variables", "functions"]);
        assert!(values.sections[1].bindings.is_empty());

        let names: Vec<_> = values
            .sections
            .iter()
            .flat_map(|s| s.bindings.iter().map(|b| b.name.as_str()))
            .collect();
        assert_eq!(names, vec!["Foo", "DoThing", "Zap"]);
    }

    #[test]
    fn test_type_registry() {
        let registries = RegistryNames::new("vm.Values", "vm.Types");
        let doc = RegistrationDoc::build("W", "w", &surface(), &registries);
        assert_eq!(doc.registries.len(), 2);
        let types = &doc.registries[1];
        assert_eq!(types.kind, RegistryKind::Types);
        assert_eq!(types.target, "vm.Types");
        assert_eq!(types.sections.len(), 1);
        assert!(types.sections[0].comment.is_none());

        let binding = &types.sections[0].bindings[0];
        assert_eq!(binding.name, "Widget");
        assert_eq!(
            binding.accessor,
            Accessor::Type {
                qualifier: "widgets".to_string(),
                name: "Widget".to_string(),
            }
        );
    }
}
