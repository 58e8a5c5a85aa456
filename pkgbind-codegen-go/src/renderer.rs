use pkgbind_codegen::{
    Accessor, DocRenderer, RegistrationDoc, Registry, RegistryKind,
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// Formats a [`RegistrationDoc`] as gofmt-style Go.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl DocRenderer for GoRenderer {
    fn render(&self, doc: &RegistrationDoc) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(&GoRegistration(doc));
        builder.build()
    }
}

/// The registration function of a document, as code fragments.
pub struct GoRegistration<'a>(pub &'a RegistrationDoc);

impl Renderable for GoRegistration<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let doc = self.0;
        vec![CodeFragment::block(
            format!("func {}() {{", doc.function),
            doc.registries.iter().map(registry).collect(),
            Some("}".to_string()),
        )]
    }
}

fn registry(registry: &Registry) -> CodeFragment {
    let element = match registry.kind {
        RegistryKind::Values => "reflect.Value",
        RegistryKind::Types => "reflect.Type",
    };

    let mut body = Vec::new();
    for section in &registry.sections {
        if let Some(comment) = &section.comment {
            body.push(CodeFragment::comment(comment));
        }
        for binding in &section.bindings {
            body.push(CodeFragment::line(format!(
                "\"{}\": {},",
                binding.name,
                accessor(&binding.accessor)
            )));
        }
    }

    CodeFragment::block(
        format!(
            "{}[\"{}\"] = map[string]{}{{",
            registry.target, registry.key, element
        ),
        body,
        Some("}".to_string()),
    )
}

/// The Go expression that reaches a bound symbol.
pub(crate) fn accessor(accessor: &Accessor) -> String {
    match accessor {
        Accessor::Value { qualifier, name } => format!("reflect.ValueOf({}.{})", qualifier, name),
        Accessor::Type { qualifier, name } => {
            format!("reflect.TypeOf((*{}.{})(nil)).Elem()", qualifier, name)
        }
    }
}
