use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use pkgbind_codegen::{DocRenderer, RegistrationDoc};
use pkgbind_core::{FileRules, GeneratedFile, to_file_stem};

use super::GENERATED_HEADER;
use crate::GoRenderer;

/// Import every registration file needs.
const REFLECT_IMPORT: &str = "reflect";

/// A complete Go file holding one package's registration function.
pub struct RegistrationFile {
    /// Package clause of the generated file
    package: String,
    /// Import path of the bound package
    import_path: String,
    extra_imports: Vec<String>,
    doc: RegistrationDoc,
}

impl RegistrationFile {
    pub fn new(
        package: impl Into<String>,
        import_path: impl Into<String>,
        doc: RegistrationDoc,
    ) -> Self {
        Self {
            package: package.into(),
            import_path: import_path.into(),
            extra_imports: Vec::new(),
            doc,
        }
    }

    /// Additional imports, typically the package that declares the registries.
    pub fn with_imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_imports
            .extend(imports.into_iter().map(Into::into));
        self
    }

    /// Sorted, deduplicated import paths.
    pub fn imports(&self) -> Vec<&str> {
        let mut imports: BTreeSet<&str> = BTreeSet::new();
        imports.insert(REFLECT_IMPORT);
        imports.insert(self.import_path.as_str());
        imports.extend(self.extra_imports.iter().map(String::as_str));
        imports.into_iter().collect()
    }

    /// File name derived from the import path, e.g. `encoding_json.go`.
    pub fn file_name(&self) -> String {
        format!("{}.go", to_file_stem(&self.import_path))
    }

    pub fn doc(&self) -> &RegistrationDoc {
        &self.doc
    }
}

impl GeneratedFile for RegistrationFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let mut out = format!("package {}\n\nimport (\n", self.package);
        for import in self.imports() {
            out.push_str(&format!("\t\"{}\"\n", import));
        }
        out.push_str(")\n\n");
        out.push_str(&GoRenderer.render(&self.doc));
        out
    }
}
