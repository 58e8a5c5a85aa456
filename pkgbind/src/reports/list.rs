//! List command report data structures.

use std::path::PathBuf;

use pkgbind_extract::{ModuleSurface, SymbolKind};

use super::output::{Output, Report};

/// The exported symbols of one package directory.
#[derive(Debug)]
pub struct ListReport {
    pub dir: PathBuf,
    /// `None` when the directory has no bindable package.
    pub surface: Option<ModuleSurface>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        let Some(surface) = &self.surface else {
            out.preformatted(&format!(
                "{}: no bindable package",
                self.dir.display()
            ));
            return;
        };

        out.key_value("package", &surface.package);
        for kind in SymbolKind::ALL {
            let symbols = surface.symbols(kind);
            if symbols.is_empty() {
                continue;
            }
            out.newline();
            out.section(&format!("{} ({})", kind.plural(), symbols.len()));
            for name in symbols.sorted() {
                out.list_item(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_sections_in_kind_order() {
        let mut surface = ModuleSurface::new("widgets");
        surface.symbols_mut(SymbolKind::Function).insert("New");
        surface.symbols_mut(SymbolKind::Constant).insert("Foo");
        surface.symbols_mut(SymbolKind::Constant).insert("Bar");

        let report = ListReport {
            dir: PathBuf::from("widgets"),
            surface: Some(surface),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        let constants = format!("{} (2):", SymbolKind::Constant.plural());
        let functions = format!("{} (1):", SymbolKind::Function.plural());
        assert_eq!(
            out.lines,
            vec![
                "package: widgets",
                "",
                constants.as_str(),
                "  - Bar",
                "  - Foo",
                "",
                functions.as_str(),
                "  - New",
            ]
        );
    }

    #[test]
    fn test_render_without_package() {
        let report = ListReport {
            dir: PathBuf::from("cmd/tool"),
            surface: None,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["cmd/tool: no bindable package"]);
    }
}
