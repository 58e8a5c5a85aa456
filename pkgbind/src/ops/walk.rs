//! Package discovery under the source root.

use std::path::Path;

use eyre::{Context, Result};
use pkgbind_extract::filter;
use pkgbind_manifest::PackageEntry;
use walkdir::{DirEntry, WalkDir};

/// Find every directory under `root` that holds at least one parsed Go file.
///
/// Hidden directories, directories starting with `_` and directories named
/// in `skip` are not descended into. Entries come back in path order with
/// `/`-separated import paths relative to `root`.
pub fn discover(root: &Path, skip: &[String]) -> Result<Vec<PackageEntry>> {
    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !entry.file_type().is_dir() || descend(entry, skip)
        });

    for entry in walker {
        let entry = entry.wrap_err_with(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_dir() || !has_go_sources(entry.path())? {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        tracing::debug!(%path, "discovered package directory");
        found.push(PackageEntry::new(path));
    }

    Ok(found)
}

fn descend(entry: &DirEntry, skip: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    !(name.starts_with('.') || name.starts_with('_') || skip.iter().any(|s| *s == name))
}

fn has_go_sources(dir: &Path) -> Result<bool> {
    let entries =
        std::fs::read_dir(dir).wrap_err_with(|| format!("Failed to read {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type()?.is_dir();
        if filter::is_go_source(&name) && filter::accepts(&name, is_dir) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package x\n").unwrap();
    }

    fn paths(entries: &[PackageEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_discover_packages() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "strings/strings.go");
        touch(root.path(), "encoding/json/decode.go");
        touch(root.path(), "encoding/README");
        touch(root.path(), "net/http/http_test.go");
        touch(root.path(), "net/http/httptest/server.go");

        let found = discover(root.path(), &[]).unwrap();
        assert_eq!(
            paths(&found),
            vec!["encoding/json", "net/http/httptest", "strings"]
        );
    }

    #[test]
    fn test_skipped_directories() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "fmt/print.go");
        touch(root.path(), "internal/abi/abi.go");
        touch(root.path(), "fmt/testdata/data.go");
        touch(root.path(), ".git/hooks.go");
        touch(root.path(), "_obsolete/old.go");

        let skip = vec!["internal".to_string(), "testdata".to_string()];
        let found = discover(root.path(), &skip).unwrap();
        assert_eq!(paths(&found), vec!["fmt"]);
    }

    #[test]
    fn test_root_files_are_not_a_package() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "root.go");
        assert!(discover(root.path(), &[]).unwrap().is_empty());
    }
}
