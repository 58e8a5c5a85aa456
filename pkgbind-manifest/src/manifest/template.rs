//! Starter manifest written by `pkgbind init`.

/// Render a starter pkgbind.toml pointing at the given Go source root.
pub fn starter_manifest(root: &str) -> String {
    format!(
        r#"[generator]
# Directory the package dirs below are resolved against
root = "{root}"
# Where generated files are written, and their Go package clause
output = "packages"
package = "packages"
# Registries populated by the generated init functions
values = "env.Packages"
types = "env.PackageTypes"
imports = ["github.com/mattn/anko/env"]
# Exported names that must never be bound
exclude = ["ErrTrailingComma"]

[walk]
# Set to true to bind every package found under root
enabled = false
skip = ["internal", "testdata", "vendor"]

[[packages]]
path = "strings"

[[packages]]
path = "encoding/json"
"#
    )
}
