//! Which files in a package directory take part in extraction.
//!
//! Test files, fuzz harnesses and example files routinely export helpers
//! that are not part of the package's API, so they are never parsed.

/// Name of the fuzz harness file.
pub const FUZZ_FILE: &str = "fuzz.go";

/// Suffix of Go test files.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Prefix of Go example files.
pub const EXAMPLE_FILE_PREFIX: &str = "example_";

/// Extension of Go source files.
pub const GO_EXTENSION: &str = ".go";

/// Decide whether a directory entry is parsed.
///
/// Directories, the fuzz harness, test files and example files are
/// rejected; everything else is accepted.
pub fn accepts(name: &str, is_dir: bool) -> bool {
    if is_dir {
        return false;
    }
    if name == FUZZ_FILE {
        return false;
    }
    if name.ends_with(TEST_FILE_SUFFIX) {
        return false;
    }
    if name.starts_with(EXAMPLE_FILE_PREFIX) {
        return false;
    }
    true
}

/// Only `.go` files are candidates for [`accepts`].
pub fn is_go_source(name: &str) -> bool {
    name.ends_with(GO_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_files() {
        assert!(accepts("json.go", false));
        assert!(accepts("decode.go", false));
        assert!(accepts("fuzz_helpers.go", false));
        assert!(accepts("examples.go", false));
    }

    #[test]
    fn test_rejects_directories() {
        assert!(!accepts("testdata", true));
        assert!(!accepts("weird.go", true));
    }

    #[test]
    fn test_rejects_special_files() {
        assert!(!accepts("fuzz.go", false));
        assert!(!accepts("decode_test.go", false));
        assert!(!accepts("example_test.go", false));
        assert!(!accepts("example_marshal.go", false));
    }

    #[test]
    fn test_is_go_source() {
        assert!(is_go_source("json.go"));
        assert!(!is_go_source("README.md"));
        assert!(!is_go_source("go.mod"));
        assert!(!is_go_source("asm_amd64.s"));
    }
}
