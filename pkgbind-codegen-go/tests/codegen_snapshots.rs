//! Snapshot tests for Go registration code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{fs, path::Path};

use pkgbind_codegen::RegistryNames;
use pkgbind_codegen_go::{ExportOptions, RegistrationFile, export_declarations, registration_doc};
use pkgbind_core::GeneratedFile;
use pkgbind_extract::ExportPolicy;
use tempfile::TempDir;

/// Write `files` into `root/dir` and return the root.
fn fixture(dir: &str, files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    let pkg = root.path().join(dir);
    fs::create_dir_all(&pkg).unwrap();
    for (name, content) in files {
        fs::write(pkg.join(name), content).unwrap();
    }
    root
}

const WIDGETS: &str = r#"package widgets

import "fmt"

// Foo is the answer.
const Foo = 1

// Deprecated: use Foo.
const Bar = 2

// DoThing does a thing.
func DoThing() { fmt.Println(Foo) }

// Deprecated: use DoThing.
func DoOldThing() {}

type Widget struct{}

func (w *Widget) Spin() {}
"#;

#[test]
fn test_widgets_registration() {
    let root = fixture("widgets", &[("widgets.go", WIDGETS)]);
    let output = export_declarations(
        root.path(),
        "example.com/widgets",
        "widgets",
        "Widgets",
        &ExportOptions::default(),
    )
    .unwrap();

    insta::assert_snapshot!("widgets_registration", output);
}

#[test]
fn test_json_like_registration() {
    let root = fixture(
        "encoding/json",
        &[
            (
                "decode.go",
                r#"package json

// Unmarshal parses JSON.
func Unmarshal(data []byte, v any) error { return nil }

type Decoder struct{}

type (
	Number string
	// Deprecated: no longer used.
	UnmarshalFieldError struct{}
)
"#,
            ),
            (
                "encode.go",
                r#"package json

func Marshal(v any) ([]byte, error) { return nil, nil }

var (
	ErrTrailingComma = errorString("trailing comma")
	errPhase         = errorString("phase")
)

type errorString string

const (
	tokenTopValue = iota
	// Indent is the default indent.
	Indent = "\t"
)
"#,
            ),
            (
                "decode_test.go",
                "package json\n\nfunc TestDecode() {}\n",
            ),
            ("fuzz.go", "package json\n\nfunc Fuzz(data []byte) int { return 0 }\n"),
        ],
    );

    let opts = ExportOptions::new(
        ["ErrTrailingComma"].into_iter().collect(),
        RegistryNames::default(),
    );
    let output =
        export_declarations(root.path(), "encoding/json", "encoding/json", "EncodingJson", &opts)
            .unwrap();

    insta::assert_snapshot!("json_like_registration", output);
}

#[test]
fn test_registration_file() {
    let root = fixture(
        "strings",
        &[(
            "strings.go",
            "package strings\n\nfunc Split(s, sep string) []string { return nil }\n",
        )],
    );
    let opts = ExportOptions::new(
        ExportPolicy::new(),
        RegistryNames::new("vm.Packages", "vm.PackageTypes"),
    );
    let doc = registration_doc(&root.path().join("strings"), "strings", "", &opts)
        .unwrap()
        .unwrap();
    let file = RegistrationFile::new("bindings", "strings", doc)
        .with_imports(["example.com/vm"]);

    assert_eq!(file.path(Path::new("out")), Path::new("out/strings.go"));
    insta::assert_snapshot!("registration_file", file.contents());
}

#[test]
fn test_generation_is_deterministic() {
    let root = fixture(
        "widgets",
        &[
            ("widgets.go", WIDGETS),
            ("more.go", "package widgets\n\nfunc Alpha() {}\n\nvar Zed = 1\n"),
        ],
    );
    let run = || {
        export_declarations(
            root.path(),
            "example.com/widgets",
            "widgets",
            "Widgets",
            &ExportOptions::default(),
        )
        .unwrap()
    };

    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn test_test_only_package_exports_nothing() {
    let root = fixture(
        "widgets",
        &[("widgets_test.go", "package widgets\n\nfunc TestWidget() {}\n")],
    );
    let output = export_declarations(
        root.path(),
        "example.com/widgets",
        "widgets",
        "Widgets",
        &ExportOptions::default(),
    )
    .unwrap();
    assert_eq!(output, "");
}

#[test]
fn test_main_package_exports_nothing() {
    let root = fixture("cmd/tool", &[("main.go", "package main\n\nfunc Run() {}\n")]);
    let output = export_declarations(
        root.path(),
        "example.com/cmd/tool",
        "cmd/tool",
        "Tool",
        &ExportOptions::default(),
    )
    .unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_ambiguous_package_is_an_error() {
    let root = fixture(
        "mixed",
        &[
            ("a.go", "package alpha\n\nfunc A() {}\n"),
            ("b.go", "package beta\n\nfunc B() {}\n"),
        ],
    );
    let result = export_declarations(
        root.path(),
        "mixed",
        "mixed",
        "Mixed",
        &ExportOptions::default(),
    );
    assert!(result.is_err());
}
