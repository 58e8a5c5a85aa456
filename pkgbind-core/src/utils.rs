//! Shared naming helpers for generated Go code.

/// Convert a package path to PascalCase (e.g., "encoding/json" -> "EncodingJson")
///
/// Path separators, dots, dashes and underscores all start a new word, so
/// the result is usable as the tail of a Go identifier.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['/', '.', '-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a package path to a file stem (e.g., "encoding/json" -> "encoding_json")
pub fn to_file_stem(path: &str) -> String {
    path.trim_matches('/')
        .chars()
        .map(|c| match c {
            '/' | '.' | '-' => '_',
            c => c,
        })
        .collect()
}

/// Check whether a string is a valid Go identifier (letters, digits, underscores;
/// not starting with a digit).
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
