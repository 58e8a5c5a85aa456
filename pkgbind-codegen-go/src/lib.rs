//! Go code generation for pkgbind.
//!
//! [`export_declarations`] is the one-call entry point: it extracts a
//! package directory and returns the text of its registration function.
//! [`RegistrationFile`] wraps the same function in a complete Go file.

mod generator;
mod renderer;

pub mod files;

pub use files::RegistrationFile;
pub use generator::{ExportOptions, export_declarations, registration_doc};
pub use renderer::{GoRegistration, GoRenderer};
