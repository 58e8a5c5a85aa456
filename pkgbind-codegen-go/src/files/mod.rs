pub use pkgbind_core::GENERATED_HEADER;

mod registration_file;

pub use registration_file::RegistrationFile;
