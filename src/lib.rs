pub mod cli;
pub mod commands;
pub mod io;
pub mod utils;
pub mod validation;

pub use io::byte_order::ByteOrder;
pub use io::candidate::{CandidateFile, LocalFile, MemoryFile};
pub use validation::{
    FileFormatValidator, GuardError, GuardResult, ImageFormat, Locale, ValidationErrorKind,
    ValidationResult, ValidatorConfig,
};
