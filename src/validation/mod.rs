//! Upload validation module
//!
//! This module decides whether a user-selected file is an acceptable
//! raster image (GeoTIFF, PNG or JPEG) before it is uploaded.

pub mod config;
pub(crate) mod constants;
pub mod errors;
pub mod format;
pub mod messages;
pub mod result;
#[cfg(test)]
mod tests;
pub mod validator;

pub use config::ValidatorConfig;
pub use errors::{GuardError, GuardResult, ValidationErrorKind};
pub use format::ImageFormat;
pub use messages::Locale;
pub use result::ValidationResult;
pub use validator::{
    check_declared_type, check_extension, check_signature, check_tiff_header, FileFormatValidator,
};
