//! Error types for upload validation
//!
//! Two different things can go wrong here. A candidate file can be
//! rejected, which is an ordinary outcome described by
//! [`ValidationErrorKind`]. Separately, the tool itself can fail (an
//! unreadable config file, a bad CLI argument), which is a [`GuardError`].

use std::fmt;
use std::io;

/// Reason a candidate file was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Extension is not in the allow-list
    UnsupportedExtension,
    /// Declared MIME type does not match the extension
    MimeMismatch,
    /// TIFF header is neither "II*\0" nor "MM\0*", or could not be read
    InvalidTiffHeader,
    /// PNG signature mismatch (strict mode only)
    InvalidPngHeader,
    /// JPEG signature mismatch (strict mode only)
    InvalidJpegHeader,
}

impl ValidationErrorKind {
    /// Stable identifier for logs and scripting
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::UnsupportedExtension => "unsupported-extension",
            ValidationErrorKind::MimeMismatch => "mime-mismatch",
            ValidationErrorKind::InvalidTiffHeader => "invalid-tiff-header",
            ValidationErrorKind::InvalidPngHeader => "invalid-png-header",
            ValidationErrorKind::InvalidJpegHeader => "invalid-jpeg-header",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Operational errors of the crate
#[derive(Debug)]
pub enum GuardError {
    /// I/O error
    IoError(io::Error),
    /// Configuration could not be parsed or holds an invalid value
    ConfigError(String),
    /// Unknown message locale
    UnsupportedLocale(String),
    /// Header bytes do not carry a TIFF byte order marker
    InvalidByteOrder(u16),
    /// Header bytes carry a byte order marker but not version 42
    UnsupportedVersion(u16),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::IoError(e) => write!(f, "I/O error: {}", e),
            GuardError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GuardError::UnsupportedLocale(l) => write!(f, "Unsupported locale: {}", l),
            GuardError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            GuardError::UnsupportedVersion(v) => write!(f, "Unsupported TIFF version: {}", v),
            GuardError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GuardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuardError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GuardError {
    fn from(error: io::Error) -> Self {
        GuardError::IoError(error)
    }
}

impl From<String> for GuardError {
    fn from(msg: String) -> Self {
        GuardError::GenericError(msg)
    }
}

/// Result type for crate operations
pub type GuardResult<T> = Result<T, GuardError>;
