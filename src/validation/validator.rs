//! Pre-upload file format validation
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the extension must be one of .tif, .tiff, .png, .jpg, .jpeg
//! 2. the declared MIME type must be exactly the one the extension implies
//! 3. TIFF files must start with "II*\0" or "MM\0*"
//!
//! With strict signatures enabled, step 3 also covers PNG and JPEG.

use log::{debug, info, warn};

use crate::io::byte_order::ByteOrder;
use crate::io::candidate::CandidateFile;
use crate::validation::config::ValidatorConfig;
use crate::validation::constants::signatures;
use crate::validation::errors::ValidationErrorKind;
use crate::validation::format::ImageFormat;
use crate::validation::result::ValidationResult;

/// Validates candidate files before upload
///
/// Holds no per-file state, so one instance can be shared across tasks.
#[derive(Debug, Clone, Default)]
pub struct FileFormatValidator {
    config: ValidatorConfig,
}

impl FileFormatValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        FileFormatValidator { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Runs every applicable check against `file`
    pub async fn validate<F>(&self, file: &F) -> ValidationResult
    where
        F: CandidateFile + ?Sized,
    {
        let name = file.name();

        let format = match check_extension(name) {
            Some(format) => format,
            None => return self.reject(name, ValidationErrorKind::UnsupportedExtension),
        };

        if !check_declared_type(format, file.declared_type()) {
            debug!(
                "'{}' declares '{}', expected '{}'",
                name,
                file.declared_type(),
                format.expected_mime()
            );
            return self.reject(name, ValidationErrorKind::MimeMismatch);
        }

        if let Some(kind) = self.signature_failure(format) {
            if !check_signature(format, file).await {
                return self.reject(name, kind);
            }
        }

        info!("Accepted {} file '{}'", format.name(), name);
        ValidationResult::accepted()
    }

    /// Validates each file independently, preserving input order
    pub async fn validate_all<F>(&self, files: &[F]) -> Vec<ValidationResult>
    where
        F: CandidateFile,
    {
        let mut results = Vec::with_capacity(files.len());
        for file in files {
            results.push(self.validate(file).await);
        }
        results
    }

    /// The rejection kind for a failed signature, or `None` when the
    /// format's signature is not checked under the current config
    fn signature_failure(&self, format: ImageFormat) -> Option<ValidationErrorKind> {
        match format {
            ImageFormat::Tiff => Some(ValidationErrorKind::InvalidTiffHeader),
            ImageFormat::Png if self.config.strict_signatures => {
                Some(ValidationErrorKind::InvalidPngHeader)
            }
            ImageFormat::Jpeg if self.config.strict_signatures => {
                Some(ValidationErrorKind::InvalidJpegHeader)
            }
            _ => None,
        }
    }

    fn reject(&self, name: &str, kind: ValidationErrorKind) -> ValidationResult {
        warn!("Rejected '{}': {}", name, kind);
        ValidationResult::rejected(kind, self.config.locale)
    }
}

/// Resolves the accepted format from a file name's extension
pub fn check_extension(name: &str) -> Option<ImageFormat> {
    ImageFormat::from_file_name(name)
}

/// Exact, case-sensitive comparison with the format's MIME type
pub fn check_declared_type(format: ImageFormat, declared_type: &str) -> bool {
    declared_type == format.expected_mime()
}

/// Whether the file starts with a little- or big-endian TIFF header
///
/// Short files and read errors count as invalid.
pub async fn check_tiff_header<F>(file: &F) -> bool
where
    F: CandidateFile + ?Sized,
{
    match read_header(file).await {
        Some(header) => match ByteOrder::from_header(&header) {
            Ok(byte_order) => {
                debug!("'{}' is a {} TIFF", file.name(), byte_order.name());
                true
            }
            Err(e) => {
                debug!("'{}' has no TIFF header: {}", file.name(), e);
                false
            }
        },
        None => false,
    }
}

/// Whether the file starts with the signature of `format`
pub async fn check_signature<F>(format: ImageFormat, file: &F) -> bool
where
    F: CandidateFile + ?Sized,
{
    match format {
        ImageFormat::Tiff => check_tiff_header(file).await,
        ImageFormat::Png | ImageFormat::Jpeg => match read_header(file).await {
            Some(header) => format.matches_signature(&header),
            None => false,
        },
    }
}

/// Reads exactly the header bytes, or `None` on a short file or I/O error
async fn read_header<F>(file: &F) -> Option<Vec<u8>>
where
    F: CandidateFile + ?Sized,
{
    match file.read_range(0, signatures::HEADER_LEN).await {
        Ok(bytes) if bytes.len() == signatures::HEADER_LEN => Some(bytes),
        Ok(bytes) => {
            debug!("'{}' is only {} bytes long", file.name(), bytes.len());
            None
        }
        Err(e) => {
            debug!("Could not read header of '{}': {}", file.name(), e);
            None
        }
    }
}
