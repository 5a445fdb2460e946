//! Accepted raster formats
//!
//! Maps file extensions onto formats and formats onto their expected
//! MIME type and signature.

use log::debug;

use crate::validation::constants::{extensions, mime, signatures};

/// A raster format accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// TIFF or GeoTIFF (.tif, .tiff)
    Tiff,
    /// PNG (.png)
    Png,
    /// JPEG (.jpg, .jpeg)
    Jpeg,
}

impl ImageFormat {
    /// Looks up a format by its normalized extension (".tif", ".png", ...)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            extensions::TIF | extensions::TIFF => Some(ImageFormat::Tiff),
            extensions::PNG => Some(ImageFormat::Png),
            extensions::JPG | extensions::JPEG => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Resolves the format of a file name, ignoring extension case
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = normalized_extension(name)?;
        let format = Self::from_extension(&extension);
        debug!("Extension of '{}' is '{}' -> {:?}", name, extension, format);
        format
    }

    /// The only MIME type a file of this format may declare
    pub fn expected_mime(&self) -> &'static str {
        match self {
            ImageFormat::Tiff => mime::TIFF,
            ImageFormat::Png => mime::PNG,
            ImageFormat::Jpeg => mime::JPEG,
        }
    }

    /// Whether the given header starts with this format's signature
    pub fn matches_signature(&self, header: &[u8]) -> bool {
        match self {
            ImageFormat::Tiff => {
                header.starts_with(&signatures::TIFF_LITTLE_ENDIAN)
                    || header.starts_with(&signatures::TIFF_BIG_ENDIAN)
            }
            ImageFormat::Png => header.starts_with(&signatures::PNG),
            ImageFormat::Jpeg => header.starts_with(&signatures::JPEG),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Tiff => "GeoTIFF",
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
        }
    }
}

/// Returns "." followed by the lowercased text after the last dot.
///
/// A name without any dot has no extension, so a file called "tif" is
/// not mistaken for a TIFF. A trailing dot yields ".".
pub fn normalized_extension(name: &str) -> Option<String> {
    let (_, tail) = name.rsplit_once('.')?;
    Some(format!(".{}", tail.to_lowercase()))
}
