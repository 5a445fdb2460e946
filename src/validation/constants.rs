//! Upload validation constants
//!
//! Extensions, MIME strings and leading-byte signatures of the accepted
//! raster formats.

/// Accepted file extensions, lowercase with the leading dot
pub mod extensions {
    pub const TIF: &str = ".tif";
    pub const TIFF: &str = ".tiff";
    pub const PNG: &str = ".png";
    pub const JPG: &str = ".jpg";
    pub const JPEG: &str = ".jpeg";

    pub const ALL: [&str; 5] = [TIF, TIFF, PNG, JPG, JPEG];
}

/// MIME types expected for each format
pub mod mime {
    pub const TIFF: &str = "image/tiff";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";

    /// Fallback when the host environment cannot name a type
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Leading bytes of each format
pub mod signatures {
    /// Number of header bytes read for sniffing
    pub const HEADER_LEN: usize = 4;

    /// "II*\0" little-endian TIFF
    pub const TIFF_LITTLE_ENDIAN: [u8; 4] = [0x49, 0x49, 0x2A, 0x00];

    /// "MM\0*" big-endian TIFF
    pub const TIFF_BIG_ENDIAN: [u8; 4] = [0x4D, 0x4D, 0x00, 0x2A];

    /// "II" marker read as a little-endian u16
    pub const LITTLE_ENDIAN_MARKER: u16 = 0x4949;

    /// "MM" marker read as a little-endian u16
    pub const BIG_ENDIAN_MARKER: u16 = 0x4D4D;

    /// Standard TIFF version number
    pub const TIFF_VERSION: u16 = 42;

    /// First four bytes of the PNG signature ("\x89PNG")
    pub const PNG: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

    /// JPEG SOI marker followed by the first marker prefix
    pub const JPEG: [u8; 3] = [0xFF, 0xD8, 0xFF];
}
