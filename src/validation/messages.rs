//! User-facing rejection messages

use std::fmt;
use std::str::FromStr;

use crate::validation::errors::{GuardError, ValidationErrorKind};

/// Language of the rejection messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    SimplifiedChinese,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::SimplifiedChinese => "zh-CN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "en-US" | "en-GB" => Ok(Locale::English),
            "zh" | "zh-CN" | "zh-Hans" => Ok(Locale::SimplifiedChinese),
            other => Err(GuardError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Message shown to the user for a rejection
pub fn message(kind: ValidationErrorKind, locale: Locale) -> &'static str {
    use ValidationErrorKind::*;

    match (locale, kind) {
        (Locale::English, UnsupportedExtension) => {
            "Only GeoTIFF (.tif/.tiff), PNG (.png) and JPG (.jpg/.jpeg) files are supported"
        }
        (Locale::English, MimeMismatch) => {
            "File type does not match its extension, please check the file"
        }
        (Locale::English, InvalidTiffHeader) => {
            "GeoTIFF file is corrupted or not a standard TIFF, upload refused"
        }
        (Locale::English, InvalidPngHeader) => "PNG file signature is invalid, upload refused",
        (Locale::English, InvalidJpegHeader) => "JPEG file signature is invalid, upload refused",

        (Locale::SimplifiedChinese, UnsupportedExtension) => {
            "仅支持 GeoTIFF (.tif/.tiff)、PNG (.png)、JPG (.jpg/.jpeg) 格式"
        }
        (Locale::SimplifiedChinese, MimeMismatch) => "文件格式与后缀不匹配，请检查文件完整性",
        (Locale::SimplifiedChinese, InvalidTiffHeader) => "GeoTIFF 文件损坏或非标准格式，无法上传",
        (Locale::SimplifiedChinese, InvalidPngHeader) => "PNG 文件头无效，无法上传",
        (Locale::SimplifiedChinese, InvalidJpegHeader) => "JPEG 文件头无效，无法上传",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::SimplifiedChinese);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(GuardError::UnsupportedLocale(ref l)) if l == "fr"
        ));
    }

    #[test]
    fn test_every_kind_has_a_message_per_locale() {
        let kinds = [
            ValidationErrorKind::UnsupportedExtension,
            ValidationErrorKind::MimeMismatch,
            ValidationErrorKind::InvalidTiffHeader,
            ValidationErrorKind::InvalidPngHeader,
            ValidationErrorKind::InvalidJpegHeader,
        ];
        for locale in [Locale::English, Locale::SimplifiedChinese] {
            for kind in kinds {
                assert!(!message(kind, locale).is_empty());
            }
        }
    }
}
