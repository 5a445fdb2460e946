//! Validator configuration
//!
//! Settings can come from defaults, a TOML file, or CLI overrides.
//!
//! ```toml
//! strict_signatures = true
//! locale = "zh-CN"
//! ```

use std::fs;

use log::debug;

use crate::validation::errors::{GuardError, GuardResult};
use crate::validation::messages::Locale;

/// Settings that shape how files are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorConfig {
    /// Also verify PNG and JPEG leading bytes
    pub strict_signatures: bool,
    /// Language of rejection messages
    pub locale: Locale,
}

impl ValidatorConfig {
    /// Parse a configuration from a TOML string
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    pub fn from_str(content: &str) -> GuardResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GuardError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = ValidatorConfig::default();

        if let Some(value) = toml_value.get("strict_signatures") {
            config.strict_signatures = value.as_bool().ok_or_else(|| {
                GuardError::ConfigError("'strict_signatures' must be a boolean".to_string())
            })?;
        }

        if let Some(value) = toml_value.get("locale") {
            let tag = value
                .as_str()
                .ok_or_else(|| GuardError::ConfigError("'locale' must be a string".to_string()))?;
            config.locale = tag.parse()?;
        }

        debug!("Parsed validator config: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GuardResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    pub fn with_strict_signatures(mut self, strict: bool) -> Self {
        self.strict_signatures = strict;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
