//! # Form Configuration
//!
//! Tunables for the order form, loaded from TOML. Every key is optional and
//! falls back to the stock form's behavior:
//!
//! ```toml
//! min_name_len = 3
//! max_name_len = 20
//! success_message = "Thank you for your order!"
//! failure_message = "Something went wrong"
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Default minimum full name length
pub const DEFAULT_MIN_NAME_LEN: usize = 3;
/// Default maximum full name length
pub const DEFAULT_MAX_NAME_LEN: usize = 20;
/// Default banner text after a valid submit
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your order!";
/// Default banner text after an invalid submit
pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong";

/// Configuration loading errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML document could not be parsed
    #[error("failed to parse form config: {0}")]
    Parse(String),

    /// Name length bounds are unusable
    #[error("invalid name length bounds: min {min}, max {max}")]
    InvalidBounds {
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Order form configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Shortest accepted full name, in UTF-16 code units
    pub min_name_len: usize,
    /// Longest accepted full name, in UTF-16 code units
    pub max_name_len: usize,
    /// Banner text after a valid submit
    pub success_message: String,
    /// Banner text after an invalid submit
    pub failure_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_name_len: DEFAULT_MIN_NAME_LEN,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    /// Parse and check a TOML configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Check that the name bounds describe a non-empty range starting at 1 or more.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.min_name_len == 0 || self.min_name_len > self.max_name_len {
            return Err(ConfigError::InvalidBounds {
                min: self.min_name_len,
                max: self.max_name_len,
            });
        }
        Ok(())
    }
}
