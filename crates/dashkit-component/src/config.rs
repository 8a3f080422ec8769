//! Codec configuration

use serde::Deserialize;

use crate::error::ConfigError;

/// Codec options
///
/// Loadable from TOML; missing keys take their defaults.
///
/// ```
/// # use dashkit_component::CodecConfig;
/// let config = CodecConfig::from_toml_str("max_depth = 8").unwrap();
/// assert_eq!(config.max_depth, 8);
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Maximum component nesting accepted on decode (top level counts as 1)
    pub max_depth: usize,
    /// Pretty-print encoded documents
    pub pretty: bool,
}

impl CodecConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With max nesting depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With pretty-printed output
    #[inline]
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Parse from TOML and validate
    ///
    /// # Errors
    /// Returns error if TOML is invalid or a value is out of range
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value constraints
    ///
    /// # Errors
    /// Returns error if `max_depth` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            pretty: false,
        }
    }
}
