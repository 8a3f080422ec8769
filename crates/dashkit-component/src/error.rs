//! Error types for component decoding and codec configuration
//!
//! Encoding has no error surface; every failure here comes from reading
//! external input.

/// Errors during envelope decoding
///
/// Decoding is all-or-nothing: any of these means no component was produced.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Input is not an envelope (not JSON, or `metadata.type` missing)
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// No decoder registered for the tag
    #[error("unknown component variant: '{tag}'")]
    UnknownVariant { tag: String },

    /// Payload does not match the variant's shape
    #[error("malformed '{tag}' payload: {source}")]
    MalformedPayload {
        tag: String,
        #[source]
        source: serde_json::Error,
    },

    /// A table cell failed to decode
    #[error("cell '{accessor}' in row {row} failed to decode: {source}")]
    NestedDecodeFailure {
        row: usize,
        accessor: String,
        #[source]
        source: Box<DecodeError>,
    },

    /// A title entry is not title-capable
    #[error("component '{tag}' cannot be used in a title")]
    TitleNotSupported { tag: String },

    /// Nesting deeper than the configured limit
    #[error("component nesting exceeds depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl DecodeError {
    /// Create malformed payload error for tag
    pub fn malformed(tag: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedPayload {
            tag: tag.into(),
            source,
        }
    }

    /// Create nested cell failure
    pub fn nested(row: usize, accessor: impl Into<String>, source: DecodeError) -> Self {
        Self::NestedDecodeFailure {
            row,
            accessor: accessor.into(),
            source: Box::new(source),
        }
    }

    /// Check if the tag was unknown
    #[inline]
    #[must_use]
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant { .. })
    }

    /// Innermost error, unwrapping nested cell failures
    #[must_use]
    pub fn root_cause(&self) -> &DecodeError {
        let mut current = self;
        while let Self::NestedDecodeFailure { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Errors loading codec configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed into the config shape
    #[error("invalid codec config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed values violate a constraint
    #[error("invalid codec config value: {0}")]
    Invalid(String),
}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("\"x\"").unwrap_err()
    }

    #[test]
    fn unknown_variant_display() {
        let err = DecodeError::UnknownVariant {
            tag: "chart".to_string(),
        };
        assert_eq!(err.to_string(), "unknown component variant: 'chart'");
        assert!(err.is_unknown_variant());
    }

    #[test]
    fn nested_display_names_accessor() {
        let err = DecodeError::nested(1, "name", DecodeError::malformed("link", json_error()));
        let message = err.to_string();
        assert!(message.contains("'name'"));
        assert!(message.contains("row 1"));
    }

    #[test]
    fn root_cause_unwraps_nesting() {
        let inner = DecodeError::UnknownVariant {
            tag: "chart".to_string(),
        };
        let err = DecodeError::nested(0, "a", DecodeError::nested(2, "b", inner));
        assert!(err.root_cause().is_unknown_variant());
        assert!(!err.is_unknown_variant());
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Invalid("max_depth must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid codec config value: max_depth must be at least 1"
        );
    }
}
