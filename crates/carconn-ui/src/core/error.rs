//! Error types for the DOM-free behavior core.

use thiserror::Error;

/// Primary error type for behavior-layer operations.
#[derive(Debug, Error)]
pub enum UiError {
    /// Timestamp text did not match any accepted date-time form.
    #[error("unparseable timestamp")]
    TimestampParse {
        /// Raw text that failed to parse.
        input: String,
    },
    /// Theme name was neither `light` nor `dark`.
    #[error("invalid theme name")]
    InvalidTheme {
        /// Theme payload provided by the caller.
        value: String,
    },
    /// Behavior configuration override was rejected.
    #[error("invalid behavior configuration: {reason}")]
    Config {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Configuration JSON could not be decoded.
    #[error("configuration payload is not valid JSON")]
    ConfigDecode {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// Timestamp marker pattern failed to compile.
    #[error("timestamp marker pattern failed to compile")]
    Pattern {
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Convenience alias for behavior-layer results.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::UiError;
    use std::error::Error;

    #[test]
    fn config_error_mentions_reason() {
        let err = UiError::Config {
            field: "reveal.threshold",
            reason: "out_of_range",
        };
        assert_eq!(
            err.to_string(),
            "invalid behavior configuration: out_of_range"
        );
    }

    #[test]
    fn decode_error_exposes_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = UiError::ConfigDecode { source };
        assert!(err.source().is_some());
    }
}
