use thiserror::Error;

/// Result type used across the genai crates.
pub type Result<T> = std::result::Result<T, GenAiError>;

/// Coarse classification of a [`GenAiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller handed over a value of the wrong shape or content.
    Input,
    /// A structurally valid value is disallowed by backend or calling-mode policy.
    Capability,
    /// The client configuration is incomplete or inconsistent.
    Configuration,
}

/// Errors raised while normalizing caller input into canonical request shapes.
///
/// Several messages are surfaced verbatim to end users, so their text is part of
/// the public contract (see `Capability` and `UnsupportedMimeType`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenAiError {
    /// The input is of a shape the normalizer does not accept.
    #[error("Unsupported {field} type: {shape}")]
    UnsupportedType { field: &'static str, shape: String },

    /// A raw JSON input does not match the target canonical schema.
    #[error("Failed to parse {target}: {message}")]
    Deserialization {
        target: &'static str,
        message: String,
    },

    /// A backend or calling-mode gate rejected the value. The message is fixed.
    #[error("{0}")]
    Capability(String),

    /// A blob carries the wrong media type class for the requested acceptor.
    #[error("Unsupported mime type: {0}")]
    UnsupportedMimeType(String),

    /// The input value is of an accepted shape but its content is invalid.
    #[error("{0}")]
    InvalidInput(String),

    /// Client configuration error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// JSON (de)serialization failure outside of a typed parse.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl GenAiError {
    /// Build an unsupported-shape error for `field`.
    pub fn unsupported_type(field: &'static str, shape: impl Into<String>) -> Self {
        Self::UnsupportedType {
            field,
            shape: shape.into(),
        }
    }

    /// Build a schema-violation error for `target` from a serde diagnostic.
    pub fn deserialization(target: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Deserialization {
            target,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Capability(_) => ErrorCategory::Capability,
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::UnsupportedType { .. }
            | Self::Deserialization { .. }
            | Self::UnsupportedMimeType(_)
            | Self::InvalidInput(_)
            | Self::JsonError(_) => ErrorCategory::Input,
        }
    }

    /// Normalization failures are deterministic; retrying would fail identically.
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_names_field_and_shape() {
        let err = GenAiError::unsupported_type("contents", "number");
        assert_eq!(err.to_string(), "Unsupported contents type: number");
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn capability_message_is_verbatim() {
        let err = GenAiError::Capability("labels parameter is not supported in Gemini API.".into());
        assert_eq!(
            err.to_string(),
            "labels parameter is not supported in Gemini API."
        );
        assert_eq!(err.category(), ErrorCategory::Capability);
    }

    #[test]
    fn mime_type_message_includes_actual_type() {
        let err = GenAiError::UnsupportedMimeType("audio/mpeg".into());
        assert_eq!(err.to_string(), "Unsupported mime type: audio/mpeg");
    }
}
