//! Type Conversions for GenAiError
//!
//! From trait implementations for converting common error types into GenAiError.

use super::types::GenAiError;

impl From<serde_json::Error> for GenAiError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GenAiError = json_err.into();
        assert!(matches!(err, GenAiError::JsonError(_)));
        assert!(!err.is_retryable());
    }
}
