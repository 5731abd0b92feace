//! Media blob coercion with MIME class enforcement.

use serde_json::Value;

use super::parse_json;
use genai_spec::types::{Blob, Origin};
use genai_spec::{GenAiError, Result};

const IMAGE_PREFIX: &str = "image/";
const AUDIO_PREFIX: &str = "audio/";

pub fn coerce_blob(origin: Option<Origin<Blob>>) -> Result<Option<Blob>> {
    match origin {
        None | Some(Origin::Json(Value::Null)) => Ok(None),
        Some(Origin::Typed(blob)) => Ok(Some(blob)),
        Some(Origin::Json(object @ Value::Object(_))) => parse_json("blob", object).map(Some),
        Some(other) => Err(GenAiError::unsupported_type("blob", other.shape())),
    }
}

/// Accept a blob only if its media type is `image/*`.
pub fn coerce_image_blob(origin: Option<Origin<Blob>>) -> Result<Option<Blob>> {
    coerce_blob(origin)?.map(|b| require_class(b, IMAGE_PREFIX)).transpose()
}

/// Accept a blob only if its media type is `audio/*`.
pub fn coerce_audio_blob(origin: Option<Origin<Blob>>) -> Result<Option<Blob>> {
    coerce_blob(origin)?.map(|b| require_class(b, AUDIO_PREFIX)).transpose()
}

fn require_class(blob: Blob, prefix: &str) -> Result<Blob> {
    if blob
        .mime_type
        .as_deref()
        .is_some_and(|mime| mime.starts_with(prefix))
    {
        return Ok(blob);
    }
    Err(GenAiError::UnsupportedMimeType(
        blob.mime_type.unwrap_or_else(|| "null".to_string()),
    ))
}
