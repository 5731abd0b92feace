//! Message and part coercion.

use serde_json::Value;

use super::parse_json;
use genai_spec::types::{Content, Origin, Part, json_kind};
use genai_spec::{GenAiError, Result};

/// Coerce caller input into an ordered list of messages.
///
/// Text becomes a single user message with one text part. A JSON object is
/// parsed as one message and a JSON array as a list of messages.
pub fn coerce_contents(origin: Option<Origin<Content>>) -> Result<Option<Vec<Content>>> {
    let contents = match origin {
        None | Some(Origin::Json(Value::Null)) => return Ok(None),
        Some(Origin::Text(text)) | Some(Origin::Json(Value::String(text))) => {
            vec![Content::user_text(text)]
        }
        Some(Origin::Typed(content)) => vec![content],
        Some(Origin::List(contents)) => contents,
        Some(Origin::Json(object @ Value::Object(_))) => vec![parse_json("contents", object)?],
        Some(Origin::Json(array @ Value::Array(_))) => parse_json("contents", array)?,
        Some(other) => return Err(GenAiError::unsupported_type("contents", other.shape())),
    };
    Ok(Some(contents))
}

/// Coerce caller input into exactly one message, e.g. a system instruction.
pub fn coerce_single_content(origin: Option<Origin<Content>>) -> Result<Option<Content>> {
    let content = match origin {
        None | Some(Origin::Json(Value::Null)) => return Ok(None),
        Some(Origin::Text(text)) | Some(Origin::Json(Value::String(text))) => {
            Content::user_text(text)
        }
        Some(Origin::Typed(content)) => content,
        Some(Origin::Json(object @ Value::Object(_))) => parse_json("content", object)?,
        Some(other) => return Err(GenAiError::unsupported_type("content", other.shape())),
    };
    Ok(Some(content))
}

pub fn coerce_part(origin: Option<Origin<Part>>) -> Result<Option<Part>> {
    let part = match origin {
        None | Some(Origin::Json(Value::Null)) => return Ok(None),
        Some(Origin::Text(text)) | Some(Origin::Json(Value::String(text))) => Part::text(text),
        Some(Origin::Typed(part)) => part,
        Some(Origin::Json(object @ Value::Object(_))) => parse_json("part", object)?,
        Some(other) => return Err(GenAiError::unsupported_type("part", other.shape())),
    };
    Ok(Some(part))
}

/// Coerce caller input into a list of parts. Each element of a JSON array is
/// coerced on its own, so strings and part objects may be mixed.
pub fn coerce_parts(origin: Option<Origin<Part>>) -> Result<Option<Vec<Part>>> {
    let parts = match origin {
        None | Some(Origin::Json(Value::Null)) => return Ok(None),
        Some(Origin::Text(text)) => vec![Part::text(text)],
        Some(Origin::Typed(part)) => vec![part],
        Some(Origin::List(parts)) => parts,
        Some(Origin::Json(Value::Array(items))) => items
            .into_iter()
            .map(json_part)
            .collect::<Result<Vec<_>>>()?,
        Some(Origin::Json(item @ (Value::String(_) | Value::Object(_)))) => vec![json_part(item)?],
        Some(other) => return Err(GenAiError::unsupported_type("parts", other.shape())),
    };
    Ok(Some(parts))
}

fn json_part(item: Value) -> Result<Part> {
    match item {
        Value::String(text) => Ok(Part::text(text)),
        object @ Value::Object(_) => parse_json("part", object),
        other => Err(GenAiError::unsupported_type(
            "part",
            format!("json {}", json_kind(&other)),
        )),
    }
}
