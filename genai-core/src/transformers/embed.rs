//! Embedding input flattening.

use serde::Serialize;

use crate::backend::{BackendContext, EmbedShape};
use genai_spec::types::Content;

/// One embedding input as sent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EmbedInput {
    Content(Content),
    Text(String),
}

impl EmbedInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Content(_) => None,
        }
    }
}

/// Shape already-coerced messages for the active backend's embedding endpoint.
///
/// The Gemini API takes the messages as they are. Vertex AI takes the text of
/// every text part, in order; parts without text are skipped.
pub fn flatten_for_embedding(
    ctx: &BackendContext,
    contents: Option<&[Content]>,
) -> Option<Vec<EmbedInput>> {
    let contents = contents?;
    let inputs = match ctx.policy().embed_shape {
        EmbedShape::Contents => contents.iter().cloned().map(EmbedInput::Content).collect(),
        EmbedShape::Texts => contents
            .iter()
            .flat_map(Content::texts)
            .map(|text| EmbedInput::Text(text.to_string()))
            .collect(),
    };
    Some(inputs)
}
