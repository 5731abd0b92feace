use serde_json::{Map, Value, json};

use super::{BuiltRequest, required_contents, required_model, set_opt};
use crate::backend::{Backend, BackendContext};
use crate::transformers::{flatten_for_embedding, reject_on_backend};
use genai_spec::Result;
use genai_spec::types::{Content, EmbedContentConfig, Model, Origin};

/// Build an embedding request.
///
/// - Gemini API: `{model}:batchEmbedContents`, one `requests[]` entry per message
/// - Vertex AI: `{model}:predict`, one `instances[]` entry per text part
pub fn build_embed_content(
    ctx: &BackendContext,
    model: impl Into<Origin<Model>>,
    contents: impl Into<Origin<Content>>,
    config: EmbedContentConfig,
) -> Result<BuiltRequest> {
    reject_on_backend(ctx, Backend::GeminiApi, "mime_type", config.mime_type.is_some())?;
    reject_on_backend(
        ctx,
        Backend::GeminiApi,
        "auto_truncate",
        config.auto_truncate.is_some(),
    )?;

    let model = required_model(ctx, model.into())?;
    let contents = required_contents(contents.into())?;
    let inputs = flatten_for_embedding(ctx, Some(&contents[..])).unwrap_or_default();

    let (path, body) = if ctx.is_vertex_ai() {
        let mut instances = Vec::with_capacity(inputs.len());
        for input in inputs {
            let mut obj = Map::new();
            obj.insert("content".to_string(), serde_json::to_value(input)?);
            set_opt(&mut obj, "task_type", config.task_type.as_deref())?;
            set_opt(&mut obj, "title", config.title.as_deref())?;
            instances.push(Value::Object(obj));
        }

        let mut params = Map::new();
        set_opt(&mut params, "outputDimensionality", config.output_dimensionality)?;
        set_opt(&mut params, "mimeType", config.mime_type.as_deref())?;
        set_opt(&mut params, "autoTruncate", config.auto_truncate)?;

        (
            format!("{model}:predict"),
            json!({ "instances": instances, "parameters": params }),
        )
    } else {
        let mut requests = Vec::with_capacity(inputs.len());
        for input in inputs {
            let mut obj = Map::new();
            obj.insert("model".to_string(), json!(model));
            obj.insert("content".to_string(), serde_json::to_value(input)?);
            set_opt(&mut obj, "taskType", config.task_type.as_deref())?;
            set_opt(&mut obj, "title", config.title.as_deref())?;
            set_opt(&mut obj, "outputDimensionality", config.output_dimensionality)?;
            requests.push(Value::Object(obj));
        }
        (
            format!("{model}:batchEmbedContents"),
            json!({ "requests": requests }),
        )
    };

    tracing::debug!(backend = ?ctx.backend(), path = %path, "built embedding request");
    Ok(BuiltRequest { path, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_api_batches_messages() {
        let req = build_embed_content(
            &BackendContext::gemini_api(),
            "text-embedding-004",
            "What is life?",
            EmbedContentConfig::new().with_task_type("RETRIEVAL_QUERY"),
        )
        .unwrap();
        assert_eq!(req.path, "models/text-embedding-004:batchEmbedContents");
        assert_eq!(
            req.body,
            json!({
                "requests": [{
                    "model": "models/text-embedding-004",
                    "content": { "role": "user", "parts": [{ "text": "What is life?" }] },
                    "taskType": "RETRIEVAL_QUERY"
                }]
            })
        );
    }

    #[test]
    fn vertex_predicts_on_flattened_text() {
        let ctx = BackendContext::vertex_ai("p", "us-central1").unwrap();
        let req = build_embed_content(
            &ctx,
            "text-embedding-004",
            vec![Content::user_text("a"), Content::user_text("b")],
            EmbedContentConfig::new()
                .with_output_dimensionality(256)
                .with_auto_truncate(false),
        )
        .unwrap();
        assert_eq!(
            req.path,
            "publishers/google/models/text-embedding-004:predict"
        );
        assert_eq!(
            req.body,
            json!({
                "instances": [{ "content": "a" }, { "content": "b" }],
                "parameters": { "outputDimensionality": 256, "autoTruncate": false }
            })
        );
    }

    #[test]
    fn vertex_only_parameters_are_rejected_on_gemini_api() {
        let err = build_embed_content(
            &BackendContext::gemini_api(),
            "text-embedding-004",
            "x",
            EmbedContentConfig::new().with_auto_truncate(true),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "auto_truncate parameter is not supported in Gemini API."
        );
    }
}
