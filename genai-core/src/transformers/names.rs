//! Identifier normalization: model names, resource names, file and job names.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::backend::BackendContext;
use genai_spec::types::{File, Model, Origin};
use genai_spec::{GenAiError, Result};

/// Collection identifier of cached content resources.
pub const CACHED_CONTENTS: &str = "cachedContents";

static GEMINI_BATCH_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^batches/[^/]+$").ok());
static VERTEX_BATCH_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^projects/[^/]+/locations/[^/]+/batchPredictionJobs/[^/]+$").ok()
});
static FILE_ID: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[a-z0-9]+").ok());

/// Canonicalize a model identifier for the active backend.
///
/// Absent input (or JSON `null`) yields `Ok(None)`. Already-canonical identifiers
/// are returned unchanged, so the function is idempotent.
pub fn normalize_model(ctx: &BackendContext, origin: Option<Origin<Model>>) -> Result<Option<String>> {
    let Some(model) = model_text(origin)? else {
        return Ok(None);
    };
    if model.is_empty() {
        return Err(GenAiError::InvalidInput("model is required.".to_string()));
    }

    let canonical = canonical_model(ctx, &model);
    if canonical != model {
        tracing::debug!(backend = ?ctx.backend(), model = %model, canonical = %canonical, "normalized model identifier");
    }
    Ok(Some(canonical))
}

/// Canonicalize a model identifier for use by the cached-content endpoints.
///
/// On Vertex AI, `publishers/...` and `models/...` identifiers are re-rooted
/// under `projects/{project}/locations/{location}`; every other shape is left
/// as [`normalize_model`] produced it. The Gemini API applies no re-rooting.
pub fn normalize_caches_model(
    ctx: &BackendContext,
    origin: Option<Origin<Model>>,
) -> Result<Option<String>> {
    let Some(model) = normalize_model(ctx, origin)? else {
        return Ok(None);
    };

    let rerooted = ctx
        .policy()
        .caches_model_roots
        .iter()
        .find(|(prefix, _)| model.starts_with(prefix))
        .map(|(_, inserted)| format!("{}/{inserted}{model}", ctx.location_path()));
    Ok(Some(rerooted.unwrap_or(model)))
}

/// Collection path used to list models.
///
/// | backend    | base models                | tuned models  |
/// |------------|----------------------------|---------------|
/// | Vertex AI  | `publishers/google/models` | `models`      |
/// | Gemini API | `models`                   | `tunedModels` |
pub fn models_collection_path(ctx: &BackendContext, base_models: bool) -> &'static str {
    let policy = ctx.policy();
    if base_models {
        policy.base_models_path
    } else {
        policy.tuned_models_path
    }
}

/// Complete a resource name (cached content, file, ...) for the active backend.
///
/// On Vertex AI the input is checked against `projects/`, `locations/` and
/// `{collection}/` in that order and qualified only as far as needed; on the
/// Gemini API a missing `{collection}/` prefix is added. Idempotent.
pub fn normalize_resource_name(ctx: &BackendContext, name: &str, collection: &str) -> String {
    ctx.apply_resource_rules(name, collection)
}

pub fn normalize_cached_content_name(ctx: &BackendContext, name: &str) -> String {
    normalize_resource_name(ctx, name, CACHED_CONTENTS)
}

/// Extract the bare file id from a file name, `files/{id}` or a download URI.
pub fn normalize_file_name(origin: Option<Origin<File>>) -> Result<Option<String>> {
    let name = match origin {
        None | Some(Origin::Json(Value::Null)) => return Ok(None),
        Some(Origin::Text(name)) | Some(Origin::Json(Value::String(name))) => name,
        Some(Origin::Typed(file)) => file
            .name
            .ok_or_else(|| GenAiError::InvalidInput("File name is required.".to_string()))?,
        Some(other) => return Err(GenAiError::unsupported_type("file", other.shape())),
    };
    if name.is_empty() {
        return Err(GenAiError::InvalidInput("File name is required.".to_string()));
    }

    if name.starts_with("https://") {
        let id = name
            .split_once("files/")
            .and_then(|(_, suffix)| {
                FILE_ID
                    .as_ref()
                    .and_then(|re| re.find(suffix))
                    .map(|m| m.as_str().to_string())
            })
            .ok_or_else(|| {
                GenAiError::InvalidInput(format!("Could not extract file name from URI: {name}"))
            })?;
        return Ok(Some(id));
    }

    match name.strip_prefix("files/") {
        Some(id) => Ok(Some(id.to_string())),
        None => Ok(Some(name)),
    }
}

/// Reduce a batch job resource name to the job id the endpoints expect.
///
/// Gemini API accepts `batches/{id}`; Vertex AI accepts
/// `projects/{p}/locations/{l}/batchPredictionJobs/{id}` or a numeric id.
pub fn normalize_batch_job_name(ctx: &BackendContext, name: &str) -> Result<String> {
    let pattern = if ctx.is_vertex_ai() {
        &VERTEX_BATCH_NAME
    } else {
        &GEMINI_BATCH_NAME
    };

    if pattern.as_ref().is_some_and(|re| re.is_match(name)) {
        return Ok(name.rsplit('/').next().unwrap_or(name).to_string());
    }
    if ctx.is_vertex_ai() && !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(name.to_string());
    }
    Err(GenAiError::InvalidInput(format!(
        "Invalid batch job name: {name}."
    )))
}

fn model_text(origin: Option<Origin<Model>>) -> Result<Option<String>> {
    match origin {
        None | Some(Origin::Json(Value::Null)) => Ok(None),
        Some(Origin::Text(model)) => Ok(Some(model)),
        Some(Origin::Json(Value::String(model))) => Ok(Some(model.replace('"', ""))),
        Some(Origin::Json(scalar @ (Value::Bool(_) | Value::Number(_)))) => {
            Ok(Some(scalar.to_string()))
        }
        Some(other) => Err(GenAiError::unsupported_type("model", other.shape())),
    }
}

fn canonical_model(ctx: &BackendContext, model: &str) -> String {
    let policy = ctx.policy();
    if policy
        .model_passthrough_prefixes
        .iter()
        .any(|prefix| model.starts_with(prefix))
    {
        return model.to_string();
    }
    if policy.expands_publisher_pairs
        && let Some((publisher, name)) = model.split_once('/')
    {
        return format!("publishers/{publisher}/models/{name}");
    }
    format!("{}{model}", policy.bare_model_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gemini() -> BackendContext {
        BackendContext::gemini_api()
    }

    #[test]
    fn identifier_patterns_compile() {
        assert!(GEMINI_BATCH_NAME.is_some());
        assert!(VERTEX_BATCH_NAME.is_some());
        assert!(FILE_ID.is_some());
    }

    fn vertex() -> BackendContext {
        BackendContext::vertex_ai("my-project", "us-central1").unwrap()
    }

    fn model(ctx: &BackendContext, raw: &str) -> String {
        normalize_model(ctx, Some(raw.into())).unwrap().unwrap()
    }

    #[test]
    fn gemini_api_model_shapes() {
        assert_eq!(model(&gemini(), "gemini-2.0-flash"), "models/gemini-2.0-flash");
        assert_eq!(model(&gemini(), "models/gemini-2.0-flash"), "models/gemini-2.0-flash");
        assert_eq!(model(&gemini(), "tunedModels/abc"), "tunedModels/abc");
        assert_eq!(model(&gemini(), "acme/custom"), "models/acme/custom");
    }

    #[test]
    fn vertex_model_shapes() {
        assert_eq!(
            model(&vertex(), "gemini-2.0-flash"),
            "publishers/google/models/gemini-2.0-flash"
        );
        assert_eq!(
            model(&vertex(), "acme/custom-model"),
            "publishers/acme/models/custom-model"
        );
        for canonical in [
            "publishers/google/models/gemini-2.0-flash",
            "projects/p/locations/l/endpoints/123",
            "models/123",
        ] {
            assert_eq!(model(&vertex(), canonical), canonical);
        }
    }

    #[test]
    fn model_accepts_json_scalars() {
        let out = normalize_model(&gemini(), Some(json!("gemini-pro").into())).unwrap();
        assert_eq!(out.as_deref(), Some("models/gemini-pro"));
        let out = normalize_model(&gemini(), Some(json!(42).into())).unwrap();
        assert_eq!(out.as_deref(), Some("models/42"));
    }

    #[test]
    fn model_absent_or_json_null_is_none() {
        assert_eq!(normalize_model(&vertex(), None).unwrap(), None);
        assert_eq!(normalize_model(&vertex(), Some(Value::Null.into())).unwrap(), None);
        assert_eq!(normalize_caches_model(&vertex(), None).unwrap(), None);
    }

    #[test]
    fn model_rejects_empty_and_structured_inputs() {
        let err = normalize_model(&gemini(), Some("".into())).unwrap_err();
        assert_eq!(err.to_string(), "model is required.");

        let err = normalize_model(&gemini(), Some(json!({"name": "x"}).into())).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported model type: json object");

        let err = normalize_model(&gemini(), Some(Model::default().into())).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported model type: Model");
    }

    #[test]
    fn caches_model_reroots_only_publisher_and_models_forms() {
        let ctx = vertex();
        let caches = |raw: &str| normalize_caches_model(&ctx, Some(raw.into())).unwrap().unwrap();
        assert_eq!(
            caches("gemini-2.0-flash"),
            "projects/my-project/locations/us-central1/publishers/google/models/gemini-2.0-flash"
        );
        assert_eq!(
            caches("models/123"),
            "projects/my-project/locations/us-central1/publishers/google/models/123"
        );
        assert_eq!(
            caches("projects/other/locations/eu/publishers/google/models/x"),
            "projects/other/locations/eu/publishers/google/models/x"
        );
    }

    #[test]
    fn caches_model_on_gemini_api_is_plain_model() {
        let out = normalize_caches_model(&gemini(), Some("gemini-2.0-flash".into())).unwrap();
        assert_eq!(out.as_deref(), Some("models/gemini-2.0-flash"));
    }

    #[test]
    fn models_collection_path_table() {
        assert_eq!(models_collection_path(&vertex(), true), "publishers/google/models");
        assert_eq!(models_collection_path(&vertex(), false), "models");
        assert_eq!(models_collection_path(&gemini(), true), "models");
        assert_eq!(models_collection_path(&gemini(), false), "tunedModels");
    }

    #[test]
    fn cached_content_names() {
        assert_eq!(normalize_cached_content_name(&gemini(), "abc"), "cachedContents/abc");
        assert_eq!(
            normalize_cached_content_name(&gemini(), "cachedContents/abc"),
            "cachedContents/abc"
        );
        assert_eq!(
            normalize_cached_content_name(&vertex(), "abc"),
            "projects/my-project/locations/us-central1/cachedContents/abc"
        );
        assert_eq!(
            normalize_cached_content_name(&vertex(), "locations/eu/cachedContents/abc"),
            "projects/my-project/locations/eu/cachedContents/abc"
        );
    }

    #[test]
    fn file_names() {
        let file = |origin: Origin<File>| normalize_file_name(Some(origin)).unwrap().unwrap();
        assert_eq!(file("files/abc123".into()), "abc123");
        assert_eq!(file("abc123".into()), "abc123");
        assert_eq!(
            file("https://generativelanguage.googleapis.com/v1beta/files/abc123:download?alt=media".into()),
            "abc123"
        );
        assert_eq!(
            file(File {
                name: Some("files/xyz".into()),
                ..Default::default()
            }
            .into()),
            "xyz"
        );
        assert_eq!(normalize_file_name(None).unwrap(), None);

        let err = normalize_file_name(Some(File::default().into())).unwrap_err();
        assert_eq!(err.to_string(), "File name is required.");
        let err = normalize_file_name(Some("https://example.com/nothing".into())).unwrap_err();
        assert!(matches!(err, GenAiError::InvalidInput(_)));
    }

    #[test]
    fn batch_job_names() {
        assert_eq!(normalize_batch_job_name(&gemini(), "batches/123abc").unwrap(), "123abc");
        assert!(normalize_batch_job_name(&gemini(), "123abc").is_err());

        assert_eq!(
            normalize_batch_job_name(
                &vertex(),
                "projects/p/locations/us-central1/batchPredictionJobs/456"
            )
            .unwrap(),
            "456"
        );
        assert_eq!(normalize_batch_job_name(&vertex(), "456").unwrap(), "456");
        let err = normalize_batch_job_name(&vertex(), "batches/456").unwrap_err();
        assert_eq!(err.to_string(), "Invalid batch job name: batches/456.");
    }
}
