//! Request builders.
//!
//! Each builder composes the normalizers and gates for one endpoint and returns
//! the endpoint path (relative to the backend base URL) with its JSON body.
//! Nothing is sent; the transport layer owns the base URL and authentication.

mod caches;
mod embed;
mod generate;
mod live;

pub use caches::build_create_cached_content;
pub use embed::build_embed_content;
pub use generate::build_generate_content;
pub use live::build_live_setup;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::backend::BackendContext;
use crate::transformers::{coerce_contents, models_collection_path, normalize_model};
use genai_spec::types::{Content, Model, Origin};
use genai_spec::{GenAiError, Result};

/// An endpoint path and its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRequest {
    pub path: String,
    pub body: Value,
}

/// Collection path for listing base or tuned models.
pub fn build_list_models_path(ctx: &BackendContext, base_models: bool) -> String {
    models_collection_path(ctx, base_models).to_string()
}

pub(crate) fn required_model(ctx: &BackendContext, model: Origin<Model>) -> Result<String> {
    normalize_model(ctx, Some(model))?
        .ok_or_else(|| GenAiError::InvalidInput("model is required.".to_string()))
}

pub(crate) fn required_contents(contents: Origin<Content>) -> Result<Vec<Content>> {
    coerce_contents(Some(contents))?
        .ok_or_else(|| GenAiError::InvalidInput("contents are required.".to_string()))
}

/// Insert `value` under `key` when present.
pub(crate) fn set_opt<T: Serialize>(
    obj: &mut Map<String, Value>,
    key: &str,
    value: Option<T>,
) -> Result<()> {
    if let Some(value) = value {
        obj.insert(key.to_string(), serde_json::to_value(value)?);
    }
    Ok(())
}
