use serde_json::{Map, Value};

use super::{BuiltRequest, set_opt};
use crate::backend::BackendContext;
use crate::transformers::{
    CACHED_CONTENTS, coerce_contents, coerce_single_content, normalize_caches_model,
    normalize_tools,
};
use genai_spec::types::{CreateCachedContentConfig, Model, Origin};
use genai_spec::{GenAiError, Result};

/// Build a request that creates cached content for `model`.
pub fn build_create_cached_content(
    ctx: &BackendContext,
    model: impl Into<Origin<Model>>,
    config: CreateCachedContentConfig,
) -> Result<BuiltRequest> {
    let model = normalize_caches_model(ctx, Some(model.into()))?
        .ok_or_else(|| GenAiError::InvalidInput("model is required.".to_string()))?;

    let mut body = Map::new();
    body.insert("model".to_string(), Value::String(model));
    set_opt(&mut body, "contents", coerce_contents(config.contents)?)?;
    set_opt(
        &mut body,
        "systemInstruction",
        coerce_single_content(config.system_instruction)?,
    )?;
    set_opt(&mut body, "tools", normalize_tools(config.tools)?)?;
    set_opt(&mut body, "ttl", config.ttl)?;
    set_opt(&mut body, "expireTime", config.expire_time)?;
    set_opt(&mut body, "displayName", config.display_name)?;

    Ok(BuiltRequest {
        path: CACHED_CONTENTS.to_string(),
        body: Value::Object(body),
    })
}
