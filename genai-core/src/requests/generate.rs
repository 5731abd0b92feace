use serde_json::{Map, Value};

use super::{BuiltRequest, required_contents, required_model, set_opt};
use crate::backend::{Backend, BackendContext};
use crate::transformers::{
    coerce_single_content, normalize_cached_content_name, normalize_schema,
    normalize_speech_config, normalize_tools, reject_on_backend,
};
use genai_spec::Result;
use genai_spec::types::{Content, GenerateContentConfig, Model, Origin};

/// Build a `generateContent` request.
pub fn build_generate_content(
    ctx: &BackendContext,
    model: impl Into<Origin<Model>>,
    contents: impl Into<Origin<Content>>,
    config: GenerateContentConfig,
) -> Result<BuiltRequest> {
    let GenerateContentConfig {
        system_instruction,
        tools,
        temperature,
        top_p,
        top_k,
        candidate_count,
        max_output_tokens,
        stop_sequences,
        seed,
        response_mime_type,
        response_schema,
        response_modalities,
        speech_config,
        cached_content,
        labels,
        audio_timestamp,
    } = config;

    reject_on_backend(ctx, Backend::GeminiApi, "labels", labels.is_some())?;
    reject_on_backend(
        ctx,
        Backend::GeminiApi,
        "audio_timestamp",
        audio_timestamp.is_some(),
    )?;

    let model = required_model(ctx, model.into())?;
    let contents = required_contents(contents.into())?;

    let mut generation = Map::new();
    set_opt(&mut generation, "temperature", temperature)?;
    set_opt(&mut generation, "topP", top_p)?;
    set_opt(&mut generation, "topK", top_k)?;
    set_opt(&mut generation, "candidateCount", candidate_count)?;
    set_opt(&mut generation, "maxOutputTokens", max_output_tokens)?;
    set_opt(&mut generation, "stopSequences", stop_sequences)?;
    set_opt(&mut generation, "seed", seed)?;
    set_opt(&mut generation, "responseMimeType", response_mime_type)?;
    set_opt(&mut generation, "responseSchema", normalize_schema(response_schema)?)?;
    set_opt(&mut generation, "responseModalities", response_modalities)?;
    set_opt(&mut generation, "speechConfig", normalize_speech_config(speech_config)?)?;
    set_opt(&mut generation, "audioTimestamp", audio_timestamp)?;

    let mut body = Map::new();
    body.insert("contents".to_string(), serde_json::to_value(contents)?);
    set_opt(&mut body, "systemInstruction", coerce_single_content(system_instruction)?)?;
    set_opt(&mut body, "tools", normalize_tools(tools)?)?;
    if !generation.is_empty() {
        body.insert("generationConfig".to_string(), Value::Object(generation));
    }
    set_opt(
        &mut body,
        "cachedContent",
        cached_content.map(|name| normalize_cached_content_name(ctx, &name)),
    )?;
    set_opt(&mut body, "labels", labels)?;

    let path = format!("{model}:generateContent");
    tracing::debug!(backend = ?ctx.backend(), path = %path, "built generateContent request");
    Ok(BuiltRequest {
        path,
        body: Value::Object(body),
    })
}
