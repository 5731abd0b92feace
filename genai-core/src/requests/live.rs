use serde_json::{Map, Value, json};

use super::{BuiltRequest, required_model, set_opt};
use crate::backend::BackendContext;
use crate::transformers::{coerce_single_content, normalize_live_speech_config, normalize_tools};
use genai_spec::Result;
use genai_spec::types::{LiveConnectConfig, Model, Origin};

const GEMINI_API_LIVE_PATH: &str =
    "ws/google.ai.generativelanguage.v1beta.GenerativeService.BidiGenerateContent";
const VERTEX_AI_LIVE_PATH: &str =
    "ws/google.cloud.aiplatform.v1beta1.LlmBidiService/BidiGenerateContent";

/// Build the first message of a live session.
///
/// On Vertex AI the model is fully qualified with the project and location,
/// since the socket endpoint is not location scoped.
pub fn build_live_setup(
    ctx: &BackendContext,
    model: impl Into<Origin<Model>>,
    config: LiveConnectConfig,
) -> Result<BuiltRequest> {
    let mut model = required_model(ctx, model.into())?;
    if ctx.is_vertex_ai() && !model.starts_with("projects/") {
        model = format!("{}/{model}", ctx.location_path());
    }

    let mut generation = Map::new();
    set_opt(&mut generation, "responseModalities", config.response_modalities)?;
    set_opt(&mut generation, "temperature", config.temperature)?;
    set_opt(
        &mut generation,
        "speechConfig",
        normalize_live_speech_config(config.speech_config)?,
    )?;

    let mut setup = Map::new();
    setup.insert("model".to_string(), Value::String(model));
    if !generation.is_empty() {
        setup.insert("generationConfig".to_string(), Value::Object(generation));
    }
    set_opt(
        &mut setup,
        "systemInstruction",
        coerce_single_content(config.system_instruction)?,
    )?;
    set_opt(&mut setup, "tools", normalize_tools(config.tools)?)?;

    let path = if ctx.is_vertex_ai() {
        VERTEX_AI_LIVE_PATH
    } else {
        GEMINI_API_LIVE_PATH
    };
    Ok(BuiltRequest {
        path: path.to_string(),
        body: json!({ "setup": setup }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformers::MULTI_SPEAKER_LIVE_MESSAGE;

    #[test]
    fn vertex_setup_qualifies_model() {
        let ctx = BackendContext::vertex_ai("p", "us-central1").unwrap();
        let req = build_live_setup(
            &ctx,
            "gemini-2.0-flash-live-preview-04-09",
            LiveConnectConfig::new()
                .with_response_modalities(vec!["AUDIO".to_string()])
                .with_voice("Kore"),
        )
        .unwrap();
        assert_eq!(req.path, VERTEX_AI_LIVE_PATH);
        assert_eq!(
            req.body,
            json!({
                "setup": {
                    "model": "projects/p/locations/us-central1/publishers/google/models/gemini-2.0-flash-live-preview-04-09",
                    "generationConfig": {
                        "responseModalities": ["AUDIO"],
                        "speechConfig": { "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } } }
                    }
                }
            })
        );
    }

    #[test]
    fn gemini_api_setup_uses_plain_model() {
        let req = build_live_setup(
            &BackendContext::gemini_api(),
            "gemini-2.0-flash-live-001",
            LiveConnectConfig::new().with_system_instruction("Be terse."),
        )
        .unwrap();
        assert_eq!(req.path, GEMINI_API_LIVE_PATH);
        assert_eq!(req.body["setup"]["model"], json!("models/gemini-2.0-flash-live-001"));
        assert_eq!(
            req.body["setup"]["systemInstruction"]["parts"][0]["text"],
            json!("Be terse.")
        );
    }

    #[test]
    fn multi_speaker_speech_is_rejected() {
        let config = LiveConnectConfig::new().with_speech_config(json!({
            "multiSpeakerVoiceConfig": { "speakerVoiceConfigs": [{ "speaker": "A" }] }
        }));
        let err = build_live_setup(&BackendContext::gemini_api(), "m", config).unwrap_err();
        assert_eq!(err.to_string(), MULTI_SPEAKER_LIVE_MESSAGE);
    }
}
