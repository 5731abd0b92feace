//! Capability gates.
//!
//! A gate runs after normalization and rejects a structurally valid value that
//! the active backend or calling mode does not allow. Messages are fixed and
//! surfaced to end users unchanged.

use super::values::normalize_speech_config;
use crate::backend::{Backend, BackendContext};
use genai_spec::types::{Origin, SpeechConfig};
use genai_spec::{GenAiError, Result};

pub const MULTI_SPEAKER_LIVE_MESSAGE: &str =
    "multiSpeakerVoiceConfig is not supported in the live API.";

/// Resolve a speech configuration for a live session.
///
/// Multi-speaker output is rejected whatever shape the input arrived in.
pub fn normalize_live_speech_config(
    origin: Option<Origin<SpeechConfig>>,
) -> Result<Option<SpeechConfig>> {
    let speech = normalize_speech_config(origin)?;
    if let Some(speech) = &speech {
        ensure_no_multi_speaker(speech)?;
    }
    Ok(speech)
}

pub fn ensure_no_multi_speaker(speech: &SpeechConfig) -> Result<()> {
    if speech.multi_speaker_voice_config.is_some() {
        tracing::debug!(gate = "live_speech", "rejected multi-speaker speech config");
        return Err(GenAiError::Capability(MULTI_SPEAKER_LIVE_MESSAGE.to_string()));
    }
    Ok(())
}

/// Reject `parameter` when it is set and `backend` is the active backend.
pub fn reject_on_backend(
    ctx: &BackendContext,
    backend: Backend,
    parameter: &str,
    present: bool,
) -> Result<()> {
    if present && ctx.backend() == backend {
        tracing::debug!(backend = ?backend, parameter, "rejected unsupported parameter");
        return Err(GenAiError::Capability(format!(
            "{parameter} parameter is not supported in {}.",
            backend.display_name()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use genai_spec::types::{MultiSpeakerVoiceConfig, SpeakerVoiceConfig, VoiceConfig};
    use serde_json::json;
    use tracing_test::traced_test;

    fn multi_speaker() -> SpeechConfig {
        SpeechConfig {
            multi_speaker_voice_config: Some(MultiSpeakerVoiceConfig {
                speaker_voice_configs: vec![SpeakerVoiceConfig {
                    speaker: "Joe".into(),
                    voice_config: Some(VoiceConfig::prebuilt("Kore")),
                }],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn single_voice_passes() {
        let out = normalize_live_speech_config(Some(SpeechConfig::prebuilt_voice("Kore").into()))
            .unwrap();
        assert_eq!(out, Some(SpeechConfig::prebuilt_voice("Kore")));
        assert_eq!(normalize_live_speech_config(None).unwrap(), None);
    }

    #[test]
    fn bare_voice_name_is_not_a_speech_config() {
        let err = normalize_live_speech_config(Some("Kore".into())).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported speech config type: string");
    }

    #[test]
    #[traced_test]
    fn multi_speaker_is_rejected_and_logged() {
        let err = normalize_live_speech_config(Some(multi_speaker().into())).unwrap_err();
        assert_eq!(err.to_string(), MULTI_SPEAKER_LIVE_MESSAGE);
        assert!(logs_contain("rejected multi-speaker speech config"));

        let err = normalize_live_speech_config(Some(
            json!({ "multiSpeakerVoiceConfig": { "speakerVoiceConfigs": [] } }).into(),
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), MULTI_SPEAKER_LIVE_MESSAGE);
    }

    #[test]
    fn backend_gate_only_fires_on_matching_backend_with_value() {
        let gemini = BackendContext::gemini_api();
        let err = reject_on_backend(&gemini, Backend::GeminiApi, "labels", true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "labels parameter is not supported in Gemini API."
        );
        assert!(reject_on_backend(&gemini, Backend::GeminiApi, "labels", false).is_ok());
        assert!(reject_on_backend(&gemini, Backend::VertexAi, "labels", true).is_ok());

        let vertex = BackendContext::vertex_ai("p", "l").unwrap();
        let err = reject_on_backend(&vertex, Backend::VertexAi, "mime_type", true).unwrap_err();
        assert_eq!(err.to_string(), "mime_type parameter is not supported in Vertex AI.");
    }
}
