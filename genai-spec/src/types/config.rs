//! Per-call configuration records.
//!
//! Fields that callers commonly pass in several shapes (text, typed value or raw
//! JSON) are held as [`Origin`]s and resolved by the normalizers when the request
//! is built.

use std::collections::BTreeMap;

use super::{Content, Origin, Schema, SpeechConfig, Tool};

/// Optional parameters for a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateContentConfig {
    pub system_instruction: Option<Origin<Content>>,
    pub tools: Option<Origin<Tool>>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<i32>,
    pub candidate_count: Option<i32>,
    pub max_output_tokens: Option<i32>,
    pub stop_sequences: Option<Vec<String>>,
    pub seed: Option<i32>,
    pub response_mime_type: Option<String>,
    pub response_schema: Option<Origin<Schema>>,
    pub response_modalities: Option<Vec<String>>,
    pub speech_config: Option<Origin<SpeechConfig>>,
    /// Name of cached content to use as context (`cachedContents/...`).
    pub cached_content: Option<String>,
    /// User labels; Vertex AI only.
    pub labels: Option<BTreeMap<String, String>>,
    /// Audio timestamp understanding; Vertex AI only.
    pub audio_timestamp: Option<bool>,
}

impl GenerateContentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<Origin<Content>>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_tools(mut self, tools: impl Into<Origin<Tool>>) -> Self {
        self.tools = Some(tools.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max: i32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    pub fn with_response_schema(mut self, schema: impl Into<Origin<Schema>>) -> Self {
        self.response_mime_type
            .get_or_insert_with(|| "application/json".to_string());
        self.response_schema = Some(schema.into());
        self
    }

    pub fn with_speech_config(mut self, speech: impl Into<Origin<SpeechConfig>>) -> Self {
        self.speech_config = Some(speech.into());
        self
    }

    /// Speak with the named prebuilt voice.
    pub fn with_voice(self, voice_name: impl Into<String>) -> Self {
        self.with_speech_config(SpeechConfig::prebuilt_voice(voice_name))
    }

    pub fn with_cached_content(mut self, name: impl Into<String>) -> Self {
        self.cached_content = Some(name.into());
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Optional parameters for an embedding call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbedContentConfig {
    /// e.g. `RETRIEVAL_QUERY`, `SEMANTIC_SIMILARITY`.
    pub task_type: Option<String>,
    pub title: Option<String>,
    pub output_dimensionality: Option<i32>,
    /// Vertex AI only.
    pub mime_type: Option<String>,
    /// Vertex AI only.
    pub auto_truncate: Option<bool>,
}

impl EmbedContentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub const fn with_output_dimensionality(mut self, dims: i32) -> Self {
        self.output_dimensionality = Some(dims);
        self
    }

    pub const fn with_auto_truncate(mut self, auto_truncate: bool) -> Self {
        self.auto_truncate = Some(auto_truncate);
        self
    }
}

/// Optional parameters for creating cached content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateCachedContentConfig {
    pub contents: Option<Origin<Content>>,
    pub system_instruction: Option<Origin<Content>>,
    pub tools: Option<Origin<Tool>>,
    /// Duration string such as `3600s`.
    pub ttl: Option<String>,
    /// RFC 3339 timestamp.
    pub expire_time: Option<String>,
    pub display_name: Option<String>,
}

impl CreateCachedContentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(mut self, contents: impl Into<Origin<Content>>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<Origin<Content>>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Session configuration for the live (realtime) API.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiveConnectConfig {
    pub response_modalities: Option<Vec<String>>,
    pub temperature: Option<f64>,
    pub speech_config: Option<Origin<SpeechConfig>>,
    pub system_instruction: Option<Origin<Content>>,
    pub tools: Option<Origin<Tool>>,
}

impl LiveConnectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response_modalities(mut self, modalities: Vec<String>) -> Self {
        self.response_modalities = Some(modalities);
        self
    }

    pub fn with_speech_config(mut self, speech: impl Into<Origin<SpeechConfig>>) -> Self {
        self.speech_config = Some(speech.into());
        self
    }

    /// Speak with the named prebuilt voice.
    pub fn with_voice(self, voice_name: impl Into<String>) -> Self {
        self.with_speech_config(SpeechConfig::prebuilt_voice(voice_name))
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<Origin<Content>>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }
}
