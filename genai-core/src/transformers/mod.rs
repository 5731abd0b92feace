//! Request normalizers.
//!
//! Each function takes one loosely-shaped caller input and produces the
//! canonical value the active backend expects, or a typed [`GenAiError`].
//! They are pure: no I/O, no shared mutable state.

pub mod contents;
pub mod embed;
pub mod gates;
pub mod jobs;
pub mod media;
pub mod names;
pub mod values;

pub use contents::{coerce_contents, coerce_part, coerce_parts, coerce_single_content};
pub use embed::{EmbedInput, flatten_for_embedding};
pub use gates::{
    MULTI_SPEAKER_LIVE_MESSAGE, ensure_no_multi_speaker, normalize_live_speech_config,
    reject_on_backend,
};
pub use jobs::{extract_models, normalize_job_state};
pub use media::{coerce_audio_blob, coerce_blob, coerce_image_blob};
pub use names::{
    CACHED_CONTENTS, models_collection_path, normalize_batch_job_name, normalize_caches_model,
    normalize_cached_content_name, normalize_file_name, normalize_model, normalize_resource_name,
};
pub use values::{normalize_schema, normalize_speech_config, normalize_tool, normalize_tools};

use serde::de::DeserializeOwned;
use serde_json::Value;

use genai_spec::{GenAiError, Result};

/// Parse a raw JSON fragment against a canonical type.
pub(crate) fn parse_json<T: DeserializeOwned>(target: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| GenAiError::deserialization(target, e))
}
