//! Job state mapping and list-response extraction.

use serde_json::Value;

use super::parse_json;
use genai_spec::Result;
use genai_spec::types::Model;

/// Keys under which a models list response carries its entries, in lookup order.
const MODEL_LIST_KEYS: [&str; 3] = ["models", "tunedModels", "publisherModels"];
/// Keys the HTTP layer may attach to any response.
const TRANSPORT_KEYS: [&str; 2] = ["sdkHttpResponse", "httpHeaders"];

/// Map a Gemini API batch state onto the shared `JOB_STATE_*` vocabulary.
pub fn normalize_job_state(state: &str) -> String {
    let mapped = match state {
        "BATCH_STATE_UNSPECIFIED" => "JOB_STATE_UNSPECIFIED",
        "BATCH_STATE_PENDING" => "JOB_STATE_PENDING",
        "BATCH_STATE_RUNNING" => "JOB_STATE_RUNNING",
        "BATCH_STATE_SUCCEEDED" => "JOB_STATE_SUCCEEDED",
        "BATCH_STATE_FAILED" => "JOB_STATE_FAILED",
        "BATCH_STATE_CANCELLED" => "JOB_STATE_CANCELLED",
        "BATCH_STATE_EXPIRED" => "JOB_STATE_EXPIRED",
        other => other,
    };
    mapped.to_string()
}

/// Pull the model entries out of a models list response.
///
/// Whichever of `models`, `tunedModels` and `publisherModels` is present first
/// is used. A response without any of them yields an empty list.
pub fn extract_models(response: &Value) -> Result<Vec<Model>> {
    if let Some(entries) = MODEL_LIST_KEYS.iter().find_map(|key| response.get(key)) {
        return parse_json("models", entries.clone());
    }

    let transport_only = response
        .as_object()
        .is_some_and(|obj| obj.keys().all(|k| TRANSPORT_KEYS.contains(&k.as_str())));
    if !transport_only {
        tracing::warn!(response = %response, "Cannot determine the models type");
    }
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[test]
    fn batch_states_map_to_job_states() {
        assert_eq!(normalize_job_state("BATCH_STATE_SUCCEEDED"), "JOB_STATE_SUCCEEDED");
        assert_eq!(normalize_job_state("BATCH_STATE_EXPIRED"), "JOB_STATE_EXPIRED");
        assert_eq!(normalize_job_state("JOB_STATE_RUNNING"), "JOB_STATE_RUNNING");
        assert_eq!(normalize_job_state("SOMETHING_NEW"), "SOMETHING_NEW");
    }

    #[test]
    fn extracts_first_present_list() {
        let models = extract_models(&json!({
            "models": [
                { "name": "models/gemini-2.0-flash", "supportedGenerationMethods": ["generateContent"] }
            ],
            "nextPageToken": "abc"
        }))
        .unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name.as_deref(), Some("models/gemini-2.0-flash"));
        assert_eq!(
            models[0].actions(),
            Some(&["generateContent".to_string()][..])
        );

        let both = extract_models(&json!({
            "models": [{
                "name": "models/m",
                "supportedActions": ["predict"],
                "supportedGenerationMethods": ["generateContent"]
            }]
        }))
        .unwrap();
        assert_eq!(both[0].actions(), Some(&["predict".to_string()][..]));

        let tuned = extract_models(&json!({ "tunedModels": [{ "name": "tunedModels/x" }] })).unwrap();
        assert_eq!(tuned[0].name.as_deref(), Some("tunedModels/x"));

        let publisher =
            extract_models(&json!({ "publisherModels": [{ "name": "publishers/google/models/y" }] }))
                .unwrap();
        assert_eq!(publisher.len(), 1);
    }

    #[test]
    #[traced_test]
    fn transport_only_response_is_silently_empty() {
        let models = extract_models(&json!({ "sdkHttpResponse": { "headers": {} } })).unwrap();
        assert!(models.is_empty());
        assert!(!logs_contain("Cannot determine the models type"));
    }

    #[test]
    #[traced_test]
    fn unknown_response_shape_warns() {
        let models = extract_models(&json!({ "items": [] })).unwrap();
        assert!(models.is_empty());
        assert!(logs_contain("Cannot determine the models type"));
    }

    #[test]
    fn malformed_entries_fail_to_parse() {
        let err = extract_models(&json!({ "models": "nope" })).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse models"));
    }
}
