//! Client configuration.
//!
//! Resolves which backend is active and its addressing parameters, from explicit
//! builder values first and the process environment second:
//!
//! - `GOOGLE_GENAI_USE_VERTEXAI` (`true` / `1`) selects Vertex AI
//! - `GOOGLE_API_KEY`, then `GEMINI_API_KEY`
//! - `GOOGLE_CLOUD_PROJECT`, `GOOGLE_CLOUD_LOCATION`

use secrecy::{ExposeSecret, SecretString};

use crate::backend::{Backend, BackendContext};
use genai_spec::{GenAiError, Result};

pub const ENV_USE_VERTEXAI: &str = "GOOGLE_GENAI_USE_VERTEXAI";
pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
pub const ENV_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";

/// Location used on Vertex AI when none is configured.
pub const DEFAULT_VERTEX_LOCATION: &str = "global";

/// Client configuration shared by every call made through one client.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// API key (securely stored)
    pub api_key: Option<SecretString>,
    /// Explicit backend selection; `None` defers to the environment.
    pub vertexai: Option<bool>,
    pub project: Option<String>,
    pub location: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field(
                "api_key_present",
                &self
                    .api_key
                    .as_ref()
                    .is_some_and(|k| !k.expose_secret().is_empty()),
            )
            .field("vertexai", &self.vertexai)
            .field("project", &self.project)
            .field("location", &self.location)
            .finish()
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gemini API configuration with the given key.
    pub fn gemini_api<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            vertexai: Some(false),
            ..Default::default()
        }
    }

    /// Vertex AI configuration for a project and location.
    pub fn vertex_ai<S: Into<String>>(project: S, location: S) -> Self {
        Self {
            vertexai: Some(true),
            project: Some(project.into()),
            location: Some(location.into()),
            ..Default::default()
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub const fn with_vertexai(mut self, vertexai: bool) -> Self {
        self.vertexai = Some(vertexai);
        self
    }

    pub fn with_project<S: Into<String>>(mut self, project: S) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Fill unset values from the process environment.
    pub fn from_env(self) -> Self {
        self.from_env_with(|key| std::env::var(key).ok())
    }

    /// Fill unset values using `lookup` as the environment.
    pub fn from_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if self.vertexai.is_none() {
            self.vertexai = non_empty(ENV_USE_VERTEXAI)
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1");
        }
        if self.api_key.is_none() {
            self.api_key = non_empty(ENV_API_KEY)
                .or_else(|| non_empty(ENV_GEMINI_API_KEY))
                .map(SecretString::from);
        }
        if self.project.is_none() {
            self.project = non_empty(ENV_PROJECT);
        }
        if self.location.is_none() {
            self.location = non_empty(ENV_LOCATION);
        }
        self
    }

    pub fn backend(&self) -> Backend {
        if self.vertexai.unwrap_or(false) {
            Backend::VertexAi
        } else {
            Backend::GeminiApi
        }
    }

    /// Validate the configuration and produce the immutable backend context.
    pub fn backend_context(&self) -> Result<BackendContext> {
        match self.backend() {
            Backend::GeminiApi => Ok(BackendContext::gemini_api()),
            Backend::VertexAi => {
                let Some(project) = self.project.as_deref().filter(|p| !p.trim().is_empty())
                else {
                    return Err(GenAiError::ConfigurationError(format!(
                        "Vertex AI requires a project (explicit `project` or {ENV_PROJECT})"
                    )));
                };
                let location = self
                    .location
                    .as_deref()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or(DEFAULT_VERTEX_LOCATION);
                BackendContext::vertex_ai(project, location)
            }
        }
    }
}
