//! Backend context and per-backend policy table.
//!
//! Every backend-dependent decision made by the normalizers is read from a
//! [`BackendPolicy`] rather than written as an inline `if vertex { .. }`, so the
//! path tables stay data and a new backend surface only adds a table row.

use genai_spec::{GenAiError, Result};

/// The API surface a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// The API-key authenticated developer API (generativelanguage.googleapis.com).
    GeminiApi,
    /// The project/location scoped enterprise API (aiplatform.googleapis.com).
    VertexAi,
}

impl Backend {
    pub fn policy(self) -> &'static BackendPolicy {
        match self {
            Self::GeminiApi => &GEMINI_API_POLICY,
            Self::VertexAi => &VERTEX_AI_POLICY,
        }
    }

    /// Name used in user-facing capability messages.
    pub fn display_name(self) -> &'static str {
        self.policy().display_name
    }

    pub const fn is_vertex_ai(self) -> bool {
        matches!(self, Self::VertexAi)
    }
}

/// Prefix predicate of a resource-name rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePrefix {
    /// `projects/`
    Projects,
    /// `locations/`
    Locations,
    /// `{collection}/`, e.g. `cachedContents/`
    Collection,
}

impl NamePrefix {
    fn matches(self, name: &str, collection: &str) -> bool {
        match self {
            Self::Projects => name.starts_with("projects/"),
            Self::Locations => name.starts_with("locations/"),
            Self::Collection => name
                .strip_prefix(collection)
                .is_some_and(|rest| rest.starts_with('/')),
        }
    }
}

/// How a resource name is completed once a rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRewrite {
    /// Already fully qualified.
    Unchanged,
    /// `projects/{project}/{name}`
    QualifyProject,
    /// `projects/{project}/locations/{location}/{name}`
    QualifyLocation,
    /// `projects/{project}/locations/{location}/{collection}/{name}`
    QualifyCollection,
    /// `{collection}/{name}`
    PrependCollection,
}

/// One entry of a resource-name priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRule {
    pub prefix: NamePrefix,
    pub rewrite: NameRewrite,
}

/// How message content is represented on the embedding endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedShape {
    /// Full message objects.
    Contents,
    /// Bare text strings of every text part.
    Texts,
}

/// Static, per-backend normalization policy.
#[derive(Debug)]
pub struct BackendPolicy {
    pub display_name: &'static str,
    /// Model identifiers starting with any of these are already canonical.
    pub model_passthrough_prefixes: &'static [&'static str],
    /// Whether `{publisher}/{model}` pairs expand to `publishers/{publisher}/models/{model}`.
    pub expands_publisher_pairs: bool,
    /// Prefix given to a bare model name.
    pub bare_model_prefix: &'static str,
    /// Collection path when listing base models.
    pub base_models_path: &'static str,
    /// Collection path when listing tuned models.
    pub tuned_models_path: &'static str,
    /// Resource-name rules, evaluated top to bottom; first match wins.
    pub resource_rules: &'static [ResourceRule],
    /// Rewrite applied when no resource rule matched.
    pub resource_fallback: NameRewrite,
    /// `(prefix, inserted path)` pairs that re-root a model under the cache
    /// namespace. Models matching none of them are left alone.
    pub caches_model_roots: &'static [(&'static str, &'static str)],
    pub embed_shape: EmbedShape,
}

static GEMINI_API_POLICY: BackendPolicy = BackendPolicy {
    display_name: "Gemini API",
    model_passthrough_prefixes: &["models/", "tunedModels/"],
    expands_publisher_pairs: false,
    bare_model_prefix: "models/",
    base_models_path: "models",
    tuned_models_path: "tunedModels",
    resource_rules: &[ResourceRule {
        prefix: NamePrefix::Collection,
        rewrite: NameRewrite::Unchanged,
    }],
    resource_fallback: NameRewrite::PrependCollection,
    caches_model_roots: &[],
    embed_shape: EmbedShape::Contents,
};

static VERTEX_AI_POLICY: BackendPolicy = BackendPolicy {
    display_name: "Vertex AI",
    model_passthrough_prefixes: &["publishers/", "projects/", "models/"],
    expands_publisher_pairs: true,
    bare_model_prefix: "publishers/google/models/",
    base_models_path: "publishers/google/models",
    tuned_models_path: "models",
    resource_rules: &[
        ResourceRule {
            prefix: NamePrefix::Projects,
            rewrite: NameRewrite::Unchanged,
        },
        ResourceRule {
            prefix: NamePrefix::Locations,
            rewrite: NameRewrite::QualifyProject,
        },
        ResourceRule {
            prefix: NamePrefix::Collection,
            rewrite: NameRewrite::QualifyLocation,
        },
    ],
    resource_fallback: NameRewrite::QualifyCollection,
    caches_model_roots: &[("publishers/", ""), ("models/", "publishers/google/")],
    embed_shape: EmbedShape::Texts,
};

/// Immutable description of the active backend and its addressing parameters.
///
/// Built once per client and shared read-only by every normalizer call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackendContext {
    backend: Backend,
    project: Option<String>,
    location: Option<String>,
}

impl BackendContext {
    /// Context for the Gemini API. Project and location do not apply.
    pub const fn gemini_api() -> Self {
        Self {
            backend: Backend::GeminiApi,
            project: None,
            location: None,
        }
    }

    /// Context for Vertex AI. Both `project` and `location` must be non-empty.
    pub fn vertex_ai(project: impl Into<String>, location: impl Into<String>) -> Result<Self> {
        let project = project.into().trim().to_string();
        let location = location.into().trim().to_string();
        if project.is_empty() {
            return Err(GenAiError::ConfigurationError(
                "Vertex AI requires a non-empty project".to_string(),
            ));
        }
        if location.is_empty() {
            return Err(GenAiError::ConfigurationError(
                "Vertex AI requires a non-empty location".to_string(),
            ));
        }
        Ok(Self {
            backend: Backend::VertexAi,
            project: Some(project),
            location: Some(location),
        })
    }

    pub const fn backend(&self) -> Backend {
        self.backend
    }

    pub const fn is_vertex_ai(&self) -> bool {
        self.backend.is_vertex_ai()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn policy(&self) -> &'static BackendPolicy {
        self.backend.policy()
    }

    /// `projects/{project}/locations/{location}`.
    pub fn location_path(&self) -> String {
        format!(
            "projects/{}/locations/{}",
            self.project().unwrap_or_default(),
            self.location().unwrap_or_default()
        )
    }

    /// Complete `name` according to the backend's resource-name priority list.
    pub(crate) fn apply_resource_rules(&self, name: &str, collection: &str) -> String {
        let policy = self.policy();
        let rewrite = policy
            .resource_rules
            .iter()
            .find(|rule| rule.prefix.matches(name, collection))
            .map_or(policy.resource_fallback, |rule| rule.rewrite);
        self.rewrite(rewrite, name, collection)
    }

    fn rewrite(&self, rewrite: NameRewrite, name: &str, collection: &str) -> String {
        match rewrite {
            NameRewrite::Unchanged => name.to_string(),
            NameRewrite::QualifyProject => {
                format!("projects/{}/{name}", self.project().unwrap_or_default())
            }
            NameRewrite::QualifyLocation => format!("{}/{name}", self.location_path()),
            NameRewrite::QualifyCollection => {
                format!("{}/{collection}/{name}", self.location_path())
            }
            NameRewrite::PrependCollection => format!("{collection}/{name}"),
        }
    }
}
