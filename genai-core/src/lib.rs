//! genai-core
//!
//! Backend-aware request normalization for the Gemini API and Vertex AI.
//!
//! Callers describe a call once, in whatever shape is convenient (a bare string,
//! a typed record, or a raw JSON fragment), and the normalizers turn it into the
//! exact structure and resource names the active backend expects:
//!
//! ```rust,ignore
//! use genai_core::{BackendContext, GenerateContentConfig, build_generate_content};
//!
//! let ctx = BackendContext::vertex_ai("my-project", "us-central1")?;
//! let req = build_generate_content(&ctx, "gemini-2.0-flash", "Hello", GenerateContentConfig::new())?;
//! assert_eq!(req.path, "publishers/google/models/gemini-2.0-flash:generateContent");
//! ```
//!
//! Everything here is synchronous and side-effect free. Transport, auth and
//! retries belong to the caller.
#![deny(unsafe_code)]

pub mod backend;
pub mod config;
pub mod requests;
pub mod transformers;

pub use backend::{Backend, BackendContext, BackendPolicy};
pub use config::ClientConfig;
pub use requests::{
    BuiltRequest, build_create_cached_content, build_embed_content, build_generate_content,
    build_list_models_path, build_live_setup,
};
pub use transformers::*;

pub use genai_spec::types::*;
pub use genai_spec::{ErrorCategory, GenAiError, Result};
