//! Core Data Type Definitions
//!
//! Plain structured value types with optional fields, mirroring the wire format
//! of the generative-AI API (camelCase JSON). They carry no decision logic.
//!
//! ## Module Organization
//!
//! - **`content`** - Messages, parts, blobs, file references
//! - **`schema`** - OpenAPI-subset schema for structured output and tools
//! - **`tools`** - Tool and function declarations
//! - **`speech`** - Speech / voice configuration
//! - **`models`** - Model metadata
//! - **`config`** - Per-call configuration records
//! - **`origin`** - The tagged union of ergonomic input shapes

mod config;
mod content;
mod models;
mod origin;
mod schema;
mod speech;
mod tools;

pub use config::{
    CreateCachedContentConfig, EmbedContentConfig, GenerateContentConfig, LiveConnectConfig,
};
pub use content::{
    Blob, Content, File, FileData, FunctionCall, FunctionResponse, MODEL_ROLE, Part, USER_ROLE,
};
pub use models::Model;
pub use origin::{Origin, json_kind};
pub use schema::{Schema, Type};
pub use speech::{
    MultiSpeakerVoiceConfig, PrebuiltVoiceConfig, SpeakerVoiceConfig, SpeechConfig, VoiceConfig,
};
pub use tools::{
    FunctionDeclaration, GoogleSearch, GoogleSearchRetrieval, Tool, ToolCodeExecution, UrlContext,
};
