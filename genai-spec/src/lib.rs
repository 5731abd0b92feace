//! genai-spec
//!
//! Backend-agnostic data records and error types for the genai workspace.
//!
//! This crate contains only plain data types (messages, parts,
//! blobs, schemas, tools, speech configuration, model metadata and request
//! configuration structs). Normalization logic, backend policy and request
//! building live in `genai-core`.
#![deny(unsafe_code)]

pub mod encoding;
pub mod error;
pub mod types;

pub use error::{ErrorCategory, GenAiError, Result};
