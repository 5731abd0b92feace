//! Error handling types for genai.
//!
//! Every error raised while normalizing a request is a local validation failure:
//! nothing has been sent over the network yet, so none of them are retryable.

mod conversions;
pub mod types;

pub use types::*;
