pub mod ollama;
pub mod service;

pub use ollama::*;
pub use service::*;

use thiserror::Error;

/// Errors from the text-generation capability.
///
/// Every variant carries the underlying cause in its `Display` output —
/// callers render that cause directly to the learner as inline text.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Ollama is not running at {0}")]
    Connection(String),

    #[error("Generation API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("No compatible generation model available")]
    NoModelAvailable,

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}
