//! Reference document loading.
//!
//! The ISO standard text is read once at start-up and grounds every prompt.
//! A missing or empty file degrades to a fixed fallback message instead of
//! failing: downstream prompts interpolate the fallback string and the
//! model's answers make the problem visible to the learner.

use std::path::Path;

/// Content used when the reference document cannot be read.
pub const FALLBACK_MESSAGE: &str =
    "No se pudo leer el documento ISO. Verifica la ruta y el formato.";

/// The plain-text reference document.
#[derive(Debug, Clone)]
pub struct ReferenceDocument {
    text: String,
    loaded: bool,
}

impl ReferenceDocument {
    /// Read the reference text from `path`.
    ///
    /// Returns the fallback document when the file is missing, unreadable,
    /// or empty.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::info!(path = %path.display(), bytes = text.len(), "Reference document loaded");
                Self { text, loaded: true }
            }
            Ok(_) => {
                tracing::warn!(path = %path.display(), "Reference document is empty");
                Self::fallback()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read reference document");
                Self::fallback()
            }
        }
    }

    /// A document carrying the fixed fallback message.
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_MESSAGE.to_string(),
            loaded: false,
        }
    }

    /// Build a document from in-memory text (used by tests and embedders).
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            loaded: true,
        }
    }

    /// The document text (fallback message when not loaded).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a real document was read, as opposed to the fallback.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
