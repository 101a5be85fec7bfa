//! Transport-agnostic application state.
//!
//! `CoreState` is the single shared state behind the study API. It holds
//! the immutable reference document, the generation client and model, the
//! exclusive-access generation service, and the learner's session behind a
//! `RwLock` (concurrent reads, exclusive writes on commit).

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config;
use crate::llm::{GenerationService, LlmClient, OllamaClient};
use crate::reference::ReferenceDocument;
use crate::study::{StudyEngine, StudySession};

/// Shared application state. Wrapped in `Arc` at startup.
pub struct CoreState {
    /// The ISO standard text grounding every prompt. Loaded once.
    reference: ReferenceDocument,
    /// Generation model name.
    model: String,
    /// The text-generation capability. Trait object so tests can inject a
    /// mock behind the same API surface.
    client: Arc<dyn LlmClient + Send + Sync>,
    /// The learner's session state. Overwritten last-write-wins.
    session: RwLock<StudySession>,
    /// Exclusive generation access + operation observability.
    generation: GenerationService,
}

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}

impl CoreState {
    /// Build the production state: reference document from `ISO_DOC_PATH`,
    /// Ollama client from the environment.
    pub fn new() -> Self {
        let reference = ReferenceDocument::load(&config::reference_doc_path());
        Self::with_parts(reference, Arc::new(OllamaClient::from_env()), config::model_name())
    }

    /// Build state from explicit parts (tests, embedders).
    pub fn with_parts(
        reference: ReferenceDocument,
        client: Arc<dyn LlmClient + Send + Sync>,
        model: String,
    ) -> Self {
        Self {
            reference,
            model,
            client,
            session: RwLock::new(StudySession::new()),
            generation: GenerationService::new(),
        }
    }

    pub fn reference(&self) -> &ReferenceDocument {
        &self.reference
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generation(&self) -> &GenerationService {
        &self.generation
    }

    /// A study engine borrowing this state's client, model, and reference.
    pub fn engine(&self) -> StudyEngine<'_, dyn LlmClient + Send + Sync> {
        StudyEngine::new(self.client.as_ref(), &self.model, self.reference.text())
    }

    // ── Session access ──────────────────────────────────────

    pub fn read_session(&self) -> Result<RwLockReadGuard<'_, StudySession>, CoreError> {
        self.session.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_session(&self) -> Result<RwLockWriteGuard<'_, StudySession>, CoreError> {
        self.session.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Owned copy of the current session (for snapshot responses).
    pub fn session_snapshot(&self) -> Result<StudySession, CoreError> {
        Ok(self.read_session()?.clone())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
