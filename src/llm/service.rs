//! Centralized generation access — single point of entry for LLM operations.
//!
//! Ollama serves one model at a time, and the study workflow is strictly
//! sequential anyway (case → plan/solution → comparison → recommendations).
//! This service enforces exclusive access and tracks what's running.
//!
//! - `GenerationService` lives in `CoreState` (shared via `Arc`)
//! - `acquire()` blocks until the generator is free
//! - `try_acquire()` skips if busy (for health checks)
//! - `current_operation()` provides observability (what kind, when started)

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// What kind of generation operation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Case-study synthesis from the reference document
    CaseStudy,
    /// Implementation-plan drafting for the current case
    Plan,
    /// Reference-solution drafting for the current case
    Solution,
    /// Learner answer vs. reference solution comparison
    Comparison,
    /// Improvement recommendations for the learner
    Recommendations,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CaseStudy => write!(f, "Caso de estudio"),
            Self::Plan => write!(f, "Planificación"),
            Self::Solution => write!(f, "Solución de referencia"),
            Self::Comparison => write!(f, "Comparación"),
            Self::Recommendations => write!(f, "Recomendaciones"),
        }
    }
}

/// Snapshot of the currently running generation operation.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveOperation {
    /// What kind of operation is running.
    pub kind: OperationKind,
    /// Which model is being used.
    pub model: String,
    /// When the operation started (ISO 8601).
    pub started_at: String,
}

// ═══════════════════════════════════════════════════════════
// GenerationService
// ═══════════════════════════════════════════════════════════

/// Centralized generation access controller.
///
/// Ensures only one inference operation runs at a time and provides
/// observability into what's happening. All study operations that call
/// the LLM must go through this service.
pub struct GenerationService {
    /// Exclusive access lock — only one operation at a time.
    lock: Mutex<()>,
    /// What's currently running (observable state).
    current_op: Mutex<Option<ActiveOperation>>,
}

/// Errors from GenerationService operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Internal lock error")]
    LockPoisoned,
}

impl GenerationService {
    pub fn new() -> Self {
        Self {
            lock: Mutex::new(()),
            current_op: Mutex::new(None),
        }
    }

    /// Acquire exclusive access to the generator. Blocks until available.
    ///
    /// The guard must be held for the entire operation — dropping it
    /// releases the lock and clears the current operation state.
    pub fn acquire(
        &self,
        kind: OperationKind,
        model: &str,
    ) -> Result<GenerationGuard<'_>, ServiceError> {
        let guard = self.lock.lock().map_err(|_| ServiceError::LockPoisoned)?;
        self.set_current_op(kind, model);
        Ok(GenerationGuard {
            _guard: guard,
            service: self,
        })
    }

    /// Try to acquire exclusive access without blocking.
    ///
    /// Returns `None` if another operation is running.
    pub fn try_acquire(&self, kind: OperationKind, model: &str) -> Option<GenerationGuard<'_>> {
        let guard = self.lock.try_lock().ok()?;
        self.set_current_op(kind, model);
        Some(GenerationGuard {
            _guard: guard,
            service: self,
        })
    }

    /// What operation is currently running?
    ///
    /// Returns `None` if the generator is idle.
    pub fn current_operation(&self) -> Option<ActiveOperation> {
        self.current_op.lock().ok()?.clone()
    }

    /// Is a generation operation currently in flight?
    pub fn is_busy(&self) -> bool {
        self.lock.try_lock().is_err()
    }

    // ── Internal ────────────────────────────────────────────

    fn set_current_op(&self, kind: OperationKind, model: &str) {
        if let Ok(mut current) = self.current_op.lock() {
            *current = Some(ActiveOperation {
                kind,
                model: model.to_string(),
                started_at: chrono::Utc::now().to_rfc3339(),
            });
        }
    }

    fn clear_current_op(&self) {
        if let Ok(mut current) = self.current_op.lock() {
            *current = None;
        }
    }
}

impl Default for GenerationService {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// GenerationGuard — RAII exclusive access token
// ═══════════════════════════════════════════════════════════

/// RAII guard for exclusive generator access.
///
/// Dropping the guard releases the lock and clears the current operation.
pub struct GenerationGuard<'a> {
    _guard: MutexGuard<'a, ()>,
    service: &'a GenerationService,
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.service.clear_current_op();
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
