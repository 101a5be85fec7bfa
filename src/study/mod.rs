pub mod engine;
pub mod prompt;
pub mod similarity;
pub mod types;

pub use engine::*;
pub use similarity::*;
pub use types::*;

use thiserror::Error;

use crate::llm::GenerationError;

/// Errors from the study operations.
///
/// The guard variants carry the exact message shown to the learner when a
/// dependent operation is attempted out of order; `Display` is the UI copy.
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Primero debes generar un caso de estudio.")]
    NoCaseStudy,

    #[error("Error: No hay un caso de estudio o solución generada para comparar.")]
    NothingToCompare,

    #[error("Error: No hay un caso de estudio para generar recomendaciones.")]
    NoCaseForRecommendations,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl StudyError {
    /// Whether this is a precondition guard (as opposed to a failed
    /// generation call).
    pub fn is_guard(&self) -> bool {
        !matches!(self, StudyError::Generation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_classification() {
        assert!(StudyError::NoCaseStudy.is_guard());
        assert!(StudyError::NothingToCompare.is_guard());
        assert!(StudyError::NoCaseForRecommendations.is_guard());
        assert!(!StudyError::Generation(GenerationError::NoModelAvailable).is_guard());
    }

    #[test]
    fn generation_error_is_transparent() {
        let err = StudyError::Generation(GenerationError::HttpClient("timed out".into()));
        assert_eq!(err.to_string(), "HTTP client error: timed out");
    }
}
