//! The study engine — the five generation operations.
//!
//! Each operation builds a prompt from the reference document and prior
//! session artifacts, runs it through the generation client, and returns a
//! fresh artifact. Guard conditions are checked before any client call, so
//! a blocked operation costs zero generations.
//!
//! Operations never mutate the session: callers commit successful results
//! back into `StudySession`. A failed generation therefore cannot leak its
//! error text into later prompts.

use super::similarity::extract_similarity;
use super::types::{Artifact, ArtifactKind, ComparisonResult, StudySession};
use super::{prompt, StudyError};
use crate::llm::LlmClient;

/// Stateless orchestrator over a generation client.
///
/// Borrows its inputs from `CoreState` for the duration of one operation.
pub struct StudyEngine<'a, C: ?Sized> {
    client: &'a C,
    model: &'a str,
    reference: &'a str,
}

impl<'a, C: LlmClient + ?Sized> StudyEngine<'a, C> {
    pub fn new(client: &'a C, model: &'a str, reference: &'a str) -> Self {
        Self {
            client,
            model,
            reference,
        }
    }

    /// Synthesize a fresh case study from the reference document.
    pub fn generate_case_study(&self) -> Result<Artifact, StudyError> {
        tracing::info!(model = self.model, "Generating case study");
        let text = self
            .client
            .generate(self.model, &prompt::case_study_prompt(self.reference))?;
        Ok(Artifact::new(ArtifactKind::CasoEstudio, text))
    }

    /// Draft an implementation plan for the current case study.
    pub fn create_plan(&self, session: &StudySession) -> Result<Artifact, StudyError> {
        let case = session.case_study.as_ref().ok_or(StudyError::NoCaseStudy)?;

        tracing::info!(model = self.model, "Creating plan");
        let text = self
            .client
            .generate(self.model, &prompt::plan_prompt(self.reference, &case.text))?;
        Ok(Artifact::new(ArtifactKind::Planificacion, text))
    }

    /// Draft the reference solution for the current case study.
    pub fn generate_solution(&self, session: &StudySession) -> Result<Artifact, StudyError> {
        let case = session.case_study.as_ref().ok_or(StudyError::NoCaseStudy)?;

        tracing::info!(model = self.model, "Generating reference solution");
        let text = self.client.generate(
            self.model,
            &prompt::solution_prompt(self.reference, &case.text),
        )?;
        Ok(Artifact::new(ArtifactKind::Solucion, text))
    }

    /// Compare the learner's answer against the reference solution.
    ///
    /// Requires both a case study and a reference solution. The similarity
    /// score is scraped from the narrative; see `similarity` for the rules.
    pub fn compare_answer(
        &self,
        session: &StudySession,
        user_answer: &str,
    ) -> Result<ComparisonResult, StudyError> {
        let (case, solution) = match (&session.case_study, &session.solution) {
            (Some(case), Some(solution)) => (case, solution),
            _ => return Err(StudyError::NothingToCompare),
        };

        tracing::info!(model = self.model, "Comparing learner answer");
        let text = self.client.generate(
            self.model,
            &prompt::comparison_prompt(self.reference, user_answer, &solution.text, &case.text),
        )?;

        let similarity_score = extract_similarity(&text);
        tracing::debug!(similarity_score, "Similarity extracted");

        Ok(ComparisonResult {
            text,
            similarity_score,
        })
    }

    /// Generate improvement recommendations for the learner.
    ///
    /// Uses the stored answer and comparison narrative when present; either
    /// may be absent (the learner can ask for recommendations early), in
    /// which case the prompt interpolates an empty blob.
    pub fn generate_recommendations(
        &self,
        session: &StudySession,
    ) -> Result<Artifact, StudyError> {
        let case = session
            .case_study
            .as_ref()
            .ok_or(StudyError::NoCaseForRecommendations)?;

        let user_answer = session.user_answer.as_deref().unwrap_or_default();
        let comparison = session
            .comparison
            .as_ref()
            .map(|c| c.text.as_str())
            .unwrap_or_default();

        tracing::info!(model = self.model, "Generating recommendations");
        let text = self.client.generate(
            self.model,
            &prompt::recommendations_prompt(self.reference, &case.text, user_answer, comparison),
        )?;
        Ok(Artifact::new(ArtifactKind::Recomendaciones, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    const REFERENCE: &str = "ISO X requires process Y";

    fn session_with_case() -> StudySession {
        let mut session = StudySession::new();
        session.case_study = Some(Artifact::new(ArtifactKind::CasoEstudio, "el caso".into()));
        session
    }

    fn session_with_case_and_solution() -> StudySession {
        let mut session = session_with_case();
        session.solution = Some(Artifact::new(ArtifactKind::Solucion, "la solución".into()));
        session
    }

    #[test]
    fn case_study_generation() {
        let client = MockLlmClient::new("una empresa ficticia...");
        let engine = StudyEngine::new(&client, "gemma3:latest", REFERENCE);

        let artifact = engine.generate_case_study().unwrap();
        assert_eq!(artifact.kind, ArtifactKind::CasoEstudio);
        assert_eq!(artifact.text, "una empresa ficticia...");
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn plan_requires_case_study() {
        let client = MockLlmClient::new("plan");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let err = engine.create_plan(&StudySession::new()).unwrap_err();
        assert!(matches!(err, StudyError::NoCaseStudy));
        assert_eq!(err.to_string(), "Primero debes generar un caso de estudio.");
        // Guard short-circuits before any generation call
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn solution_requires_case_study() {
        let client = MockLlmClient::new("solución");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let err = engine.generate_solution(&StudySession::new()).unwrap_err();
        assert!(matches!(err, StudyError::NoCaseStudy));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn plan_interpolates_case_text() {
        let client = MockLlmClient::new("ok").with_response_for("el caso", "plan basado en el caso");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let artifact = engine.create_plan(&session_with_case()).unwrap();
        assert_eq!(artifact.kind, ArtifactKind::Planificacion);
        assert_eq!(artifact.text, "plan basado en el caso");
    }

    #[test]
    fn compare_requires_case_and_solution() {
        let client = MockLlmClient::new("comparación");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        // No case, no solution
        let err = engine
            .compare_answer(&StudySession::new(), "mi respuesta")
            .unwrap_err();
        assert!(matches!(err, StudyError::NothingToCompare));
        assert_eq!(
            err.to_string(),
            "Error: No hay un caso de estudio o solución generada para comparar."
        );

        // Case but no solution
        let err = engine
            .compare_answer(&session_with_case(), "mi respuesta")
            .unwrap_err();
        assert!(matches!(err, StudyError::NothingToCompare));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn compare_extracts_similarity_score() {
        let client = MockLlmClient::new("Porcentaje de similitud: 64%\nBuen trabajo.");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let result = engine
            .compare_answer(&session_with_case_and_solution(), "I did Y")
            .unwrap();
        assert!((result.similarity_score - 64.0).abs() < f64::EPSILON);
        assert!(result.text.contains("Buen trabajo."));
    }

    #[test]
    fn compare_defaults_score_on_unscorable_narrative() {
        let client = MockLlmClient::new("La respuesta es parecida a la solución.");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let result = engine
            .compare_answer(&session_with_case_and_solution(), "respuesta")
            .unwrap();
        assert!((result.similarity_score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recommendations_require_case_study() {
        let client = MockLlmClient::new("recomendaciones");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let err = engine
            .generate_recommendations(&StudySession::new())
            .unwrap_err();
        assert!(matches!(err, StudyError::NoCaseForRecommendations));
        assert_eq!(
            err.to_string(),
            "Error: No hay un caso de estudio para generar recomendaciones."
        );
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn recommendations_tolerate_missing_answer_and_comparison() {
        let client = MockLlmClient::new("recomendaciones genéricas");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let artifact = engine
            .generate_recommendations(&session_with_case())
            .unwrap();
        assert_eq!(artifact.kind, ArtifactKind::Recomendaciones);
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn generation_failure_propagates_cause() {
        let client = MockLlmClient::failing("connection refused");
        let engine = StudyEngine::new(&client, "m", REFERENCE);

        let err = engine.generate_case_study().unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
