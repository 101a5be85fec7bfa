//! Study operation endpoints.
//!
//! Every generation endpoint follows the same shape: snapshot the session,
//! run the blocking engine under the generation-service guard in a
//! `spawn_blocking` task, commit the artifact on success, and answer with a
//! tagged outcome. Failures and guard refusals stay inline text (the UI
//! renders them where the artifact would go) — but only successes enter the
//! session, so error strings never feed later prompts.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::chart::{comparison_chart, ComparisonChart};
use crate::core_state::CoreState;
use crate::llm::OperationKind;
use crate::study::{Artifact, StudyError, StudySession};

/// Display prefixes for failed generations, per operation.
const CASE_ERROR: &str = "Error al generar el caso de estudio";
const PLAN_ERROR: &str = "Error al crear la planificación";
const SOLUTION_ERROR: &str = "Error al generar la solución";
const COMPARE_ERROR: &str = "Error al comparar las respuestas";
const RECOMMENDATIONS_ERROR: &str = "Error al generar recomendaciones";

/// Outcome tag of a study operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    /// Generated and committed to the session.
    Ok,
    /// A precondition guard refused the operation; no generation was run.
    Blocked,
    /// The generation call failed; the text carries the labeled cause.
    Error,
}

#[derive(Serialize)]
pub struct OperationResponse {
    pub status: OperationStatus,
    /// Artifact text on success; otherwise the guard message or the
    /// Spanish-labeled failure cause. Always displayable inline.
    pub text: String,
    pub generated_at: Option<String>,
}

fn operation_response(
    result: Result<Artifact, StudyError>,
    error_prefix: &str,
) -> OperationResponse {
    match result {
        Ok(artifact) => OperationResponse {
            status: OperationStatus::Ok,
            text: artifact.text,
            generated_at: Some(artifact.generated_at),
        },
        Err(e) if e.is_guard() => OperationResponse {
            status: OperationStatus::Blocked,
            text: e.to_string(),
            generated_at: None,
        },
        Err(e) => OperationResponse {
            status: OperationStatus::Error,
            text: format!("{error_prefix}: {e}"),
            generated_at: None,
        },
    }
}

/// Run a blocking study operation under the generation-service guard.
async fn run_generation<T, F>(
    core: Arc<CoreState>,
    kind: OperationKind,
    op: F,
) -> Result<Result<T, StudyError>, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&CoreState) -> Result<Result<T, StudyError>, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let _guard = core.generation().acquire(kind, core.model())?;
        op(&core)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Generation task failed: {e}")))?
}

/// `POST /api/study/case` — synthesize a fresh case study.
pub async fn case(State(ctx): State<ApiContext>) -> Result<Json<OperationResponse>, ApiError> {
    let outcome = run_generation(ctx.core.clone(), OperationKind::CaseStudy, |core| {
        let result = core.engine().generate_case_study();
        if let Ok(artifact) = &result {
            core.write_session()?.case_study = Some(artifact.clone());
        }
        Ok(result)
    })
    .await?;

    Ok(Json(operation_response(outcome, CASE_ERROR)))
}

/// `POST /api/study/plan` — draft a plan for the current case.
pub async fn plan(State(ctx): State<ApiContext>) -> Result<Json<OperationResponse>, ApiError> {
    let outcome = run_generation(ctx.core.clone(), OperationKind::Plan, |core| {
        let session = core.session_snapshot()?;
        let result = core.engine().create_plan(&session);
        if let Ok(artifact) = &result {
            core.write_session()?.plan = Some(artifact.clone());
        }
        Ok(result)
    })
    .await?;

    Ok(Json(operation_response(outcome, PLAN_ERROR)))
}

/// `POST /api/study/solution` — draft the reference solution.
pub async fn solution(State(ctx): State<ApiContext>) -> Result<Json<OperationResponse>, ApiError> {
    let outcome = run_generation(ctx.core.clone(), OperationKind::Solution, |core| {
        let session = core.session_snapshot()?;
        let result = core.engine().generate_solution(&session);
        if let Ok(artifact) = &result {
            core.write_session()?.solution = Some(artifact.clone());
        }
        Ok(result)
    })
    .await?;

    Ok(Json(operation_response(outcome, SOLUTION_ERROR)))
}

#[derive(Deserialize)]
pub struct CompareRequest {
    pub answer: String,
}

#[derive(Serialize)]
pub struct CompareResponse {
    pub status: OperationStatus,
    pub text: String,
    pub similarity_score: Option<f64>,
    pub chart: Option<ComparisonChart>,
}

/// `POST /api/study/compare` — score the learner's answer.
pub async fn compare(
    State(ctx): State<ApiContext>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let outcome = run_generation(ctx.core.clone(), OperationKind::Comparison, move |core| {
        let session = core.session_snapshot()?;
        let result = core.engine().compare_answer(&session, &req.answer);
        if let Ok(comparison) = &result {
            let mut session = core.write_session()?;
            session.user_answer = Some(req.answer.clone());
            session.comparison = Some(comparison.clone());
        }
        Ok(result)
    })
    .await?;

    let response = match outcome {
        Ok(comparison) => CompareResponse {
            status: OperationStatus::Ok,
            text: comparison.text,
            similarity_score: Some(comparison.similarity_score),
            chart: Some(comparison_chart(comparison.similarity_score)),
        },
        Err(e) if e.is_guard() => CompareResponse {
            status: OperationStatus::Blocked,
            text: e.to_string(),
            similarity_score: None,
            chart: None,
        },
        Err(e) => CompareResponse {
            status: OperationStatus::Error,
            text: format!("{COMPARE_ERROR}: {e}"),
            similarity_score: None,
            chart: None,
        },
    };

    Ok(Json(response))
}

/// `POST /api/study/recommendations` — improvement recommendations.
///
/// Uses the answer and comparison stored by the last compare call.
pub async fn recommendations(
    State(ctx): State<ApiContext>,
) -> Result<Json<OperationResponse>, ApiError> {
    let outcome = run_generation(ctx.core.clone(), OperationKind::Recommendations, |core| {
        let session = core.session_snapshot()?;
        let result = core.engine().generate_recommendations(&session);
        if let Ok(artifact) = &result {
            core.write_session()?.recommendations = Some(artifact.clone());
        }
        Ok(result)
    })
    .await?;

    Ok(Json(operation_response(outcome, RECOMMENDATIONS_ERROR)))
}

/// `GET /api/study/session` — snapshot of all current artifacts.
pub async fn session(State(ctx): State<ApiContext>) -> Result<Json<StudySession>, ApiError> {
    Ok(Json(ctx.core.session_snapshot()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::GenerationError;
    use crate::study::ArtifactKind;

    #[test]
    fn success_maps_to_ok_with_text() {
        let artifact = Artifact::new(ArtifactKind::CasoEstudio, "el caso".into());
        let response = operation_response(Ok(artifact), CASE_ERROR);
        assert_eq!(response.status, OperationStatus::Ok);
        assert_eq!(response.text, "el caso");
        assert!(response.generated_at.is_some());
    }

    #[test]
    fn guard_maps_to_blocked_with_fixed_message() {
        let response = operation_response(Err(StudyError::NoCaseStudy), PLAN_ERROR);
        assert_eq!(response.status, OperationStatus::Blocked);
        assert_eq!(response.text, "Primero debes generar un caso de estudio.");
        assert!(response.generated_at.is_none());
    }

    #[test]
    fn failure_maps_to_error_with_labeled_cause() {
        let err = StudyError::Generation(GenerationError::HttpClient("timed out".into()));
        let response = operation_response(Err(err), SOLUTION_ERROR);
        assert_eq!(response.status, OperationStatus::Error);
        assert_eq!(
            response.text,
            "Error al generar la solución: HTTP client error: timed out"
        );
    }
}
