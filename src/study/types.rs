//! Data shapes of the study workflow.
//!
//! Everything here is transient: one process, one learner, no persistence.
//! Artifacts are replaced wholesale on regeneration, never appended to.

use serde::{Deserialize, Serialize};

/// The four exportable generated artifacts.
///
/// Serialized form doubles as the filename slug (`caso_estudio_…txt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    CasoEstudio,
    Planificacion,
    Solucion,
    Recomendaciones,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::CasoEstudio,
        ArtifactKind::Planificacion,
        ArtifactKind::Solucion,
        ArtifactKind::Recomendaciones,
    ];

    /// Filename slug, also the wire value.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::CasoEstudio => "caso_estudio",
            Self::Planificacion => "planificacion",
            Self::Solucion => "solucion",
            Self::Recomendaciones => "recomendaciones",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// A generated free-text artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub text: String,
    /// When the artifact was generated (ISO 8601).
    pub generated_at: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, text: String) -> Self {
        Self {
            kind,
            text,
            generated_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

/// The model's comparison narrative plus the score scraped out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub text: String,
    /// Extracted similarity percentage; 50.0 when unparseable. Not clamped.
    pub similarity_score: f64,
}

/// Explicit session state for one learner.
///
/// Operations read this state and endpoints commit new artifacts back into
/// it; there are no hidden module-level globals. Last write wins; there is
/// no staleness check between a case study and artifacts derived from an
/// earlier one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudySession {
    pub case_study: Option<Artifact>,
    pub plan: Option<Artifact>,
    pub solution: Option<Artifact>,
    pub user_answer: Option<String>,
    pub comparison: Option<ComparisonResult>,
    pub recommendations: Option<Artifact>,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current artifact of the given kind, if generated.
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&Artifact> {
        match kind {
            ArtifactKind::CasoEstudio => self.case_study.as_ref(),
            ArtifactKind::Planificacion => self.plan.as_ref(),
            ArtifactKind::Solucion => self.solution.as_ref(),
            ArtifactKind::Recomendaciones => self.recommendations.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for kind in ArtifactKind::ALL {
            assert_eq!(ArtifactKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ArtifactKind::from_slug("informe"), None);
    }

    #[test]
    fn kind_serializes_as_slug() {
        let json = serde_json::to_string(&ArtifactKind::CasoEstudio).unwrap();
        assert_eq!(json, "\"caso_estudio\"");
        let json = serde_json::to_string(&ArtifactKind::Planificacion).unwrap();
        assert_eq!(json, "\"planificacion\"");
    }

    #[test]
    fn new_artifact_is_timestamped() {
        let artifact = Artifact::new(ArtifactKind::Solucion, "texto".into());
        assert_eq!(artifact.kind, ArtifactKind::Solucion);
        assert_eq!(artifact.text, "texto");
        assert!(!artifact.generated_at.is_empty());
    }

    #[test]
    fn empty_session_has_no_artifacts() {
        let session = StudySession::new();
        for kind in ArtifactKind::ALL {
            assert!(session.artifact(kind).is_none());
        }
    }

    #[test]
    fn artifact_lookup_by_kind() {
        let mut session = StudySession::new();
        session.solution = Some(Artifact::new(ArtifactKind::Solucion, "la solución".into()));

        assert_eq!(
            session.artifact(ArtifactKind::Solucion).unwrap().text,
            "la solución"
        );
        assert!(session.artifact(ArtifactKind::CasoEstudio).is_none());
    }

    #[test]
    fn session_serializes_and_back() {
        let mut session = StudySession::new();
        session.case_study = Some(Artifact::new(ArtifactKind::CasoEstudio, "el caso".into()));
        session.comparison = Some(ComparisonResult {
            text: "Porcentaje de similitud: 64%".into(),
            similarity_score: 64.0,
        });

        let json = serde_json::to_string(&session).unwrap();
        let back: StudySession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.case_study.unwrap().text, "el caso");
        assert!((back.comparison.unwrap().similarity_score - 64.0).abs() < f64::EPSILON);
    }
}
