//! Artifact export endpoints.
//!
//! `GET /api/export/:kind/:format` downloads the current artifact of the
//! given kind. `?save=true` additionally writes a copy into the exports
//! directory.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;
use crate::export;
use crate::study::ArtifactKind;

/// Fixed answer for PDF requests.
pub const PDF_NOT_IMPLEMENTED: &str =
    "La generación de PDF no está implementada. Usa TXT o DOCX.";

const NOTHING_TO_EXPORT: &str = "No hay contenido para exportar.";

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Deserialize)]
pub struct ExportQuery {
    /// Also persist the export under the exports directory.
    #[serde(default)]
    pub save: bool,
}

/// `GET /api/export/:kind/:format`
pub async fn download(
    State(ctx): State<ApiContext>,
    Path((kind, format)): Path<(String, String)>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let kind = ArtifactKind::from_slug(&kind)
        .ok_or_else(|| ApiError::NotFound(format!("Tipo de artefacto desconocido: {kind}")))?;

    let text = ctx
        .core
        .read_session()?
        .artifact(kind)
        .map(|a| a.text.clone());
    let Some(text) = text else {
        return Err(ApiError::NotFound(NOTHING_TO_EXPORT.into()));
    };

    let (artifact, content_type) = match format.as_str() {
        "txt" => (export::txt_export(&text, kind), "text/plain; charset=utf-8"),
        "docx" => (export::docx_export(&text, kind)?, DOCX_MIME),
        "pdf" => return Err(ApiError::BadRequest(PDF_NOT_IMPLEMENTED.into())),
        other => {
            return Err(ApiError::BadRequest(format!("Formato no soportado: {other}")));
        }
    };
    let Some(artifact) = artifact else {
        // The model returned an empty blob; nothing to offer.
        return Err(ApiError::NotFound(NOTHING_TO_EXPORT.into()));
    };

    if query.save {
        export::save_to_dir(&artifact, &config::exports_dir())?;
    }

    tracing::debug!(filename = %artifact.filename, "Serving export");

    let headers = [
        (header::CONTENT_TYPE, content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename),
        ),
    ];
    Ok((headers, artifact.bytes).into_response())
}
