//! Artifact export — plain text and DOCX.
//!
//! Both exporters take the artifact text at the moment of export and return
//! a named byte buffer; the filename embeds a second-resolution timestamp.
//! Empty text exports to nothing (`None`) rather than an empty file.
//! Re-exporting the same text yields identical content under a new name.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use docx_rs::{Docx, Paragraph, Run};
use thiserror::Error;

use crate::study::ArtifactKind;

/// A named byte buffer ready to be offered as a download.
#[derive(Debug, Clone)]
pub struct ExportedArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to pack document: {0}")]
    DocumentPacking(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export text as a UTF-8 `.txt` byte buffer.
///
/// Returns `None` when the text is empty.
pub fn txt_export(text: &str, kind: ArtifactKind) -> Option<ExportedArtifact> {
    if text.is_empty() {
        return None;
    }

    Some(ExportedArtifact {
        filename: filename_for(kind, "txt", Local::now()),
        bytes: text.as_bytes().to_vec(),
    })
}

/// Export text as a formatted `.docx` byte buffer.
///
/// The document carries a heading with the capitalized artifact label, a
/// generation-timestamp paragraph, a blank spacer, and the full text
/// verbatim in one paragraph. Returns `Ok(None)` when the text is empty.
pub fn docx_export(text: &str, kind: ArtifactKind) -> Result<Option<ExportedArtifact>, ExportError> {
    if text.is_empty() {
        return Ok(None);
    }

    let now = Local::now();
    let generated = format!("Generado el: {}", now.format("%d/%m/%Y %H:%M:%S"));

    let doc = Docx::new()
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(capitalize(kind.slug())).size(32).bold()),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(generated)))
        .add_paragraph(Paragraph::new())
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)));

    let mut cursor = std::io::Cursor::new(Vec::new());
    doc.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::DocumentPacking(e.to_string()))?;

    Ok(Some(ExportedArtifact {
        filename: filename_for(kind, "docx", now),
        bytes: cursor.into_inner(),
    }))
}

/// Write an exported artifact into `dir`, creating the directory if needed.
/// Returns the full path of the written file.
pub fn save_to_dir(artifact: &ExportedArtifact, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.bytes)?;
    tracing::info!(path = %path.display(), "Artifact saved");
    Ok(path)
}

/// `{kind}_{YYYYMMDD_HHMMSS}.{ext}` — second resolution, so two exports
/// within the same second collide.
fn filename_for(kind: ArtifactKind, ext: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.{}", kind.slug(), at.format("%Y%m%d_%H%M%S"), ext)
}

/// First letter uppercased, the rest lowercased.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
