use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::handlers::exports::save_export;
use crate::state::AppState;
use crate::transcript::{build_segments, render_transcript};

/// Response body for the transcribe endpoint
#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    /// Original uploaded file name
    pub filename: String,
    /// Provider's full transcript text
    pub text: String,
    /// Provider-detected language code
    pub language: String,
    /// Speaker-attributed rendering, one segment per line
    pub transcription: String,
    /// Relative URL of the rendered export document, when exports are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<String>,
}

/// One uploaded audio file pulled out of the multipart stream
struct Upload {
    filename: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Handle a transcription request
///
/// Reads the uploaded file, forwards it to the speech-to-text provider and
/// regroups the word-level transcript into per-speaker segments.
pub async fn transcribe_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> AppResult<Json<TranscriptionResponse>> {
    let upload = read_upload(multipart).await?;

    info!(
        "Transcribing {} ({} bytes)",
        upload.filename,
        upload.bytes.len()
    );

    let response = state
        .scribe
        .transcribe(
            &upload.filename,
            upload.content_type.as_deref(),
            upload.bytes,
        )
        .await?;

    let segments = build_segments(&response.words);
    let transcription = render_transcript(&segments);

    info!(
        "Transcription complete: {} words, {} segments",
        response.words.len(),
        segments.len()
    );

    let export = match state.config.export_dir.as_deref() {
        Some(dir) => save_export(dir, &response.additional_formats).await?,
        None => None,
    };

    Ok(Json(TranscriptionResponse {
        filename: upload.filename,
        text: response.text,
        language: response.language,
        transcription,
        export,
    }))
}

/// Extract the `file` field from the multipart payload
async fn read_upload(mut multipart: Multipart) -> AppResult<Upload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        return Ok(Upload {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::BadRequest(
        "Missing `file` field in multipart payload".to_string(),
    ))
}
