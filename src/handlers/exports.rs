use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::AdditionalFormat;
use crate::state::AppState;

/// Persist the first provider-returned export document, if any
///
/// Returns the relative URL the document is served under. The provider
/// only renders documents when they were requested, so an empty list just
/// yields `None`.
pub async fn save_export(
    dir: &FsPath,
    formats: &[AdditionalFormat],
) -> AppResult<Option<String>> {
    let Some(document) = formats.first() else {
        return Ok(None);
    };

    let bytes = if document.is_base64_encoded {
        BASE64_STANDARD
            .decode(document.content.as_bytes())
            .map_err(|e| AppError::Internal(format!("Invalid export encoding: {e}")))?
    } else {
        document.content.clone().into_bytes()
    };

    let extension = document
        .file_extension
        .as_deref()
        .unwrap_or(&document.requested_format);
    let name = format!("{}.{}", Uuid::new_v4(), extension);

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create export directory: {e}")))?;
    tokio::fs::write(dir.join(&name), &bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to write export: {e}")))?;

    info!("Saved {} export ({} bytes) as {}", document.requested_format, bytes.len(), name);

    Ok(Some(format!("/exports/{name}")))
}

/// Serve a previously saved export document
pub async fn serve_export(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let dir = state
        .config
        .export_dir
        .as_deref()
        .ok_or_else(|| AppError::NotFound("Exports are not enabled".to_string()))?;

    // File names are UUID-based; anything trying to escape the directory is bogus
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(AppError::BadRequest("Invalid export name".to_string()));
    }

    let path = dir.join(&name);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("No export named {name}")))?;

    let content_type = match path.extension().and_then(|e| e.to_str()) {
        Some("pdf") => "application/pdf",
        Some("html") => "text/html",
        Some("txt") | Some("srt") => "text/plain",
        _ => "application/octet-stream",
    };

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
