use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

/// Health check, used by deploy probes and the frontend
pub async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "OK"
    })))
}
