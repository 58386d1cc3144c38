use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Environment, ServerConfig};
use crate::handlers::{api, exports, transcribe};
use crate::state::AppState;

/// Assemble the application router
pub fn create_router(state: Arc<AppState>) -> Result<Router> {
    let cors = cors_layer(&state.config)?;
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    let mut router = Router::new()
        .route("/", get(api::health_check))
        .route("/transcribe", post(transcribe::transcribe_handler));

    if state.config.export_dir.is_some() {
        router = router.route("/exports/{name}", get(exports::serve_export));
    }

    Ok(router
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// CORS policy by deployment environment
///
/// Production only admits the configured frontend origin; everywhere else
/// any origin is accepted. Credentials are only allowed with the pinned
/// origin, since a wildcard origin cannot carry them.
fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let layer = match config.environment {
        Environment::Production => {
            let origin = config
                .frontend_url
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid FRONTEND_URL: {}", config.frontend_url))?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true)
        }
        Environment::Development => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Ok(layer)
}
