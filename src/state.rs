use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::ServerConfig;
use crate::scribe::{ScribeClient, ScribeConfig};

/// Application state shared across handlers
pub struct AppState {
    pub config: ServerConfig,
    /// Speech-to-text provider client
    pub scribe: ScribeClient,
}

impl AppState {
    /// Build the shared state, wiring the provider client from the config
    ///
    /// Fails when no provider API key is configured; the server refuses to
    /// start rather than accept uploads it cannot transcribe.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>> {
        let api_key = config
            .elevenlabs_api_key
            .clone()
            .context("ELEVENLABS_API_KEY environment variable not set")?;

        let mut scribe_config = ScribeConfig::new(api_key);
        scribe_config.num_speakers = config.num_speakers;
        scribe_config.request_export = config.export_dir.is_some();
        if let Some(base_url) = &config.scribe_base_url {
            scribe_config.base_url = base_url.clone();
        }

        Ok(Arc::new(Self {
            config,
            scribe: ScribeClient::new(scribe_config),
        }))
    }
}
