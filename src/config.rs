use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Deployment environment, controls the CORS policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Origin allowed by CORS in production
    pub frontend_url: String,
    /// Speech-to-text provider API key
    pub elevenlabs_api_key: Option<String>,
    /// Provider base URL override, mainly for tests and proxies
    pub scribe_base_url: Option<String>,
    /// Expected speaker count passed to the provider
    pub num_speakers: u32,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
    /// Where rendered export documents are stored; exports are disabled when unset
    pub export_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads from the process environment with sensible defaults, loading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("Invalid PORT value")?;

        let environment = env::var("ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let elevenlabs_api_key = env::var("ELEVENLABS_API_KEY").ok();
        let scribe_base_url = env::var("SCRIBE_BASE_URL").ok();

        let num_speakers = env::var("SCRIBE_NUM_SPEAKERS")
            .ok()
            .map(|v| v.parse::<u32>().context("Invalid SCRIBE_NUM_SPEAKERS value"))
            .transpose()?
            .unwrap_or(2);

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .map(|v| v.parse::<usize>().context("Invalid MAX_UPLOAD_BYTES value"))
            .transpose()?
            .unwrap_or(50 * 1024 * 1024);

        let export_dir = env::var("EXPORT_DIR").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            environment,
            frontend_url,
            elevenlabs_api_key,
            scribe_base_url,
            num_speakers,
            max_upload_bytes,
            export_dir,
        })
    }

    /// Socket address string for the listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
