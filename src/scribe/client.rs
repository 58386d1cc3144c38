use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use super::ScribeConfig;
use crate::models::ScribeResponse;

/// Errors from the speech-to-text provider boundary
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("failed to reach the speech-to-text API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("speech-to-text API returned {status}: {detail}")]
    Api { status: StatusCode, detail: String },
    #[error("failed to decode speech-to-text response: {0}")]
    Response(reqwest::Error),
}

/// ElevenLabs speech-to-text client
pub struct ScribeClient {
    client: Client,
    config: ScribeConfig,
}

impl ScribeClient {
    pub fn new(config: ScribeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Transcribe one uploaded audio file
    ///
    /// Posts the audio as multipart form data with the configured
    /// diarization options and returns the provider's word-level payload.
    pub async fn transcribe(
        &self,
        filename: &str,
        content_type: Option<&str>,
        audio: Vec<u8>,
    ) -> Result<ScribeResponse, ScribeError> {
        let mut part = Part::bytes(audio).file_name(filename.to_string());
        if let Some(mime) = content_type {
            part = part.mime_str(mime)?;
        }

        let mut form = Form::new()
            .part("file", part)
            .text("model_id", self.config.model_id.clone())
            .text("diarize", self.config.diarize.to_string())
            .text("num_speakers", self.config.num_speakers.to_string())
            .text("tag_audio_events", self.config.tag_audio_events.to_string());
        if self.config.request_export {
            form = form.text("additional_formats", r#"[{"format": "pdf"}]"#);
        }

        debug!("Posting {} to {}", filename, self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .header("xi-api-key", &self.config.api_key)
            .header("accept", "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScribeError::Api {
                status,
                detail: extract_error_detail(&body),
            });
        }

        response.json().await.map_err(ScribeError::Response)
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/speech-to-text", self.config.base_url)
    }
}

/// Pull a useful error description out of a provider error body
///
/// The provider usually returns a JSON document describing the failure;
/// when the body is not JSON the raw text is passed through.
fn extract_error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_from_json_body() {
        let body = r#"{"detail": {"status": "invalid_api_key"}}"#;

        let detail = extract_error_detail(body);

        assert!(detail.contains("invalid_api_key"));
    }

    #[test]
    fn test_error_detail_from_plain_text() {
        assert_eq!(extract_error_detail("  upstream timeout \n"), "upstream timeout");
    }

    #[test]
    fn test_endpoint_uses_base_url() {
        let mut config = ScribeConfig::new("key".to_string());
        config.base_url = "http://localhost:9090".to_string();
        let client = ScribeClient::new(config);

        assert_eq!(client.endpoint(), "http://localhost:9090/v1/speech-to-text");
    }
}
