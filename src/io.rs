use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ScribeResponse;

/// Parse a saved speech-to-text JSON file
pub fn parse_scribe_file(path: &Path) -> Result<ScribeResponse> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_scribe_json(&content)
}

/// Parse a speech-to-text JSON string
pub fn parse_scribe_json(json: &str) -> Result<ScribeResponse> {
    serde_json::from_str(json).context("Failed to parse speech-to-text JSON")
}
