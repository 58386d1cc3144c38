use serde::{Deserialize, Serialize};

/// Speaker label assigned to words the provider left unattributed
pub const UNKNOWN_SPEAKER: &str = "unknown";

/// Root response from the ElevenLabs speech-to-text API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScribeResponse {
    /// Full transcript text as produced by the provider
    #[serde(default)]
    pub text: String,
    /// Detected language code (the provider spells this `language_code`)
    #[serde(alias = "language_code", default)]
    pub language: String,
    /// Word-level transcript with diarization info
    #[serde(default)]
    pub words: Vec<ScribeWord>,
    /// Extra rendered documents, present when requested via `additional_formats`
    #[serde(default)]
    pub additional_formats: Vec<AdditionalFormat>,
}

/// A single word from the provider with diarization info
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScribeWord {
    /// The recognized text, including any whitespace of spacing entries
    pub text: String,
    /// Start timestamp in seconds
    #[serde(default)]
    pub start: f64,
    /// End timestamp in seconds
    #[serde(default)]
    pub end: f64,
    /// Kind of entry (word, spacing, audio event)
    #[serde(rename = "type", default)]
    pub word_type: WordType,
    /// Speaker identifier, only present when diarization was requested
    #[serde(default)]
    pub speaker_id: Option<String>,
}

impl ScribeWord {
    /// Speaker label for segment grouping
    ///
    /// Words without a `speaker_id` are attributed to [`UNKNOWN_SPEAKER`],
    /// so downstream grouping stays total over any provider payload.
    pub fn speaker_label(&self) -> &str {
        self.speaker_id.as_deref().unwrap_or(UNKNOWN_SPEAKER)
    }
}

/// Entry kinds in the provider's word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    #[default]
    Word,
    Spacing,
    AudioEvent,
    /// Forward-compatible catch-all for kinds this version does not know
    #[serde(other)]
    Other,
}

/// A rendered document returned alongside the transcript
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdditionalFormat {
    /// Format that was requested (e.g. "pdf")
    pub requested_format: String,
    /// File extension for the rendered document
    #[serde(default)]
    pub file_extension: Option<String>,
    /// MIME type of the content
    #[serde(default)]
    pub content_type: Option<String>,
    /// Whether `content` is base64-encoded
    #[serde(default)]
    pub is_base64_encoded: bool,
    /// Document content, base64-encoded unless stated otherwise
    #[serde(default)]
    pub content: String,
}
