/// Configuration for the ElevenLabs speech-to-text client
#[derive(Debug, Clone)]
pub struct ScribeConfig {
    /// API key (from ELEVENLABS_API_KEY env var)
    pub api_key: String,
    /// API base URL, overridable for tests
    pub base_url: String,
    /// Transcription model (e.g. "scribe_v1")
    pub model_id: String,
    /// Expected number of speakers in the audio
    pub num_speakers: u32,
    /// Whether to tag words with speaker identifiers
    pub diarize: bool,
    /// Whether to annotate non-speech audio events
    pub tag_audio_events: bool,
    /// Request an additionally rendered document alongside the transcript
    pub request_export: bool,
}

impl ScribeConfig {
    /// Create a config with the service defaults
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: "https://api.elevenlabs.io".to_string(),
            model_id: "scribe_v1".to_string(),
            num_speakers: 2,
            diarize: true,
            tag_audio_events: false,
            request_export: false,
        }
    }
}
