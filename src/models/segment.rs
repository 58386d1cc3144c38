use serde::{Deserialize, Serialize};

/// A maximal run of consecutive words attributed to one speaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    /// Speaker that opened this segment
    pub speaker_id: String,
    /// Start timestamp in seconds (from the segment's first word)
    pub start: f64,
    /// Concatenated word texts, no separators inserted
    pub full_text: String,
}

impl SpeakerSegment {
    /// Whether the segment carries any text at all
    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }
}
