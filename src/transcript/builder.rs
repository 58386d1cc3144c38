use crate::models::{ScribeWord, SpeakerSegment};

/// Group an ordered word sequence into contiguous per-speaker segments
///
/// A segment boundary occurs exactly where the speaker label differs from
/// the previous word's label; gaps in time never split a segment. Word
/// texts are concatenated without separators, so the provider's spacing
/// entries survive unchanged and the segments reproduce the input text
/// exactly once, in order.
pub fn build_segments(words: &[ScribeWord]) -> Vec<SpeakerSegment> {
    let mut segments = Vec::new();
    let mut current: Option<SpeakerSegment> = None;

    for word in words {
        let speaker = word.speaker_label();
        let speaker_changed = !current
            .as_ref()
            .is_some_and(|segment| segment.speaker_id == speaker);

        if speaker_changed {
            if let Some(closed) = current.take() {
                segments.push(closed);
            }
            current = Some(SpeakerSegment {
                speaker_id: speaker.to_string(),
                start: word.start,
                full_text: String::new(),
            });
        }

        if let Some(segment) = current.as_mut() {
            segment.full_text.push_str(&word.text);
        }
    }

    // Flush the trailing segment
    if let Some(closed) = current {
        segments.push(closed);
    }

    segments
}
