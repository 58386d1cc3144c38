use crate::models::SpeakerSegment;

/// Format segments as one `speaker_id: full_text` line per segment
///
/// Every segment gets its own line, in segment order, each terminated by a
/// newline. Empty segments still produce a line so the speaker turn stays
/// visible.
pub fn render_transcript(segments: &[SpeakerSegment]) -> String {
    let mut output = String::new();

    for segment in segments {
        output.push_str(&segment.speaker_id);
        output.push_str(": ");
        output.push_str(&segment.full_text);
        output.push('\n');
    }

    output
}
