//! Hotspot-to-transcript alignment.

use rlens_models::{AlignedHotspot, DetectedHotspot, Transcript};

/// Attach the transcript text covering a hotspot's timestamp.
///
/// The first segment whose `[start_time, end_time]` range contains the
/// timestamp wins. A timestamp falling in a transcript gap leaves
/// `caption_text` unset; that is expected data, not an error.
pub fn align(hotspot: &DetectedHotspot, transcript: &Transcript) -> AlignedHotspot {
    let caption_text = transcript
        .segments
        .iter()
        .find(|segment| segment.contains(hotspot.timestamp))
        .map(|segment| segment.text.clone());

    AlignedHotspot::new(hotspot, caption_text)
}
