//! Transcript models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single transcript segment covering `[start_time, end_time]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    /// Segment start, in seconds
    pub start_time: f64,
    /// Segment end, in seconds (greater than `start_time`)
    pub end_time: f64,
    /// Spoken text for this segment
    pub text: String,
}

impl TranscriptSegment {
    /// Whether this segment's time range contains the given timestamp.
    pub fn contains(&self, timestamp: f64) -> bool {
        self.start_time <= timestamp && timestamp <= self.end_time
    }
}

/// The transcript for one video.
///
/// Segments are ordered and non-overlapping by construction of the source;
/// gaps between segments are tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    /// Video this transcript belongs to
    pub video_id: String,
    /// Ordered transcript segments
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Create a new transcript.
    pub fn new(video_id: impl Into<String>, segments: Vec<TranscriptSegment>) -> Self {
        Self {
            video_id: video_id.into(),
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_contains() {
        let segment = TranscriptSegment {
            start_time: 10.0,
            end_time: 20.0,
            text: "hello".to_string(),
        };

        assert!(segment.contains(10.0));
        assert!(segment.contains(15.5));
        assert!(segment.contains(20.0));
        assert!(!segment.contains(9.9));
        assert!(!segment.contains(20.1));
    }

    #[test]
    fn test_transcript_field_names() {
        let transcript = Transcript::new(
            "abc123",
            vec![TranscriptSegment {
                start_time: 0.0,
                end_time: 30.0,
                text: "intro".to_string(),
            }],
        );

        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["videoId"], "abc123");
        assert_eq!(json["segments"][0]["startTime"], 0.0);
        assert_eq!(json["segments"][0]["endTime"], 30.0);
        assert_eq!(json["segments"][0]["text"], "intro");
    }
}
