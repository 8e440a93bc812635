//! Retention curve models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single point on a retention curve: the fraction of viewers still
/// watching at a given timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RetentionPoint {
    /// Position in the video, in seconds
    pub timestamp: f64,
    /// Fraction of viewers still watching, in [0, 1]
    pub percentage: f64,
}

/// The full retention curve for one video.
///
/// Points are ordered by strictly increasing timestamp and cover the video
/// from start to end. The curve is immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetentionCurve {
    /// Video this curve belongs to
    pub video_id: String,
    /// Ordered retention points
    pub points: Vec<RetentionPoint>,
}

impl RetentionCurve {
    /// Create a new retention curve.
    pub fn new(video_id: impl Into<String>, points: Vec<RetentionPoint>) -> Self {
        Self {
            video_id: video_id.into(),
            points,
        }
    }
}
