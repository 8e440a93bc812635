//! Hotspot models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Classification of a retention hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotspotType {
    /// Retention fell sharply across the detection window
    SignificantDrop,
    /// Moderate retention gain, viewers re-engaging
    InterestPoint,
    /// Strong retention gain, often rewatches or inbound seeks
    EngagementPeak,
}

impl HotspotType {
    /// All hotspot types.
    pub const ALL: &'static [HotspotType] = &[
        HotspotType::SignificantDrop,
        HotspotType::InterestPoint,
        HotspotType::EngagementPeak,
    ];

    /// Wire tag, as used in serialized hotspots.
    pub fn as_str(&self) -> &'static str {
        match self {
            HotspotType::SignificantDrop => "SIGNIFICANT_DROP",
            HotspotType::InterestPoint => "INTEREST_POINT",
            HotspotType::EngagementPeak => "ENGAGEMENT_PEAK",
        }
    }

    /// Human-readable label, as embedded in generation prompts.
    pub fn label(&self) -> &'static str {
        match self {
            HotspotType::SignificantDrop => "drop",
            HotspotType::InterestPoint => "interest point",
            HotspotType::EngagementPeak => "engagement peak",
        }
    }
}

impl fmt::Display for HotspotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HotspotType {
    type Err = HotspotTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIGNIFICANT_DROP" => Ok(HotspotType::SignificantDrop),
            "INTEREST_POINT" => Ok(HotspotType::InterestPoint),
            "ENGAGEMENT_PEAK" => Ok(HotspotType::EngagementPeak),
            _ => Err(HotspotTypeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown hotspot type: {0}")]
pub struct HotspotTypeParseError(String);

/// A hotspot as emitted by the detector, before transcript alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectedHotspot {
    /// Position in the video, in seconds
    pub timestamp: f64,
    /// Signed retention change across the detection window, in whole
    /// percentage points
    pub percentage_change: i32,
    /// Classification of the change
    #[serde(rename = "type")]
    pub kind: HotspotType,
}

/// A detected hotspot with the transcript text covering its timestamp.
///
/// `caption_text` is `None` when the timestamp falls in a transcript gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlignedHotspot {
    pub timestamp: f64,
    pub percentage_change: i32,
    #[serde(rename = "type")]
    pub kind: HotspotType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_text: Option<String>,
}

impl AlignedHotspot {
    /// Attach caption text (or the lack of one) to a detected hotspot.
    pub fn new(detected: &DetectedHotspot, caption_text: Option<String>) -> Self {
        Self {
            timestamp: detected.timestamp,
            percentage_change: detected.percentage_change,
            kind: detected.kind,
            caption_text,
        }
    }
}

/// A fully-enriched hotspot, ready to cross the output boundary.
///
/// Immutable after enrichment; field names are a compatibility contract
/// for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// Unique within a single pipeline invocation
    pub id: String,
    /// Video this hotspot belongs to
    pub video_id: String,
    /// Classification of the change
    #[serde(rename = "type")]
    pub kind: HotspotType,
    /// Position in the video, in seconds
    pub timestamp: f64,
    /// Signed retention change, in whole percentage points
    pub percentage_change: i32,
    /// Transcript text at this point, empty when none covers it
    pub transcript_text: String,
    /// Two likely reasons for the viewer behavior
    pub reasons: Vec<String>,
    /// One actionable suggestion
    pub suggestion: String,
}

impl Hotspot {
    /// Build an enriched hotspot with a fresh collision-resistant id.
    pub fn new(
        video_id: impl Into<String>,
        aligned: &AlignedHotspot,
        reasons: Vec<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("hotspot-{}", Uuid::new_v4()),
            video_id: video_id.into(),
            kind: aligned.kind,
            timestamp: aligned.timestamp,
            percentage_change: aligned.percentage_change,
            transcript_text: aligned.caption_text.clone().unwrap_or_default(),
            reasons,
            suggestion: suggestion.into(),
        }
    }
}

/// Format a position in seconds as `M:SS`, floor-truncated.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(9.9), "0:09");
        assert_eq!(format_timestamp(65.0), "1:05");
        assert_eq!(format_timestamp(600.0), "10:00");
        assert_eq!(format_timestamp(754.3), "12:34");
    }

    #[test]
    fn test_hotspot_type_parse() {
        assert_eq!(
            "SIGNIFICANT_DROP".parse::<HotspotType>().unwrap(),
            HotspotType::SignificantDrop
        );
        assert_eq!(
            "ENGAGEMENT_PEAK".parse::<HotspotType>().unwrap(),
            HotspotType::EngagementPeak
        );
        assert!("peak".parse::<HotspotType>().is_err());
    }

    #[test]
    fn test_hotspot_wire_contract() {
        let aligned = AlignedHotspot {
            timestamp: 192.0,
            percentage_change: -32,
            kind: HotspotType::SignificantDrop,
            caption_text: Some("price comparison".to_string()),
        };
        let hotspot = Hotspot::new(
            "abc123",
            &aligned,
            vec!["one".to_string(), "two".to_string()],
            "do this",
        );

        let json = serde_json::to_value(&hotspot).unwrap();
        assert_eq!(json["videoId"], "abc123");
        assert_eq!(json["type"], "SIGNIFICANT_DROP");
        assert_eq!(json["percentageChange"], -32);
        assert_eq!(json["transcriptText"], "price comparison");
        assert_eq!(json["reasons"].as_array().unwrap().len(), 2);
        assert_eq!(json["suggestion"], "do this");
        assert!(json["id"].as_str().unwrap().starts_with("hotspot-"));
    }

    #[test]
    fn test_hotspot_ids_unique() {
        let aligned = AlignedHotspot {
            timestamp: 10.0,
            percentage_change: 22,
            kind: HotspotType::EngagementPeak,
            caption_text: None,
        };
        let a = Hotspot::new("v", &aligned, vec![], "");
        let b = Hotspot::new("v", &aligned, vec![], "");
        assert_ne!(a.id, b.id);
        assert_eq!(a.transcript_text, "");
    }
}
