//! Actionable insight and composite analysis models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::hotspot::Hotspot;

/// Cross-cutting recommendation derived from a video's full hotspot set.
///
/// Stateless, recomputed on each pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionableInsight {
    /// Three specific things to avoid in future videos
    pub to_avoid: Vec<String>,
    /// Three specific things to include in future videos
    pub to_include: Vec<String>,
    /// 2-3 sentence recommendation for structuring future videos
    pub ai_recommendation: String,
    /// One-sentence estimate of the potential retention improvement
    pub estimated_improvement: String,
}

/// Complete output of one pipeline invocation for one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetentionAnalysis {
    /// Video that was analyzed
    pub video_id: String,
    /// Enriched hotspots, at most 5, most significant first
    pub hotspots: Vec<Hotspot>,
    /// Summary recommendation across all hotspots
    pub insight: ActionableInsight,
    /// When this analysis was produced
    pub generated_at: DateTime<Utc>,
}
