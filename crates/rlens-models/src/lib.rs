//! Shared data models for RetentionLens.
//!
//! This crate provides Serde-serializable types for:
//! - Retention curves and transcripts (pipeline inputs)
//! - Hotspots at each stage of enrichment
//! - Actionable insights and the composite analysis report
//!
//! Wire field names match the original JS-facing contract (camelCase,
//! SCREAMING_SNAKE_CASE hotspot type tags), so serialized output stays
//! compatible with existing consumers.

pub mod hotspot;
pub mod insight;
pub mod retention;
pub mod transcript;

// Re-export common types
pub use hotspot::{
    format_timestamp, AlignedHotspot, DetectedHotspot, Hotspot, HotspotType, HotspotTypeParseError,
};
pub use insight::{ActionableInsight, RetentionAnalysis};
pub use retention::{RetentionCurve, RetentionPoint};
pub use transcript::{Transcript, TranscriptSegment};
