//! Retention hotspot analysis pipeline.
//!
//! This crate provides:
//! - The pipeline entry point: curve + transcript in, enriched hotspots and
//!   an actionable insight out
//! - Per-hotspot explanation generation with concurrent fan-out
//! - Insight aggregation across the hotspot set
//! - Deterministic fallback copy for when no generation service is configured
//! - Synthetic sample data for demos and end-to-end tests

pub mod config;
pub mod error;
pub mod explain;
pub mod fallback;
pub mod insight;
pub mod pipeline;
pub mod sample;

pub use config::AnalyzerConfig;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::RetentionAnalyzer;
