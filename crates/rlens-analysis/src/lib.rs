//! Retention curve analysis passes.
//!
//! This crate provides the pure, deterministic stages of the pipeline:
//! - Curve validation
//! - Sliding-window hotspot detection
//! - Ranking and selection of the most significant hotspots
//! - Alignment of hotspots to transcript text
//!
//! No I/O and no suspension points; everything here is a plain function of
//! its inputs.

pub mod align;
pub mod detector;
pub mod error;
pub mod ranker;
pub mod validate;

pub use align::align;
pub use detector::{detect, WINDOW_SIZE};
pub use error::{AnalysisError, AnalysisResult};
pub use ranker::{select_top, MAX_HOTSPOTS};
pub use validate::validate_curve;
