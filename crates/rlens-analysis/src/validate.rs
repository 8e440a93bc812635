//! Retention curve validation.

use rlens_models::RetentionCurve;

use crate::error::{AnalysisError, AnalysisResult};

/// Check that a curve is usable by the detector.
///
/// A curve must have at least one point and strictly increasing timestamps.
/// Violations indicate bad upstream data and fail fast.
pub fn validate_curve(curve: &RetentionCurve) -> AnalysisResult<()> {
    if curve.points.is_empty() {
        return Err(AnalysisError::invalid_input(format!(
            "retention curve for {} has no points",
            curve.video_id
        )));
    }

    for pair in curve.points.windows(2) {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(AnalysisError::invalid_input(format!(
                "retention curve for {} is not strictly increasing at timestamp {}",
                curve.video_id, pair[1].timestamp
            )));
        }
    }

    Ok(())
}
