//! Sliding-window hotspot detection.

use rlens_models::{DetectedHotspot, HotspotType, RetentionCurve};
use tracing::debug;

/// Lookback distance in point-index positions, not seconds.
pub const WINDOW_SIZE: usize = 5;

/// At or below this signed change (percentage points): significant drop.
const DROP_THRESHOLD: i32 = -10;
/// At or above this signed change: retention rise worth flagging.
const RISE_THRESHOLD: i32 = 5;
/// At or above this signed change: engagement peak rather than interest point.
const PEAK_THRESHOLD: i32 = 20;

/// Scan the curve and classify significant retention changes.
///
/// For each index `i` from `WINDOW_SIZE` onward, the change is measured
/// against the point `WINDOW_SIZE` positions back and rounded to whole
/// percentage points. Every qualifying window position emits a hotspot;
/// adjacent windows around the same underlying event are not merged.
///
/// Curves with `WINDOW_SIZE` points or fewer produce no hotspots.
pub fn detect(curve: &RetentionCurve) -> Vec<DetectedHotspot> {
    let points = &curve.points;
    let mut hotspots = Vec::new();

    if points.len() <= WINDOW_SIZE {
        return hotspots;
    }

    for i in WINDOW_SIZE..points.len() {
        let change = points[i].percentage - points[i - WINDOW_SIZE].percentage;
        let percentage_change = (change * 100.0).round() as i32;

        let kind = if percentage_change <= DROP_THRESHOLD {
            HotspotType::SignificantDrop
        } else if percentage_change >= PEAK_THRESHOLD {
            HotspotType::EngagementPeak
        } else if percentage_change >= RISE_THRESHOLD {
            HotspotType::InterestPoint
        } else {
            continue;
        };

        hotspots.push(DetectedHotspot {
            timestamp: points[i].timestamp,
            percentage_change,
            kind,
        });
    }

    debug!(
        video_id = %curve.video_id,
        count = hotspots.len(),
        "detected retention hotspots"
    );

    hotspots
}
