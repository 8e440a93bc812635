//! Hotspot ranking and selection.

use rlens_models::DetectedHotspot;

/// Upper bound on hotspots passed to the explanation stage. This is the
/// only bound between an arbitrarily long curve and per-hotspot generation
/// calls, so it caps cost and latency.
pub const MAX_HOTSPOTS: usize = 5;

/// Order hotspots by descending change magnitude and keep the top
/// `MAX_HOTSPOTS`.
///
/// The sort is stable: hotspots with equal magnitude keep their original
/// detection order.
pub fn select_top(mut hotspots: Vec<DetectedHotspot>) -> Vec<DetectedHotspot> {
    hotspots.sort_by(|a, b| {
        b.percentage_change
            .abs()
            .cmp(&a.percentage_change.abs())
    });
    hotspots.truncate(MAX_HOTSPOTS);
    hotspots
}
