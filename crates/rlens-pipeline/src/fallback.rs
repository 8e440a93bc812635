//! Deterministic fallback copy.
//!
//! Used whenever the generation service is absent or fails. Selection is
//! keyed purely by hotspot type, so repeated calls always produce identical
//! output.

use rlens_models::{ActionableInsight, HotspotType};

/// Two canned reasons for a hotspot of the given type.
pub fn hotspot_reasons(kind: HotspotType) -> [&'static str; 2] {
    match kind {
        HotspotType::SignificantDrop => [
            "The segment likely runs long on explanation without a visual change to hold attention",
            "Viewers may have already gotten the answer they came for and see a natural exit point",
        ],
        HotspotType::InterestPoint => [
            "A concrete demonstration or example likely pulled viewers back in",
            "The content here may address a specific question viewers came searching for",
        ],
        HotspotType::EngagementPeak => [
            "This segment likely delivers the core payoff the video promised",
            "Extra value such as a resource, reveal, or comparison tends to get rewatched",
        ],
    }
}

/// One canned suggestion for a hotspot of the given type.
pub fn hotspot_suggestion(kind: HotspotType) -> &'static str {
    match kind {
        HotspotType::SignificantDrop => {
            "Tighten this section and add a visual change or demonstration to keep viewers engaged"
        }
        HotspotType::InterestPoint => {
            "Surface moments like this one earlier and reference them in the introduction"
        }
        HotspotType::EngagementPeak => {
            "Tease this payoff in the opening and structure more segments around it"
        }
    }
}

/// The canned cross-cutting insight.
pub fn insight() -> ActionableInsight {
    ActionableInsight {
        to_avoid: vec![
            "Long unbroken explanation segments without visual variety".to_string(),
            "Technical detail delivered without an on-screen demonstration".to_string(),
            "Saving bonus resources or payoffs for the final minutes only".to_string(),
        ],
        to_include: vec![
            "Before/after demonstrations for each major point".to_string(),
            "A mention of any downloadable resource within the first few minutes".to_string(),
            "Budget alternatives alongside premium recommendations".to_string(),
        ],
        ai_recommendation: "Structure the next video around its strongest payoff: open with the \
                            value proposition, demonstrate each point visually, and return to the \
                            payoff before closing. Keep explanation segments short and separate \
                            them with visible changes on screen."
            .to_string(),
        estimated_improvement: "Restructuring along these lines could improve average view \
                                duration by an estimated 15-20%."
            .to_string(),
    }
}
