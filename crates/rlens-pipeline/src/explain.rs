//! Per-hotspot explanation generation.

use rlens_ai_client::{AiClient, AiResult};
use rlens_models::{format_timestamp, AlignedHotspot, Hotspot};
use tracing::warn;

use crate::fallback;

/// Produce a fully-enriched hotspot.
///
/// The generation service is tried when a client is supplied; any failure
/// (network, bad status, malformed JSON) degrades this one hotspot to the
/// deterministic fallback without affecting its siblings. This function
/// never fails.
pub async fn explain_hotspot(
    ai: Option<&AiClient>,
    hotspot: &AlignedHotspot,
    video_id: &str,
) -> Hotspot {
    if let Some(client) = ai {
        match explain_with_ai(client, hotspot, video_id).await {
            Ok(enriched) => return enriched,
            Err(e) => warn!(
                timestamp = hotspot.timestamp,
                "explanation generation failed, using fallback: {}", e
            ),
        }
    }

    fallback_hotspot(hotspot, video_id)
}

/// Prompt for one hotspot explanation.
fn explanation_prompt(hotspot: &AlignedHotspot) -> String {
    let caption = hotspot.caption_text.as_deref().unwrap_or("No caption available");

    format!(
        "You are analyzing audience retention data for a video. At timestamp {}, \
         there is a {} with a {}% change in viewer retention.\n\
         The caption text at this point is: \"{}\"\n\n\
         Based on this information, provide:\n\
         1. Two likely reasons for this viewer behavior\n\
         2. One specific, actionable suggestion to improve or leverage this in future videos\n\n\
         Output your answer in JSON format with these fields:\n\
         - \"reasons\": array of two strings explaining possible reasons\n\
         - \"suggestion\": string with one specific actionable suggestion",
        format_timestamp(hotspot.timestamp),
        hotspot.kind.label(),
        hotspot.percentage_change,
        caption
    )
}

async fn explain_with_ai(
    client: &AiClient,
    hotspot: &AlignedHotspot,
    video_id: &str,
) -> AiResult<Hotspot> {
    let response = client.generate_json(&explanation_prompt(hotspot)).await?;

    // Missing fields default rather than failing the hotspot.
    let reasons = response
        .get("reasons")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|r| r.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();
    let suggestion = response
        .get("suggestion")
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    Ok(Hotspot::new(video_id, hotspot, reasons, suggestion))
}

fn fallback_hotspot(hotspot: &AlignedHotspot, video_id: &str) -> Hotspot {
    let reasons = fallback::hotspot_reasons(hotspot.kind)
        .iter()
        .map(|r| r.to_string())
        .collect();

    Hotspot::new(
        video_id,
        hotspot,
        reasons,
        fallback::hotspot_suggestion(hotspot.kind),
    )
}
