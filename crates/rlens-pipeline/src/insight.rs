//! Cross-hotspot insight aggregation.

use rlens_ai_client::{AiClient, AiResult};
use rlens_models::{ActionableInsight, Hotspot};
use tracing::warn;

use crate::fallback;

/// Aggregate the full hotspot set into a single actionable insight.
///
/// Returns the deterministic fallback insight when no client is supplied,
/// the hotspot list is empty, or the generation call fails in any way.
/// This function never fails.
pub async fn generate_insight(ai: Option<&AiClient>, hotspots: &[Hotspot]) -> ActionableInsight {
    let client = match ai {
        Some(client) if !hotspots.is_empty() => client,
        _ => return fallback::insight(),
    };

    match insight_with_ai(client, hotspots).await {
        Ok(insight) => insight,
        Err(e) => {
            warn!("insight generation failed, using fallback: {}", e);
            fallback::insight()
        }
    }
}

/// One line per hotspot, as embedded in the aggregation prompt.
fn hotspot_digest(hotspots: &[Hotspot]) -> String {
    hotspots
        .iter()
        .map(|h| {
            format!(
                "Hotspot: {}. Change: {}%. Context: \"{}\". Reason: {}",
                h.kind,
                h.percentage_change,
                h.transcript_text,
                h.reasons.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn insight_prompt(hotspots: &[Hotspot]) -> String {
    format!(
        "Based on the following retention hotspots from a video:\n\n{}\n\n\
         Generate actionable insights for the creator's future videos as a JSON object \
         with these fields:\n\
         - \"toAvoid\": an array of 3 specific things to avoid (based on negative retention points)\n\
         - \"toInclude\": an array of 3 specific things to include (based on positive retention points)\n\
         - \"aiRecommendation\": a 2-3 sentence specific recommendation for structuring future videos\n\
         - \"estimatedImprovement\": a realistic estimate of potential retention improvement as a single sentence\n\n\
         IMPORTANT: Be specific and actionable. Don't use generic advice. Base recommendations \
         directly on the hotspots provided. Output in JSON format only.",
        hotspot_digest(hotspots)
    )
}

async fn insight_with_ai(client: &AiClient, hotspots: &[Hotspot]) -> AiResult<ActionableInsight> {
    let response = client.generate_json(&insight_prompt(hotspots)).await?;

    // Missing fields default rather than failing the insight.
    Ok(ActionableInsight {
        to_avoid: string_array(&response, "toAvoid"),
        to_include: string_array(&response, "toInclude"),
        ai_recommendation: string_field(&response, "aiRecommendation"),
        estimated_improvement: string_field(&response, "estimatedImprovement"),
    })
}

fn string_array(value: &serde_json::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(value: &serde_json::Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
