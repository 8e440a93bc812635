//! Pipeline entry point.

use chrono::Utc;
use futures_util::future::join_all;
use tracing::info;

use rlens_ai_client::AiClient;
use rlens_analysis::{align, detect, select_top, validate_curve};
use rlens_models::{AlignedHotspot, RetentionAnalysis, RetentionCurve, Transcript};

use crate::config::AnalyzerConfig;
use crate::error::PipelineResult;
use crate::explain::explain_hotspot;
use crate::insight::generate_insight;

/// Runs the full analysis for one video at a time.
///
/// Stateless between invocations; each call owns its inputs and produces an
/// independent result.
pub struct RetentionAnalyzer {
    ai: Option<AiClient>,
}

impl RetentionAnalyzer {
    /// Create an analyzer from explicit configuration.
    pub fn new(config: AnalyzerConfig) -> PipelineResult<Self> {
        let ai = match config.ai {
            Some(ai_config) => Some(AiClient::new(ai_config)?),
            None => None,
        };

        Ok(Self { ai })
    }

    /// Create an analyzer from environment variables.
    pub fn from_env() -> PipelineResult<Self> {
        Self::new(AnalyzerConfig::from_env())
    }

    /// Analyzer with the generation service disabled; every explanation
    /// uses the deterministic fallback.
    pub fn without_ai() -> Self {
        Self { ai: None }
    }

    /// Run the pipeline: detect, rank, align, explain, aggregate.
    ///
    /// The output is always schema-complete, even when the generation
    /// service is unavailable for every call.
    pub async fn analyze(
        &self,
        curve: &RetentionCurve,
        transcript: &Transcript,
    ) -> PipelineResult<RetentionAnalysis> {
        validate_curve(curve)?;

        let detected = detect(curve);
        let selected = select_top(detected);
        let aligned: Vec<AlignedHotspot> = selected
            .iter()
            .map(|hotspot| align(hotspot, transcript))
            .collect();

        info!(
            video_id = %curve.video_id,
            hotspots = aligned.len(),
            ai = self.ai.is_some(),
            "explaining retention hotspots"
        );

        // Explanations are independent; fan out and wait for the full set.
        // Each future resolves to a hotspot (failures degrade internally),
        // so no sibling is ever cancelled.
        let hotspots = join_all(
            aligned
                .iter()
                .map(|hotspot| explain_hotspot(self.ai.as_ref(), hotspot, &curve.video_id)),
        )
        .await;

        let insight = generate_insight(self.ai.as_ref(), &hotspots).await;

        Ok(RetentionAnalysis {
            video_id: curve.video_id.clone(),
            hotspots,
            insight,
            generated_at: Utc::now(),
        })
    }
}
