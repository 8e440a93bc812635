//! Pipeline error types.

use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors the pipeline can surface to its caller.
///
/// Generation-service failures are never here: they degrade to fallback
/// content at the hotspot or insight level instead of propagating.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Analysis error: {0}")]
    Analysis(#[from] rlens_analysis::AnalysisError),

    #[error("Client error: {0}")]
    Client(#[from] rlens_ai_client::AiError),
}
