//! Pipeline configuration.

use rlens_ai_client::AiClientConfig;

/// Configuration for the retention analyzer.
///
/// The generation service is an explicit option here rather than an ambient
/// environment check: `None` selects the deterministic fallback path for
/// every explanation and insight.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Generation-service configuration, if one is available
    pub ai: Option<AiClientConfig>,
}

impl AnalyzerConfig {
    /// Create config from environment variables.
    ///
    /// A missing or empty `AI_API_KEY` selects the fallback path; it is not
    /// an error.
    pub fn from_env() -> Self {
        let has_key = std::env::var("AI_API_KEY")
            .map(|key| !key.is_empty())
            .unwrap_or(false);

        Self {
            ai: has_key.then(AiClientConfig::from_env),
        }
    }

    /// Config with the generation service disabled.
    pub fn without_ai() -> Self {
        Self { ai: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_ai() {
        assert!(AnalyzerConfig::without_ai().ai.is_none());
        assert!(AnalyzerConfig::default().ai.is_none());
    }
}
