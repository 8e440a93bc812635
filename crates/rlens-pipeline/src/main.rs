//! Retention analyzer binary.
//!
//! Reads a retention curve and transcript from JSON files (or falls back to
//! built-in sample data) and prints the full analysis as JSON.

use anyhow::Context;
use tracing::info;

use rlens_models::{RetentionCurve, Transcript};
use rlens_pipeline::{sample, AnalyzerConfig, RetentionAnalyzer};

const SAMPLE_DURATION_SECS: f64 = 600.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (curve, transcript): (RetentionCurve, Transcript) = match args.as_slice() {
        [] => {
            info!("no input files given, analyzing built-in sample data");
            (
                sample::sample_curve("sample-video", SAMPLE_DURATION_SECS),
                sample::sample_transcript("sample-video", SAMPLE_DURATION_SECS),
            )
        }
        [curve_path, transcript_path] => (
            read_json(curve_path).with_context(|| format!("reading curve from {curve_path}"))?,
            read_json(transcript_path)
                .with_context(|| format!("reading transcript from {transcript_path}"))?,
        ),
        _ => anyhow::bail!("usage: rlens-analyzer [<curve.json> <transcript.json>]"),
    };

    let config = AnalyzerConfig::from_env();
    if config.ai.is_none() {
        info!("no generation service configured, using deterministic fallback copy");
    }

    let analyzer = RetentionAnalyzer::new(config)?;
    let analysis = analyzer.analyze(&curve, &transcript).await?;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
