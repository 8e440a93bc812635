//! Synthetic sample data.
//!
//! A realistic retention curve and transcript for demos and end-to-end
//! runs: a steep opening drop, an interest point around 20% in, a sharp
//! drop at 32%, an engagement peak at 80%, and a tail-off at the end.

use rand::Rng;
use rlens_models::{RetentionCurve, RetentionPoint, Transcript, TranscriptSegment};

const SAMPLE_POINTS: usize = 100;

/// Generate a sample retention curve with the canonical hotspot shape.
pub fn sample_curve(video_id: &str, duration_secs: f64) -> RetentionCurve {
    let mut rng = rand::thread_rng();
    let time_step = duration_secs / SAMPLE_POINTS as f64;

    let mut percentage: f64 = 1.0;
    let mut points = Vec::with_capacity(SAMPLE_POINTS);

    for i in 0..SAMPLE_POINTS {
        if i < 5 {
            // Opening drop-off
            percentage -= 0.03 + rng.gen_range(0.0..0.02);
        } else if i == 20 {
            percentage += 0.15;
        } else if i == 32 {
            percentage -= 0.32;
        } else if i == 80 {
            percentage += 0.22;
        } else if i > 90 {
            // End-of-video decline
            percentage -= 0.05 + rng.gen_range(0.0..0.03);
        } else {
            // Gradual decline with mild noise
            percentage -= 0.003 + rng.gen_range(0.0..0.006);
        }

        percentage = percentage.clamp(0.0, 1.0);
        points.push(RetentionPoint {
            timestamp: i as f64 * time_step,
            percentage,
        });
    }

    RetentionCurve::new(video_id, points)
}

/// Generate a sample transcript with one segment per 30 seconds.
pub fn sample_transcript(video_id: &str, duration_secs: f64) -> Transcript {
    let segment_length = 30.0;
    let segment_count = (duration_secs / segment_length).ceil() as usize;

    let segments = (0..segment_count)
        .map(|i| {
            let start_time = i as f64 * segment_length;
            TranscriptSegment {
                start_time,
                end_time: (start_time + segment_length).min(duration_secs),
                text: format!(
                    "Transcript for segment {}, covering the next part of the video.",
                    i + 1
                ),
            }
        })
        .collect();

    Transcript::new(video_id, segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlens_analysis::{detect, validate_curve};
    use rlens_models::HotspotType;

    #[test]
    fn test_sample_curve_is_valid() {
        let curve = sample_curve("sample", 600.0);
        assert_eq!(curve.points.len(), SAMPLE_POINTS);
        assert!(validate_curve(&curve).is_ok());
        assert!(curve
            .points
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.percentage)));
    }

    #[test]
    fn test_sample_curve_has_detectable_hotspots() {
        let curve = sample_curve("sample", 600.0);
        let hotspots = detect(&curve);

        assert!(hotspots
            .iter()
            .any(|h| h.kind == HotspotType::SignificantDrop));
    }

    #[test]
    fn test_sample_transcript_covers_duration() {
        let transcript = sample_transcript("sample", 95.0);
        assert_eq!(transcript.segments.len(), 4);
        assert_eq!(transcript.segments[3].end_time, 95.0);
    }
}
