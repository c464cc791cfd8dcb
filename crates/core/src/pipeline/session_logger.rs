use std::time::Instant;

use crate::analysis::domain::asymmetry_result::{Assessment, AsymmetryResult};
use crate::pipeline::session_error::SessionError;

/// Observer for the outcome of every frame and capture in one session.
pub trait SessionLogger: Send {
    /// A frame produced a result. `analyze_ms` covers scoring only.
    fn analyzed(&mut self, frame_index: usize, result: &AsymmetryResult, analyze_ms: f64);

    /// A frame reached the session but could not be scored.
    fn rejected(&mut self, frame_index: usize, error: &SessionError);

    /// Comparison images were built from `frame_index`.
    fn captured(&mut self, frame_index: usize, result: &AsymmetryResult, compose_ms: f64);

    /// Reports and resets the accumulated session figures. Default: no-op.
    fn summary(&mut self) {}
}

/// Silent logger that discards all events.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn analyzed(&mut self, _frame_index: usize, _result: &AsymmetryResult, _analyze_ms: f64) {}
    fn rejected(&mut self, _frame_index: usize, _error: &SessionError) {}
    fn captured(&mut self, _frame_index: usize, _result: &AsymmetryResult, _compose_ms: f64) {}
}

#[derive(Debug, Default, Clone, PartialEq)]
struct SessionStats {
    analyzed: usize,
    no_face: usize,
    rejected_other: usize,
    capture_ready: usize,
    captures: usize,
    bands: [usize; 5],
    score_sum: f64,
    analyze_ms: f64,
    compose_ms: f64,
}

impl SessionStats {
    fn frames(&self) -> usize {
        self.analyzed + self.no_face + self.rejected_other
    }
}

/// Tallies assessment bands, capture readiness and captures, and reports
/// them through the `log` crate.
///
/// Progress is logged every `progress_every` frames; the full breakdown is
/// logged when the session ends.
pub struct SessionStatsLogger {
    progress_every: usize,
    started: Instant,
    stats: SessionStats,
}

impl SessionStatsLogger {
    pub fn new(progress_every: usize) -> Self {
        Self {
            progress_every: progress_every.max(1),
            started: Instant::now(),
            stats: SessionStats::default(),
        }
    }

    /// Returns the formatted summary, or `None` if no frame arrived.
    pub fn summary_string(&self) -> Option<String> {
        let s = &self.stats;
        let frames = s.frames();
        if frames == 0 {
            return None;
        }

        let mut lines = vec![format!(
            "Session summary ({frames} frames, {} analyzed, {:.1}s):",
            s.analyzed,
            self.started.elapsed().as_secs_f64()
        )];

        if s.no_face + s.rejected_other > 0 {
            lines.push(format!(
                "  rejected: {} without a face, {} other",
                s.no_face, s.rejected_other
            ));
        }

        if s.analyzed > 0 {
            let analyzed = s.analyzed as f64;
            lines.push(format!(
                "  capture-ready: {} of {} ({:.0}%)",
                s.capture_ready,
                s.analyzed,
                100.0 * s.capture_ready as f64 / analyzed
            ));
            lines.push(format!(
                "  average score: {:.1} (analysis avg {:.2}ms)",
                s.score_sum / analyzed,
                s.analyze_ms / analyzed
            ));
            for (band, count) in Assessment::ALL.iter().zip(s.bands) {
                if count > 0 {
                    lines.push(format!("  {:42}: {count}", band.label()));
                }
            }
        }

        if s.captures > 0 {
            lines.push(format!(
                "  captures: {} (compose avg {:.1}ms)",
                s.captures,
                s.compose_ms / s.captures as f64
            ));
        }

        Some(lines.join("\n"))
    }

    fn log_progress(&self) {
        let frames = self.stats.frames();
        if frames % self.progress_every == 0 {
            log::info!(
                "Frames: {frames} received, {} analyzed, {} capture-ready",
                self.stats.analyzed,
                self.stats.capture_ready
            );
        }
    }
}

impl Default for SessionStatsLogger {
    fn default() -> Self {
        Self::new(25)
    }
}

impl SessionLogger for SessionStatsLogger {
    fn analyzed(&mut self, _frame_index: usize, result: &AsymmetryResult, analyze_ms: f64) {
        let s = &mut self.stats;
        s.analyzed += 1;
        s.bands[result.assessment as usize] += 1;
        s.score_sum += result.total_score;
        s.analyze_ms += analyze_ms;
        if result.capture_ready {
            s.capture_ready += 1;
        }
        self.log_progress();
    }

    fn rejected(&mut self, frame_index: usize, error: &SessionError) {
        match error {
            SessionError::NoFaceDetected => self.stats.no_face += 1,
            _ => self.stats.rejected_other += 1,
        }
        log::debug!("Frame {frame_index} rejected: {error}");
        self.log_progress();
    }

    fn captured(&mut self, frame_index: usize, result: &AsymmetryResult, compose_ms: f64) {
        self.stats.captures += 1;
        self.stats.compose_ms += compose_ms;
        log::info!(
            "Captured frame {frame_index} (score {:.1}, {})",
            result.total_score,
            result.assessment
        );
    }

    fn summary(&mut self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
        self.stats = SessionStats::default();
        self.started = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::asymmetry_result::{
        DistanceFeedback, NoseDirection, VerticalDirection,
    };

    fn result(total_score: f64, capture_ready: bool) -> AsymmetryResult {
        AsymmetryResult {
            eye_diff: 0.0,
            mouth_diff: 0.0,
            nose_offset: 0.0,
            eye_asymmetry: 0.0,
            mouth_asymmetry: 0.0,
            nose_asymmetry: 0.0,
            eye_direction: VerticalDirection::Symmetrical,
            mouth_direction: VerticalDirection::Symmetrical,
            nose_direction: NoseDirection::Symmetrical,
            total_score,
            assessment: Assessment::from_score(total_score),
            key_points: [(0, 0); 6],
            capture_ready,
            center_alignment_score: 0.0,
            distance_feedback: DistanceFeedback::GoodDistance,
            face_width: 160.0,
            face_stability: 0.0,
            face_center_x: 320.0,
        }
    }

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullSessionLogger;
        logger.analyzed(0, &result(3.0, true), 1.0);
        logger.rejected(1, &SessionError::NoFaceDetected);
        logger.captured(0, &result(3.0, true), 20.0);
        logger.summary();
    }

    #[test]
    fn test_analyzed_frames_are_tallied_by_band() {
        let mut logger = SessionStatsLogger::new(10);
        logger.analyzed(0, &result(2.0, true), 1.0);
        logger.analyzed(1, &result(4.0, false), 1.0);
        logger.analyzed(2, &result(35.0, false), 1.0);

        let s = &logger.stats;
        assert_eq!(s.analyzed, 3);
        assert_eq!(s.capture_ready, 1);
        assert_eq!(s.bands, [2, 0, 0, 0, 1]);
    }

    #[test]
    fn test_rejections_split_by_cause() {
        let mut logger = SessionStatsLogger::new(10);
        logger.rejected(0, &SessionError::NoFaceDetected);
        logger.rejected(
            1,
            &SessionError::InsufficientLandmarks {
                found: 68,
                required: 468,
            },
        );
        logger.rejected(2, &SessionError::NoFaceDetected);

        assert_eq!(logger.stats.no_face, 2);
        assert_eq!(logger.stats.rejected_other, 1);
        assert_eq!(logger.stats.frames(), 3);
    }

    #[test]
    fn test_summary_reports_readiness_bands_and_captures() {
        let mut logger = SessionStatsLogger::new(10);
        logger.analyzed(0, &result(10.0, true), 1.0);
        logger.analyzed(1, &result(20.0, false), 1.0);
        logger.rejected(2, &SessionError::NoFaceDetected);
        logger.captured(1, &result(20.0, false), 30.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Session summary (3 frames, 2 analyzed"));
        assert!(summary.contains("rejected: 1 without a face, 0 other"));
        assert!(summary.contains("capture-ready: 1 of 2 (50%)"));
        assert!(summary.contains("average score: 15.0"));
        assert!(summary.contains("slight asymmetry"));
        assert!(summary.contains("moderate asymmetry"));
        assert!(!summary.contains("very symmetrical"));
        assert!(summary.contains("captures: 1 (compose avg 30.0ms)"));
    }

    #[test]
    fn test_summary_without_analyzed_frames() {
        let mut logger = SessionStatsLogger::new(10);
        logger.rejected(0, &SessionError::NoFaceDetected);
        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("0 analyzed"));
        assert!(!summary.contains("capture-ready"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = SessionStatsLogger::new(10);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_summary_resets_for_the_next_session() {
        let mut logger = SessionStatsLogger::new(10);
        logger.analyzed(0, &result(2.0, true), 1.0);
        logger.captured(0, &result(2.0, true), 5.0);

        logger.summary();

        assert_eq!(logger.stats, SessionStats::default());
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_progress_interval_is_at_least_one() {
        assert_eq!(SessionStatsLogger::new(0).progress_every, 1);
        assert_eq!(SessionStatsLogger::default().progress_every, 25);
    }
}
