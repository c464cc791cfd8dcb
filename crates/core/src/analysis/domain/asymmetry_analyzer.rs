//! Per-frame facial symmetry scoring.
//!
//! Six face-mesh points are projected into pixel space. Vertical tilt of the
//! eye and mouth lines plus horizontal nose drift from the eye midpoint make
//! up the composite score; framing (face width, centering, steadiness)
//! decides whether the frame is a good capture candidate.

use crate::analysis::domain::analyzer_thresholds::{AnalyzerThresholds, ThresholdsError};
use crate::analysis::domain::asymmetry_result::{
    Assessment, AsymmetryResult, DistanceFeedback, NoseDirection, VerticalDirection,
};
use crate::analysis::domain::landmark_set::LandmarkSet;
use crate::shared::constants::{
    CHIN, LEFT_EYE_OUTER, LEFT_MOUTH, MAX_SCORE, NOSE_TIP, RIGHT_EYE_OUTER, RIGHT_MOUTH,
};

#[derive(Debug, Clone, Default)]
pub struct AsymmetryAnalyzer {
    thresholds: AnalyzerThresholds,
}

impl AsymmetryAnalyzer {
    /// Rejects thresholds that fail [`AnalyzerThresholds::validate`], so the
    /// score can never be NaN.
    pub fn new(thresholds: AnalyzerThresholds) -> Result<Self, ThresholdsError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Scores one frame. Returns `None` when the set is smaller than the
    /// face-mesh contract requires.
    pub fn analyze(
        &self,
        landmarks: &LandmarkSet,
        width: u32,
        height: u32,
    ) -> Option<AsymmetryResult> {
        if !landmarks.is_complete() {
            return None;
        }

        let pixel = |index: usize| -> Option<(i32, i32)> {
            landmarks.get(index).map(|kp| kp.to_pixel(width, height))
        };
        let left_eye = pixel(LEFT_EYE_OUTER)?;
        let right_eye = pixel(RIGHT_EYE_OUTER)?;
        let nose_tip = pixel(NOSE_TIP)?;
        let chin = pixel(CHIN)?;
        let left_mouth = pixel(LEFT_MOUTH)?;
        let right_mouth = pixel(RIGHT_MOUTH)?;

        // Pixels may lie far outside the frame; combine them in i64.
        let eye_diff = (i64::from(left_eye.1) - i64::from(right_eye.1)) as f64;
        let mouth_diff = (i64::from(left_mouth.1) - i64::from(right_mouth.1)) as f64;

        let face_center_x = (i64::from(left_eye.0) + i64::from(right_eye.0)) as f64 / 2.0;
        let nose_offset = nose_tip.0 as f64 - face_center_x;

        let face_width = (i64::from(right_eye.0) - i64::from(left_eye.0)).abs() as f64;
        let position_offset = (face_center_x - width as f64 / 2.0).abs();
        let face_stability = eye_diff.abs() + mouth_diff.abs();

        let t = &self.thresholds;
        let distance_feedback = if face_width < t.min_face_width {
            DistanceFeedback::MoveCloser
        } else if face_width > t.max_face_width {
            DistanceFeedback::MoveBack
        } else {
            DistanceFeedback::GoodDistance
        };

        let capture_ready = (t.min_face_width..=t.max_face_width).contains(&face_width)
            && nose_offset.abs() < t.max_nose_offset
            && position_offset < t.max_position_offset
            && face_stability < t.max_face_stability;

        let raw_total =
            (eye_diff.abs() + mouth_diff.abs() + nose_offset.abs()) * t.score_multiplier;
        let total_score = round1(raw_total.clamp(0.0, MAX_SCORE));

        log::debug!(
            "eye={eye_diff} mouth={mouth_diff} nose={nose_offset:.1} width={face_width} score={total_score}"
        );

        Some(AsymmetryResult {
            eye_diff: round1(-eye_diff),
            mouth_diff: round1(-mouth_diff),
            nose_offset: round1(-nose_offset),
            eye_asymmetry: round1(eye_diff.abs()),
            mouth_asymmetry: round1(mouth_diff.abs()),
            nose_asymmetry: round1(nose_offset.abs()),
            eye_direction: VerticalDirection::from_delta(eye_diff),
            mouth_direction: VerticalDirection::from_delta(mouth_diff),
            nose_direction: NoseDirection::from_offset(nose_offset),
            total_score,
            assessment: Assessment::from_score(total_score),
            key_points: [left_eye, right_eye, nose_tip, chin, left_mouth, right_mouth],
            capture_ready,
            center_alignment_score: round1(nose_offset.abs()),
            distance_feedback,
            face_width,
            face_stability: round1(face_stability),
            face_center_x,
        })
    }
}

/// Rounds to one decimal place, normalizing `-0.0` to `0.0`.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}
