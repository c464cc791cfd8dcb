use crate::analysis::domain::landmark_set::LandmarkSet;
use crate::shared::frame::Frame;

/// Domain interface for the facial-landmark detector.
///
/// Returns `Ok(None)` when no face is found. Implementations may be
/// stateful (e.g., tracking across frames), hence `&mut self`.
pub trait LandmarkDetector: Send {
    fn detect(&mut self, frame: &Frame)
        -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>>;
}
