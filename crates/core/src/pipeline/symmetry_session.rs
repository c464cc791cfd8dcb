use std::time::Instant;

use crate::analysis::domain::asymmetry_analyzer::AsymmetryAnalyzer;
use crate::analysis::domain::asymmetry_result::AsymmetryResult;
use crate::analysis::domain::landmark_set::LandmarkSet;
use crate::composition::domain::symmetry_image_composer::SymmetryImageComposer;
use crate::composition::domain::symmetry_image_set::SymmetryImageSet;
use crate::pipeline::analysis_report::AnalysisReport;
use crate::pipeline::session_error::SessionError;
use crate::pipeline::session_logger::SessionLogger;
use crate::shared::constants::MIN_LANDMARKS;
use crate::shared::frame::Frame;

/// The last successfully analyzed frame together with its result.
///
/// Kept as one value so a capture never composes against a result that
/// belongs to a different frame.
#[derive(Clone, Debug)]
struct LastKnown {
    frame: Frame,
    result: AsymmetryResult,
}

/// State and behavior of one client connection.
///
/// The transport owns one session per connection and feeds it frames in
/// arrival order. Nothing is shared between sessions.
pub struct SymmetrySession {
    analyzer: AsymmetryAnalyzer,
    composer: SymmetryImageComposer,
    logger: Box<dyn SessionLogger>,
    last_known: Option<LastKnown>,
    captured: Option<SymmetryImageSet>,
}

impl SymmetrySession {
    pub fn new(
        analyzer: AsymmetryAnalyzer,
        composer: SymmetryImageComposer,
        logger: Box<dyn SessionLogger>,
    ) -> Self {
        Self {
            analyzer,
            composer,
            logger,
            last_known: None,
            captured: None,
        }
    }

    /// Analyzes one frame. `landmarks` is `None` when the detector found no face.
    ///
    /// On success the frame and result replace the cached last-known state,
    /// and any captured images are attached to the report. Failures leave the
    /// cache untouched.
    pub fn on_frame(
        &mut self,
        frame: Frame,
        landmarks: Option<LandmarkSet>,
    ) -> Result<AnalysisReport, SessionError> {
        let start = Instant::now();
        let result = match self.analyze(&frame, landmarks) {
            Ok(result) => result,
            Err(e) => {
                self.logger.rejected(frame.index(), &e);
                return Err(e);
            }
        };
        self.logger.analyzed(frame.index(), &result, elapsed_ms(start));

        let report = AnalysisReport::new(result.clone(), self.captured.clone());
        self.last_known = Some(LastKnown { frame, result });
        Ok(report)
    }

    /// Builds mirrored comparison images from the last analyzed frame.
    ///
    /// Repeated requests without a new frame recompute against the same
    /// cached frame.
    pub fn on_capture_request(&mut self) -> Result<AnalysisReport, SessionError> {
        let last = self
            .last_known
            .as_ref()
            .ok_or(SessionError::NothingToCapture)?;

        if !last.result.capture_ready {
            log::debug!("Capturing frame {} before it is capture-ready", last.frame.index());
        }

        let start = Instant::now();
        let images = self
            .composer
            .compose(&last.frame, last.result.face_center_x)?;
        self.logger.captured(last.frame.index(), &last.result, elapsed_ms(start));

        let report = AnalysisReport::new(last.result.clone(), Some(images.clone()));
        self.captured = Some(images);
        Ok(report)
    }

    /// Clears all cached state. The session may be reused afterwards.
    pub fn on_session_end(&mut self) {
        self.logger.summary();
        self.last_known = None;
        self.captured = None;
    }

    pub fn last_result(&self) -> Option<&AsymmetryResult> {
        self.last_known.as_ref().map(|l| &l.result)
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_known.as_ref().map(|l| &l.frame)
    }

    pub fn captured_images(&self) -> Option<&SymmetryImageSet> {
        self.captured.as_ref()
    }

    fn analyze(
        &self,
        frame: &Frame,
        landmarks: Option<LandmarkSet>,
    ) -> Result<AsymmetryResult, SessionError> {
        let landmarks = landmarks.ok_or(SessionError::NoFaceDetected)?;
        self.analyzer
            .analyze(&landmarks, frame.width(), frame.height())
            .ok_or(SessionError::InsufficientLandmarks {
                found: landmarks.len(),
                required: MIN_LANDMARKS,
            })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
