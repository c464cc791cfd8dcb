use std::time::Instant;

use crate::analysis::domain::landmark_detector::LandmarkDetector;
use crate::codec::domain::frame_decoder::FrameDecoder;
use crate::pipeline::analysis_report::{response_json, AnalysisReport};
use crate::pipeline::session_error::SessionError;
use crate::pipeline::symmetry_session::SymmetrySession;
use crate::shared::constants::CAPTURE_REQUEST_MESSAGE;

/// Text-message dispatcher for one client connection: decode → detect → analyze,
/// or capture.
///
/// Every message other than the capture request is treated as a base64
/// encoded frame. Frames are indexed in arrival order, counting frames that
/// fail to decode, so indices line up with the client's send order.
pub struct ProcessMessageUseCase {
    session: SymmetrySession,
    decoder: Box<dyn FrameDecoder>,
    detector: Box<dyn LandmarkDetector>,
    next_index: usize,
}

impl ProcessMessageUseCase {
    pub fn new(
        session: SymmetrySession,
        decoder: Box<dyn FrameDecoder>,
        detector: Box<dyn LandmarkDetector>,
    ) -> Self {
        Self {
            session,
            decoder,
            detector,
            next_index: 0,
        }
    }

    pub fn handle(&mut self, message: &str) -> Result<AnalysisReport, SessionError> {
        if message.trim() == CAPTURE_REQUEST_MESSAGE {
            log::debug!("Capture requested");
            return self.session.on_capture_request();
        }

        let index = self.next_index;
        self.next_index += 1;

        let frame = self.decoder.decode(message, index).map_err(|e| {
            log::warn!("Frame {index}: {e}");
            SessionError::from(e)
        })?;

        let start = Instant::now();
        let landmarks = self
            .detector
            .detect(&frame)
            .map_err(|e| SessionError::Detection(e.to_string()))?;
        log::trace!(
            "Frame {index}: detection took {:.1}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        self.session.on_frame(frame, landmarks)
    }

    /// Handles a message and returns the JSON text to send back.
    pub fn handle_to_json(&mut self, message: &str) -> String {
        response_json(&self.handle(message))
    }

    /// Ends the connection: clears session state and resets frame numbering.
    pub fn end(&mut self) {
        self.session.on_session_end();
        self.next_index = 0;
    }

    pub fn session(&self) -> &SymmetrySession {
        &self.session
    }
}
