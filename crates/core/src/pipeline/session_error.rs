use thiserror::Error;

use crate::shared::codec_error::CodecError;

/// Per-frame or per-request failure. None of these end the session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no face detected")]
    NoFaceDetected,
    #[error("face analysis failed: {found} landmarks, at least {required} required")]
    InsufficientLandmarks { found: usize, required: usize },
    #[error("no face data to capture")]
    NothingToCapture,
    #[error("image processing failed: {0}")]
    ImageCodec(#[from] CodecError),
    #[error("landmark detection failed: {0}")]
    Detection(String),
}
