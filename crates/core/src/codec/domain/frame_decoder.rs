use crate::shared::codec_error::CodecError;
use crate::shared::frame::Frame;

/// Decodes a transport payload into an RGB frame.
pub trait FrameDecoder: Send {
    /// `index` is the frame's position within the session.
    fn decode(&self, payload: &str, index: usize) -> Result<Frame, CodecError>;
}
