use crate::shared::codec_error::CodecError;
use crate::shared::frame::Frame;

/// Encodes a frame into a text-safe payload for transport to the client.
pub trait ImageEncoder: Send {
    fn encode(&self, frame: &Frame) -> Result<String, CodecError>;
}
