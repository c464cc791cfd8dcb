use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::codec::domain::frame_decoder::FrameDecoder;
use crate::shared::codec_error::CodecError;
use crate::shared::frame::Frame;

/// Decodes base64-encoded JPEG/PNG payloads as sent by the browser client.
///
/// A leading `data:<mime>;base64,` prefix is tolerated.
pub struct Base64FrameDecoder;

impl Base64FrameDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Base64FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_data_url(payload: &str) -> &str {
    let payload = payload.trim();
    if payload.starts_with("data:") {
        if let Some((_, body)) = payload.split_once(',') {
            return body;
        }
    }
    payload
}

impl FrameDecoder for Base64FrameDecoder {
    fn decode(&self, payload: &str, index: usize) -> Result<Frame, CodecError> {
        let bytes = STANDARD.decode(strip_data_url(payload))?;
        let img = image::load_from_memory(&bytes)
            .map_err(CodecError::Decode)?
            .to_rgb8();
        let (width, height) = img.dimensions();
        Ok(Frame::new(img.into_raw(), width, height, 3, index))
    }
}
