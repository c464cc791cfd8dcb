use thiserror::Error;

/// Failure while turning transport payloads into frames or frames into
/// transport payloads.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("unsupported frame layout: {channels} channels")]
    UnsupportedChannels { channels: u8 },
    #[error("frame buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },
}
