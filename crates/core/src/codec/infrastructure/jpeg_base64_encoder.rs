use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use crate::codec::domain::image_encoder::ImageEncoder;
use crate::shared::codec_error::CodecError;
use crate::shared::constants::JPEG_QUALITY;
use crate::shared::frame::Frame;

/// Lossy JPEG encoding wrapped in standard base64, sized for network transport.
pub struct JpegBase64Encoder {
    quality: u8,
}

impl JpegBase64Encoder {
    /// `quality` is clamped to the JPEG range 1-100.
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for JpegBase64Encoder {
    fn default() -> Self {
        Self::new(JPEG_QUALITY)
    }
}

impl ImageEncoder for JpegBase64Encoder {
    fn encode(&self, frame: &Frame) -> Result<String, CodecError> {
        let color = match frame.channels() {
            1 => ExtendedColorType::L8,
            3 => ExtendedColorType::Rgb8,
            channels => return Err(CodecError::UnsupportedChannels { channels }),
        };
        let expected =
            frame.width() as usize * frame.height() as usize * frame.channels() as usize;
        if frame.data().len() != expected {
            return Err(CodecError::BufferMismatch {
                width: frame.width(),
                height: frame.height(),
            });
        }

        let mut buf = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut buf, self.quality);
            encoder
                .encode(frame.data(), frame.width(), frame.height(), color)
                .map_err(CodecError::Encode)?;
        }
        Ok(STANDARD.encode(&buf))
    }
}
