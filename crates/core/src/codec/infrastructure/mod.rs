pub mod base64_frame_decoder;
pub mod jpeg_base64_encoder;
