pub mod frame_decoder;
pub mod image_encoder;
