pub mod codec_error;
pub mod constants;
pub mod frame;
