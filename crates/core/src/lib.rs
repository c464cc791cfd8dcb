//! Facial asymmetry scoring and mirrored-comparison imaging for webcam
//! sessions.
//!
//! - [`analysis`]: landmark-based asymmetry scoring.
//! - [`composition`]: left/right mirrored comparison images.
//! - [`codec`]: transport payload decoding and encoding.
//! - [`pipeline`]: per-connection session state and message dispatch.

pub mod analysis;
pub mod codec;
pub mod composition;
pub mod pipeline;
pub mod shared;
