use serde::Serialize;

use crate::shared::frame::Frame;

/// Mirrored comparison views of one frame, before encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct SymmetryFrames {
    pub original: Frame,
    pub left_symmetric: Frame,
    pub right_symmetric: Frame,
}

/// Encoded comparison images delivered to the client after a capture.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SymmetryImageSet {
    #[serde(rename = "original_image")]
    pub original: String,
    #[serde(rename = "left_symmetric_image")]
    pub left_symmetric: String,
    #[serde(rename = "right_symmetric_image")]
    pub right_symmetric: String,
}
