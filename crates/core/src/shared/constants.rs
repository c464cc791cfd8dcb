//! Fixed detector contract and tuned thresholds.
//!
//! The pixel thresholds were tuned empirically against 640x480 webcam
//! capture. They do not scale with frame resolution.

/// Minimum landmark count of the face-mesh detector output.
pub const MIN_LANDMARKS: usize = 468;

// Face-mesh landmark indices.
pub const LEFT_EYE_OUTER: usize = 33;
pub const RIGHT_EYE_OUTER: usize = 263;
pub const NOSE_TIP: usize = 1;
pub const CHIN: usize = 18;
pub const LEFT_MOUTH: usize = 61;
pub const RIGHT_MOUTH: usize = 291;

/// Eye span (pixels, 640x480 capture) below which the face is too far away.
pub const MIN_FACE_WIDTH: f64 = 120.0;
/// Eye span (pixels, 640x480 capture) above which the face is too close.
pub const MAX_FACE_WIDTH: f64 = 200.0;
/// Largest nose offset from the eye midpoint still considered centered.
pub const MAX_NOSE_OFFSET: f64 = 15.0;
/// Largest distance of the face center from the frame center.
pub const MAX_POSITION_OFFSET: f64 = 60.0;
/// Largest combined eye and mouth tilt still considered steady.
pub const MAX_FACE_STABILITY: f64 = 25.0;

/// Scales summed pixel deltas onto the 0-100 score range.
pub const SCORE_MULTIPLIER: f64 = 3.0;
pub const MAX_SCORE: f64 = 100.0;

/// Columns mirrored on each side of the facial axis.
pub const MIRROR_BAND_WIDTH: u32 = 100;

/// Lossy quality for images sent back over the network.
pub const JPEG_QUALITY: u8 = 75;

/// Text message that asks for a mirrored comparison of the last frame.
pub const CAPTURE_REQUEST_MESSAGE: &str = "manual_capture_request";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp"];
