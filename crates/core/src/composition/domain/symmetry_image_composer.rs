//! Mirrored left/right comparison images around the facial axis.
//!
//! Input frames arrive mirrored for selfie-view display, so every output is
//! flipped back to natural orientation. The composites replace a band of
//! columns on one side of the axis with the reflection of the other side,
//! showing how the face would look if it were built from a single half.

use crate::codec::domain::image_encoder::ImageEncoder;
use crate::composition::domain::symmetry_image_set::{SymmetryFrames, SymmetryImageSet};
use crate::shared::codec_error::CodecError;
use crate::shared::constants::MIRROR_BAND_WIDTH;
use crate::shared::frame::Frame;

/// Which half of the face is reflected onto the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Left,
    Right,
}

pub struct SymmetryImageComposer {
    encoder: Box<dyn ImageEncoder>,
    band_width: u32,
}

impl SymmetryImageComposer {
    pub fn new(encoder: Box<dyn ImageEncoder>) -> Self {
        Self::with_band_width(encoder, MIRROR_BAND_WIDTH)
    }

    pub fn with_band_width(encoder: Box<dyn ImageEncoder>, band_width: u32) -> Self {
        Self {
            encoder,
            band_width,
        }
    }

    /// Builds and encodes the three comparison images.
    pub fn compose(&self, frame: &Frame, axis_x: f64) -> Result<SymmetryImageSet, CodecError> {
        let frames = self.compose_frames(frame, axis_x);
        Ok(SymmetryImageSet {
            original: self.encoder.encode(&frames.original)?,
            left_symmetric: self.encoder.encode(&frames.left_symmetric)?,
            right_symmetric: self.encoder.encode(&frames.right_symmetric)?,
        })
    }

    /// Builds the three comparison images without encoding them.
    ///
    /// `axis_x` is rounded to the nearest column. Axes outside the frame,
    /// including non-finite ones, leave the composites identical to the
    /// de-mirrored original.
    pub fn compose_frames(&self, frame: &Frame, axis_x: f64) -> SymmetryFrames {
        // No column changes once the axis is a full band outside the frame.
        let band = self.band_width as f64;
        let axis = axis_x.round().clamp(-band, frame.width() as f64 + band) as i64;
        SymmetryFrames {
            original: frame.flipped_horizontally(),
            left_symmetric: self.mirror(frame, axis, Source::Left).flipped_horizontally(),
            right_symmetric: self.mirror(frame, axis, Source::Right).flipped_horizontally(),
        }
    }

    fn mirror(&self, frame: &Frame, axis: i64, source: Source) -> Frame {
        let width = frame.width() as i64;
        let band = self.band_width as i64;
        let mut out = frame.clone();

        let (targets, sources) = match source {
            Source::Left => (axis.max(0)..width.min(axis + band), 0..axis),
            Source::Right => ((axis - band).max(0)..axis.min(width), axis..width),
        };
        for x in targets {
            let mirror_x = 2 * axis - x;
            if sources.contains(&mirror_x) {
                out.copy_column(mirror_x as usize, x as usize);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    /// Encodes the red channel of the first row as a comma-separated list.
    struct RowEncoder {
        calls: Arc<Mutex<usize>>,
    }

    impl RowEncoder {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(0)),
            }
        }
    }

    impl ImageEncoder for RowEncoder {
        fn encode(&self, frame: &Frame) -> Result<String, CodecError> {
            *self.calls.lock().unwrap() += 1;
            Ok(red_row(frame)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(","))
        }
    }

    struct FailingEncoder;

    impl ImageEncoder for FailingEncoder {
        fn encode(&self, frame: &Frame) -> Result<String, CodecError> {
            Err(CodecError::UnsupportedChannels {
                channels: frame.channels(),
            })
        }
    }

    /// RGB frame whose red channel holds `value(x)` for column x on every row.
    fn frame_from(width: u32, height: u32, value: impl Fn(u32) -> u8) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _row in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[value(x), 7, 9]);
            }
        }
        Frame::new(data, width, height, 3, 0)
    }

    fn column_coded(width: u32) -> Frame {
        frame_from(width, 3, |x| x as u8)
    }

    fn red_row(frame: &Frame) -> Vec<u8> {
        let arr = frame.as_ndarray();
        (0..frame.width() as usize).map(|x| arr[[0, x, 0]]).collect()
    }

    fn composer() -> SymmetryImageComposer {
        SymmetryImageComposer::new(Box::new(RowEncoder::new()))
    }

    #[test]
    fn test_original_is_de_mirrored() {
        let frames = composer().compose_frames(&column_coded(5), 2.0);
        assert_eq!(red_row(&frames.original), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_left_composite_reflects_left_half() {
        let frames = composer().compose_frames(&column_coded(10), 4.0);
        // before flip: [0,1,2,3,4,3,2,1,0,9]
        assert_eq!(
            red_row(&frames.left_symmetric),
            vec![9, 0, 1, 2, 3, 4, 3, 2, 1, 0]
        );
    }

    #[test]
    fn test_right_composite_reflects_right_half() {
        let frames = composer().compose_frames(&column_coded(10), 4.0);
        // before flip: [8,7,6,5,4,5,6,7,8,9]
        assert_eq!(
            red_row(&frames.right_symmetric),
            vec![9, 8, 7, 6, 5, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_every_row_is_mirrored() {
        let frames = composer().compose_frames(&column_coded(10), 4.0);
        let arr = frames.left_symmetric.as_ndarray();
        for row in 0..3 {
            assert_eq!(arr[[row, 1, 0]], 0);
            assert_eq!(arr[[row, 1, 1]], 7);
            assert_eq!(arr[[row, 1, 2]], 9);
        }
    }

    #[test]
    fn test_band_width_limits_mirrored_columns() {
        let composer = SymmetryImageComposer::with_band_width(Box::new(RowEncoder::new()), 3);
        let frames = composer.compose_frames(&column_coded(20), 10.0);
        let unflipped = frames.left_symmetric.flipped_horizontally();
        let mut expected: Vec<u8> = (0..20).collect();
        expected[11] = 9;
        expected[12] = 8;
        assert_eq!(red_row(&unflipped), expected);
    }

    #[test]
    fn test_axis_is_rounded_to_nearest_column() {
        let composer = composer();
        let frame = column_coded(10);
        assert_eq!(
            composer.compose_frames(&frame, 3.6),
            composer.compose_frames(&frame, 4.0)
        );
    }

    #[test]
    fn test_axis_outside_frame_leaves_composites_untouched() {
        let composer = composer();
        let frame = column_coded(20);
        for axis in [-5.0, 50.0] {
            let frames = composer.compose_frames(&frame, axis);
            assert_eq!(frames.left_symmetric, frames.original);
            assert_eq!(frames.right_symmetric, frames.original);
        }
    }

    #[rstest]
    #[case::huge(1e30)]
    #[case::huge_negative(-1e30)]
    #[case::positive_infinity(f64::INFINITY)]
    #[case::negative_infinity(f64::NEG_INFINITY)]
    #[case::nan(f64::NAN)]
    fn test_extreme_axis_leaves_composites_untouched(#[case] axis: f64) {
        let frames = composer().compose_frames(&column_coded(10), axis);
        assert_eq!(frames.left_symmetric, frames.original);
        assert_eq!(frames.right_symmetric, frames.original);
    }

    #[test]
    fn test_axis_at_frame_edges() {
        let composer = composer();
        let frame = column_coded(10);

        // Nothing lies left of column 0 to reflect.
        let at_zero = composer.compose_frames(&frame, 0.0);
        assert_eq!(at_zero.left_symmetric, at_zero.original);

        // Nothing lies right of the last column to reflect.
        let at_last = composer.compose_frames(&frame, 9.0);
        assert_eq!(at_last.right_symmetric, at_last.original);

        // One column right of the axis reflects onto exactly one column.
        let before_last = composer.compose_frames(&frame, 8.0);
        let unflipped = before_last.right_symmetric.flipped_horizontally();
        assert_eq!(red_row(&unflipped), vec![0, 1, 2, 3, 4, 5, 6, 9, 8, 9]);
    }

    #[test]
    fn test_symmetric_content_yields_identical_composites() {
        // Content symmetric about column 10 of a 21-wide frame.
        let frame = frame_from(21, 4, |x| (x as i32 - 10).unsigned_abs() as u8 * 10);
        let frames = composer().compose_frames(&frame, 10.0);
        assert_eq!(frames.left_symmetric, frames.original);
        assert_eq!(frames.right_symmetric, frames.original);
    }

    #[test]
    fn test_source_frame_is_not_modified() {
        let frame = column_coded(10);
        let before = frame.clone();
        let _ = composer().compose_frames(&frame, 4.0);
        assert_eq!(frame, before);
    }

    #[test]
    fn test_compose_encodes_each_view() {
        let encoder = RowEncoder::new();
        let calls = Arc::clone(&encoder.calls);
        let composer = SymmetryImageComposer::new(Box::new(encoder));

        let set = composer.compose(&column_coded(10), 4.0).unwrap();

        assert_eq!(*calls.lock().unwrap(), 3);
        assert_eq!(set.original, "9,8,7,6,5,4,3,2,1,0");
        assert_eq!(set.left_symmetric, "9,0,1,2,3,4,3,2,1,0");
        assert_eq!(set.right_symmetric, "9,8,7,6,5,4,5,6,7,8");
    }

    #[test]
    fn test_compose_propagates_encoder_failure() {
        let composer = SymmetryImageComposer::new(Box::new(FailingEncoder));
        let err = composer.compose(&column_coded(10), 4.0).unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedChannels { channels: 3 }));
    }
}
