use ndarray::{s, ArrayView3, ArrayViewMut3};

/// A single webcam frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at codec boundaries only; the domain layer
/// treats pixel data as opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Position of the frame within its session, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Returns a copy mirrored around the vertical center line.
    pub fn flipped_horizontally(&self) -> Frame {
        let data: Vec<u8> = self
            .as_ndarray()
            .slice(s![.., ..;-1, ..])
            .iter()
            .copied()
            .collect();
        Frame::new(data, self.width, self.height, self.channels, self.index)
    }

    /// Overwrites every pixel of column `dst` with the pixel of column `src`
    /// in the same row. Both columns must lie in `[0, width)`.
    pub fn copy_column(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        let mut pixels = self.as_ndarray_mut();
        let column = pixels.slice(s![.., src, ..]).to_owned();
        pixels.slice_mut(s![.., dst, ..]).assign(&column);
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
