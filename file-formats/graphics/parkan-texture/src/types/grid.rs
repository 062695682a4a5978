use custom_debug::Debug;
use parkan_utils::debug;

/// Dense row-major image of shape `(height, width, channels)`.
///
/// Built by [`crate::convert::assemble`]. Channel order is the order of
/// the palette that produced the colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: usize,
    #[debug(with = debug::trimmed_bytes_fmt)]
    data: Vec<u8>,
}

impl PixelGrid {
    /// Caller guarantees `data.len() == width * height * channels` and `channels > 0`
    pub(crate) fn from_raw_parts(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Values per pixel
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(height, width, channels)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, self.channels)
    }

    /// Channel values of the pixel at `(row, col)`
    pub fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        let start = (row * self.width as usize + col) * self.channels;
        self.data.get(start..start + self.channels)
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.channels)
    }

    /// Flat channel values
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}
