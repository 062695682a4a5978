use ::image::error::ImageError;
use thiserror::Error;

/// Errors that can occur while turning texture levels into images
#[derive(Debug, Error)]
pub enum Error {
    /// The texture could not be read or the level was not found
    #[error("{0}")]
    Parse(#[from] crate::parser::Error),
    /// A pixel index has no entry in the palette
    #[error("Pixel index {index} is out of range for a palette of {len} colors")]
    PaletteIndexOutOfRange {
        /// Index found in the texture
        index: u8,
        /// Number of colors in the palette
        len: usize,
    },
    /// The number of colors does not match the image dimensions
    #[error("Expected {expected} colors for the image, got {actual}")]
    ShapeMismatch {
        /// `width * height`
        expected: usize,
        /// Colors actually provided
        actual: usize,
    },
    /// A color has a different number of channels than the image
    #[error("Color {index} has {actual} channels, {expected} expected")]
    ChannelMismatch {
        /// Position of the color in the input sequence
        index: usize,
        /// Channels per pixel of the image
        expected: usize,
        /// Channels of the offending color
        actual: usize,
    },
    /// The channel count cannot be represented by the target image type
    #[error("Unsupported channel count {0}, expected 1 to 4")]
    UnsupportedChannelCount(usize),
    /// Error during image encoding
    #[error("Image conversion error: {0}")]
    Convert(#[from] ImageError),
}
