use thiserror::Error;

/// Errors that can occur while building or loading a palette
#[derive(Debug, Error)]
pub enum Error {
    /// A palette needs at least one color
    #[error("Palette has no colors")]
    Empty,
    /// Pixel indices are single bytes, so more colors are unreachable
    #[error("Palette of {0} colors exceeds the 256 colors a pixel index can address")]
    TooManyEntries(usize),
    /// The data length is not a multiple of the color size
    #[error("Palette data of {len} bytes is not a multiple of {channels} byte colors")]
    TrailingBytes {
        /// Length of the palette data
        len: usize,
        /// Bytes per color
        channels: usize,
    },
    /// The channel layout cannot be guessed from the data length
    #[error("Cannot guess the channel layout of a {0} byte palette")]
    UnknownLayout(usize),
    /// File system error when reading the palette
    #[error("File system error with file {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
}
