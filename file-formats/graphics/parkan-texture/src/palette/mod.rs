//! Color palettes.
//!
//! Texture levels only store palette indices. The [`Palette`] trait is the
//! seam between the decoder and whatever provides the colors: the decoder
//! asks for one color per index and never looks at the channel layout
//! itself.
//!
//! [`ColorTable`] is the palette shipped with the crate. It reads raw
//! palette files: consecutive colors of `N` bytes each, at most 256 of them.

mod error;

use crate::convert;
pub use error::Error;
use log::*;
use std::path::Path;

/// Maximum number of colors addressable by a one byte pixel index
pub const MAX_COLORS: usize = 256;

/// Resolves pixel indices into color values
pub trait Palette {
    /// Number of values in every color returned by [`Palette::color_for`]
    fn channel_count(&self) -> usize;

    /// Color for a pixel index
    fn color_for(&self, index: u8) -> convert::Result<&[u8]>;
}

/// Palette of up to 256 colors with `N` channels each
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorTable<const N: usize> {
    colors: Vec<[u8; N]>,
}

/// Three channel palette
pub type RgbPalette = ColorTable<3>;
/// Four channel palette
pub type RgbaPalette = ColorTable<4>;

impl<const N: usize> ColorTable<N> {
    /// Build a palette from a list of colors
    pub fn new(colors: Vec<[u8; N]>) -> Result<Self, Error> {
        if colors.is_empty() {
            return Err(Error::Empty);
        }
        if colors.len() > MAX_COLORS {
            return Err(Error::TooManyEntries(colors.len()));
        }
        Ok(Self { colors })
    }

    /// Parse raw palette data: consecutive colors of `N` bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if N == 0 || data.is_empty() {
            return Err(Error::Empty);
        }
        if data.len() % N != 0 {
            return Err(Error::TrailingBytes {
                len: data.len(),
                channels: N,
            });
        }
        let colors = data
            .chunks_exact(N)
            .map(|chunk| {
                let mut color = [0u8; N];
                color.copy_from_slice(chunk);
                color
            })
            .collect();
        Self::new(colors)
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors in index order
    pub fn colors(&self) -> &[[u8; N]] {
        &self.colors
    }
}

impl<const N: usize> Palette for ColorTable<N> {
    fn channel_count(&self) -> usize {
        N
    }

    fn color_for(&self, index: u8) -> convert::Result<&[u8]> {
        match self.colors.get(index as usize) {
            Some(color) => Ok(color.as_slice()),
            None => {
                error!(
                    "Pixel index {index} has no color in a palette of {}",
                    self.colors.len()
                );
                Err(convert::Error::PaletteIndexOutOfRange {
                    index,
                    len: self.colors.len(),
                })
            }
        }
    }
}

/// Channel layout of raw palette data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// 3 bytes per color
    Rgb,
    /// 4 bytes per color
    Rgba,
}

impl ChannelLayout {
    /// Bytes per color
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Guess the layout of a full 256 color palette from its size
    pub fn guess(len: usize) -> Result<Self, Error> {
        match len {
            l if l == MAX_COLORS * 3 => Ok(ChannelLayout::Rgb),
            l if l == MAX_COLORS * 4 => Ok(ChannelLayout::Rgba),
            _ => Err(Error::UnknownLayout(len)),
        }
    }
}

/// Palette whose channel count is only known at run time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyPalette {
    /// Three channel palette
    Rgb(RgbPalette),
    /// Four channel palette
    Rgba(RgbaPalette),
}

impl AnyPalette {
    /// Parse raw palette data with the given layout
    pub fn from_bytes(data: &[u8], layout: ChannelLayout) -> Result<Self, Error> {
        Ok(match layout {
            ChannelLayout::Rgb => AnyPalette::Rgb(RgbPalette::from_bytes(data)?),
            ChannelLayout::Rgba => AnyPalette::Rgba(RgbaPalette::from_bytes(data)?),
        })
    }

    /// Layout of the colors
    pub fn layout(&self) -> ChannelLayout {
        match self {
            AnyPalette::Rgb(_) => ChannelLayout::Rgb,
            AnyPalette::Rgba(_) => ChannelLayout::Rgba,
        }
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        match self {
            AnyPalette::Rgb(p) => p.len(),
            AnyPalette::Rgba(p) => p.len(),
        }
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Palette for AnyPalette {
    fn channel_count(&self) -> usize {
        match self {
            AnyPalette::Rgb(p) => p.channel_count(),
            AnyPalette::Rgba(p) => p.channel_count(),
        }
    }

    fn color_for(&self, index: u8) -> convert::Result<&[u8]> {
        match self {
            AnyPalette::Rgb(p) => p.color_for(index),
            AnyPalette::Rgba(p) => p.color_for(index),
        }
    }
}

fn read_palette_file(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|e| Error::FileSystem(path.to_owned(), e))
}

/// Read a raw palette file. Without a layout it is guessed from the file size.
pub fn load_palette<Q>(path: Q, layout: Option<ChannelLayout>) -> Result<AnyPalette, Error>
where
    Q: AsRef<Path>,
{
    let data = read_palette_file(path.as_ref())?;
    let layout = match layout {
        Some(layout) => layout,
        None => ChannelLayout::guess(data.len())?,
    };
    debug!(
        "Loading {:?} palette of {} bytes from {}",
        layout,
        data.len(),
        path.as_ref().display()
    );
    AnyPalette::from_bytes(&data, layout)
}

/// Read a raw palette file with a layout fixed at compile time
pub fn load_palette_as<const N: usize, Q>(path: Q) -> Result<ColorTable<N>, Error>
where
    Q: AsRef<Path>,
{
    ColorTable::from_bytes(&read_palette_file(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn gray_ramp() -> Vec<u8> {
        (0..=255u8).flat_map(|i| [i, i, i]).collect()
    }

    #[test]
    fn test_rgb_palette_lookup() {
        let palette = RgbPalette::from_bytes(&gray_ramp()).unwrap();
        assert_eq!(palette.len(), 256);
        assert_eq!(palette.channel_count(), 3);
        assert_eq!(palette.color_for(0).unwrap(), &[0, 0, 0]);
        assert_eq!(palette.color_for(255).unwrap(), &[255, 255, 255]);
    }

    #[test]
    fn test_short_palette_out_of_range() {
        let palette = RgbaPalette::new(vec![[1, 2, 3, 4]; 255]).unwrap();
        assert_eq!(palette.channel_count(), 4);
        assert!(palette.color_for(254).is_ok());
        assert!(matches!(
            palette.color_for(255),
            Err(convert::Error::PaletteIndexOutOfRange {
                index: 255,
                len: 255
            })
        ));
    }

    #[test]
    fn test_invalid_palettes() {
        assert!(matches!(RgbPalette::from_bytes(&[]), Err(Error::Empty)));
        assert!(matches!(
            RgbPalette::from_bytes(&[0, 0, 0, 0]),
            Err(Error::TrailingBytes {
                len: 4,
                channels: 3
            })
        ));
        assert!(matches!(
            RgbPalette::new(vec![[0; 3]; 257]),
            Err(Error::TooManyEntries(257))
        ));
    }

    #[test]
    fn test_guess_layout() {
        assert_eq!(ChannelLayout::guess(768).unwrap(), ChannelLayout::Rgb);
        assert_eq!(ChannelLayout::guess(1024).unwrap(), ChannelLayout::Rgba);
        assert!(matches!(
            ChannelLayout::guess(100),
            Err(Error::UnknownLayout(100))
        ));
    }

    #[test]
    fn test_any_palette_delegates() {
        let rgba: Vec<u8> = (0..=255u8).flat_map(|i| [i, 0, 0, 255]).collect();
        let palette = AnyPalette::from_bytes(&rgba, ChannelLayout::Rgba).unwrap();
        assert_eq!(palette.layout(), ChannelLayout::Rgba);
        assert_eq!(palette.channel_count(), 4);
        assert_eq!(palette.color_for(9).unwrap(), &[9, 0, 0, 255]);
    }

    #[test]
    fn test_load_palette_guesses_layout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&gray_ramp()).unwrap();

        let palette = load_palette(file.path(), None).unwrap();
        assert_eq!(palette.layout(), ChannelLayout::Rgb);

        let palette: RgbPalette = load_palette_as(file.path()).unwrap();
        assert_eq!(palette.colors()[128], [128, 128, 128]);
    }

    #[test]
    fn test_load_palette_missing_file() {
        assert!(matches!(
            load_palette("/nonexistent/palette.pal", None),
            Err(Error::FileSystem(..))
        ));
    }
}
