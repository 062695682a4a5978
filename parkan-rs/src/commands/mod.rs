//! Command implementations for each file type

pub mod palette;
pub mod texture;

use clap::ValueEnum;
use parkan_texture::ChannelLayout;

/// Channel layout of a palette file as given on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaletteLayout {
    /// Guess from the file size (768 bytes RGB, 1024 bytes RGBA)
    Auto,
    /// 3 bytes per color
    Rgb,
    /// 4 bytes per color
    Rgba,
}

impl From<PaletteLayout> for Option<ChannelLayout> {
    fn from(value: PaletteLayout) -> Self {
        match value {
            PaletteLayout::Auto => None,
            PaletteLayout::Rgb => Some(ChannelLayout::Rgb),
            PaletteLayout::Rgba => Some(ChannelLayout::Rgba),
        }
    }
}
