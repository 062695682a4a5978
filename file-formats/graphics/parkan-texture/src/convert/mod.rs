mod assemble;
mod error;
mod image;

use crate::palette::Palette;
use crate::types::{PixelGrid, Texture};
use ::image::DynamicImage;
pub use assemble::assemble;
pub use error::Error;
use log::*;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Decode mipmap `level` of the texture into a pixel grid.
///
/// Every pixel index of the level is looked up in `palette`. The first
/// index without a palette entry aborts the decode and no grid is built.
pub fn decode_level<P>(texture: &Texture, level: usize, palette: &P) -> Result<PixelGrid>
where
    P: Palette + ?Sized,
{
    let located = texture.locate_level(level)?;
    debug!(
        "Decoding mipmap {} ({}x{}) with a {} channel palette",
        level,
        located.width(),
        located.height(),
        palette.channel_count()
    );
    let colors = resolve_indices(located.indices, palette)?;
    assemble(
        &colors,
        located.width(),
        located.height(),
        palette.channel_count(),
    )
}

/// Look up each index in `palette`, keeping the order of `indices`
pub fn resolve_indices<'p, P>(indices: &[u8], palette: &'p P) -> Result<Vec<&'p [u8]>>
where
    P: Palette + ?Sized,
{
    indices.iter().map(|&index| palette.color_for(index)).collect()
}

/// Convert mipmap `level` of the texture into an image
pub fn texture_to_image<P>(texture: &Texture, level: usize, palette: &P) -> Result<DynamicImage>
where
    P: Palette + ?Sized,
{
    decode_level(texture, level, palette)?.to_image()
}
