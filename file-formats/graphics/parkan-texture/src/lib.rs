//! Decoder for Parkan texture files.
//!
//! A Parkan texture is a flat byte stream: a 32 byte header followed by a
//! chain of palette-indexed mipmap levels. Each level stores one palette
//! index byte per pixel and is half the width and height of the previous
//! one. There is no level table, so the position of a level is found by
//! walking the chain from the base dimensions stored in the header.
//!
//! Colors are not stored in the texture. A [`Palette`] turns indices into
//! color values and decides how many channels each pixel has.
//!
//! # Examples
//!
//! ```no_run
//! use parkan_texture::{RgbPalette, decode_level, load_palette_as, load_texture};
//!
//! let texture = load_texture("textures/WALL01.A")?;
//! let palette: RgbPalette = load_palette_as("palettes/DEFAULT.PAL")?;
//!
//! println!("{}x{}", texture.header.width, texture.header.height);
//! for level in texture.levels() {
//!     println!("level {}: {}x{}", level.id, level.width, level.height);
//! }
//!
//! let grid = decode_level(&texture, 0, &palette)?;
//! grid.save("WALL01.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Recognized texture file extensions and folder names
pub mod catalog;
/// Palette resolution and pixel grid assembly
pub mod convert;
/// Color palettes used to resolve pixel indices
pub mod palette;
/// Texture container parsing
pub mod parser;
/// Texture file discovery helpers
pub mod path;
/// Types describing a parsed texture
pub mod types;

pub use catalog::{TEXTURES_FOLDER, is_texture_extension, recognized_extensions};
pub use convert::{assemble, decode_level, texture_to_image};
pub use palette::{
    AnyPalette, ChannelLayout, ColorTable, Palette, RgbPalette, RgbaPalette, load_palette,
    load_palette_as,
};
pub use parser::{load_texture, parse_texture};
pub use types::{HEADER_SIZE, LocatedLevel, MipChain, MipLevel, PixelGrid, Texture, TextureHeader};
