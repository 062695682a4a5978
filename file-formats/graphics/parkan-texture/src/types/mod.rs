/// Pixel grid produced by decoding a level
pub mod grid;
/// Texture header layout
pub mod header;
/// Mipmap chain walking
pub mod mipmap;
/// Parsed texture container
pub mod texture;

pub use grid::*;
pub use header::*;
pub use mipmap::*;
pub use texture::*;
