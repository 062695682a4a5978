/// Error types for texture parsing operations
pub mod error;
mod header;
/// Little-endian integer decoding
pub mod reader;
/// Type definitions used by the texture parser
pub mod types;

use crate::types::*;
use bytes::Bytes;
pub use error::{Error, LoadError};
use header::parse_header;
use log::*;
use std::path::Path;
use types::ParseResult;

/// Read a texture file from the file system.
pub fn load_texture<Q>(path: Q) -> Result<Texture, LoadError>
where
    Q: AsRef<Path>,
{
    let input =
        std::fs::read(&path).map_err(|e| LoadError::FileSystem(path.as_ref().to_owned(), e))?;
    debug!(
        "Read {} bytes from {}",
        input.len(),
        path.as_ref().display()
    );
    parse_texture_bytes(Bytes::from(input)).map_err(|e| LoadError::Parsing(format!("{e}")))
}

/// Parse a texture from a slice. The data is copied into the texture.
pub fn parse_texture(input: &[u8]) -> ParseResult<Texture> {
    parse_texture_bytes(Bytes::copy_from_slice(input))
}

/// Parse a texture that takes ownership of an already loaded buffer.
///
/// Only the header is decoded here, mipmap levels are located on demand.
pub fn parse_texture_bytes(data: Bytes) -> ParseResult<Texture> {
    let header = parse_header(&data)?;
    let texture = Texture::from_parts(header, data);

    debug!(
        "Parsed texture header: {}x{}, body of {} bytes",
        texture.header.width,
        texture.header.height,
        texture.body().len()
    );
    let trailing = texture.trailing_bytes();
    if trailing > 0 {
        warn!("{trailing} byte(s) at the end of the texture body belong to no complete mipmap level");
    }

    Ok(texture)
}
