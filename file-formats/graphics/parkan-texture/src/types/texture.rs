use super::header::{HEADER_SIZE, TextureHeader};
use super::mipmap::{LocatedLevel, MipChain, MipLevel, locate_level};
use crate::parser::types::ParseResult;
use bytes::Bytes;
use custom_debug::Debug;
use parkan_utils::debug;

/// A parsed texture container.
///
/// Owns the raw file bytes. The header is decoded once, mipmap levels are
/// located lazily from the body. The texture is immutable and cheap to
/// clone, so several threads can decode different levels of it at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    /// Decoded header
    pub header: TextureHeader,
    #[debug(with = debug::trimmed_bytes_fmt)]
    data: Bytes,
}

impl Texture {
    /// Parse a texture from an owned buffer, see [`crate::parser::parse_texture_bytes`]
    pub fn from_bytes(data: impl Into<Bytes>) -> ParseResult<Self> {
        crate::parser::parse_texture_bytes(data.into())
    }

    /// Caller guarantees `header` was parsed from `data`
    pub(crate) fn from_parts(header: TextureHeader, data: Bytes) -> Self {
        Self { header, data }
    }

    /// The whole file
    pub fn raw(&self) -> &Bytes {
        &self.data
    }

    /// The first [`HEADER_SIZE`] bytes
    pub fn header_bytes(&self) -> &[u8] {
        &self.data[..HEADER_SIZE]
    }

    /// Everything after the header: the concatenated mipmap levels
    pub fn body(&self) -> &[u8] {
        &self.data[HEADER_SIZE..]
    }

    /// Width and height of mipmap level 0
    pub fn base_dimensions(&self) -> (u32, u32) {
        (self.header.width, self.header.height)
    }

    /// Walk the mipmap levels stored in the body
    pub fn levels(&self) -> MipChain {
        MipChain::new(self.body().len(), self.header.width, self.header.height)
    }

    /// Levels whose pixel indices are completely stored in the body
    pub fn complete_levels(&self) -> Vec<MipLevel> {
        let body_len = self.body().len();
        self.levels().filter(|l| l.fits(body_len)).collect()
    }

    /// Get total amount of complete mipmap levels
    pub fn level_count(&self) -> usize {
        self.complete_levels().len()
    }

    /// Body bytes not covered by any complete level
    pub fn trailing_bytes(&self) -> usize {
        let covered = self.complete_levels().last().map_or(0, MipLevel::end);
        self.body().len() - covered
    }

    /// Find the pixel indices of mipmap `level`
    pub fn locate_level(&self, level: usize) -> ParseResult<LocatedLevel<'_>> {
        locate_level(self.body(), self.header.width, self.header.height, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::Error;

    fn texture(width: u32, height: u32, body: &[u8]) -> Texture {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[4..8].copy_from_slice(&width.to_le_bytes());
        bytes[8..12].copy_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(body);
        Texture::from_bytes(bytes).unwrap()
    }

    #[test]
    fn test_views() {
        let tex = texture(2, 1, &[5, 6, 7]);
        assert_eq!(tex.raw().len(), HEADER_SIZE + 3);
        assert_eq!(tex.header_bytes().len(), HEADER_SIZE);
        assert_eq!(tex.body(), &[5, 6, 7]);
        assert_eq!(tex.base_dimensions(), (2, 1));
    }

    #[test]
    fn test_complete_levels_and_trailing_bytes() {
        // 4x4 (16) + 2x2 (4) + 1x1 (1) = 21, plus 3 stray bytes
        let tex = texture(4, 4, &[0u8; 24]);
        assert_eq!(tex.level_count(), 3);
        assert_eq!(tex.trailing_bytes(), 3);

        // level 1 is cut in half
        let tex = texture(4, 4, &[0u8; 18]);
        assert_eq!(tex.levels().count(), 2);
        assert_eq!(tex.level_count(), 1);
        assert_eq!(tex.trailing_bytes(), 2);
    }

    #[test]
    fn test_locate_level() {
        let body: Vec<u8> = (0..21).collect();
        let tex = texture(4, 4, &body);
        let located = tex.locate_level(1).unwrap();
        assert_eq!(located.indices, &[16, 17, 18, 19]);
        assert!(matches!(
            tex.locate_level(3),
            Err(Error::LevelNotFound { level: 3, .. })
        ));
    }

    #[test]
    fn test_debug_output_is_trimmed() {
        let tex = texture(64, 64, &[0u8; 4096]);
        let output = format!("{tex:?}");
        assert!(output.contains("4128 bytes"));
        assert!(output.len() < 400);
    }

    #[test]
    fn test_texture_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Texture>();
    }
}
