/// Size of the fixed header preceding the mipmap chain.
pub const HEADER_SIZE: usize = 32;
/// Size of the uninterpreted field at the start of the header.
pub const LEADING_SIZE: usize = 4;
/// Size of the little-endian width and height fields.
pub const DIMENSION_FIELD_SIZE: usize = 4;
/// Size of the uninterpreted tail of the header, after width and height.
pub const RESERVED_SIZE: usize = HEADER_SIZE - LEADING_SIZE - 2 * DIMENSION_FIELD_SIZE;

/// Decoded texture header.
///
/// Only the base dimensions carry meaning for decoding. The other bytes
/// are kept verbatim so tools can show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureHeader {
    /// Bytes `0..4` of the header
    pub leading: [u8; LEADING_SIZE],
    /// Width of mipmap level 0, bytes `4..8`
    pub width: u32,
    /// Height of mipmap level 0, bytes `8..12`
    pub height: u32,
    /// Bytes `12..32` of the header
    pub reserved: [u8; RESERVED_SIZE],
}
