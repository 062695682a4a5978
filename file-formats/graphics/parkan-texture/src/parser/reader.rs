//! Little-endian integer decoding and a byte cursor for texture headers
//!
//! Header fields are plain little-endian integers. The decoder does not
//! assume a field width: the same routine reads 1, 2, 4 or 8 byte fields.

use super::error::Error;
use super::types::ParseResult;

/// Decode a little-endian unsigned integer from a slice of any length.
///
/// Byte `i` contributes `bytes[i] * 256^i`, an empty slice decodes to 0.
/// Slices longer than eight bytes are accepted as long as the bytes past
/// the eighth are zero.
///
/// # Examples
///
/// ```
/// use parkan_texture::parser::reader::decode_uint_le;
///
/// assert_eq!(decode_uint_le(&[]).unwrap(), 0);
/// assert_eq!(decode_uint_le(&[0x00, 0x01]).unwrap(), 256);
/// assert_eq!(decode_uint_le(&[0x40, 0x00, 0x00, 0x00]).unwrap(), 64);
/// ```
pub fn decode_uint_le(bytes: &[u8]) -> ParseResult<u64> {
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().enumerate() {
        if byte == 0 {
            continue;
        }
        if i >= 8 {
            return Err(Error::IntegerOverflow(bytes.len()));
        }
        value |= u64::from(byte) << (8 * i);
    }
    Ok(value)
}

/// Trait for reading binary data from a byte slice
pub trait ByteReader {
    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self) -> ParseResult<u8>;

    /// Read an unsigned little-endian integer stored in `width` bytes
    fn read_uint_le(&mut self, width: usize) -> ParseResult<u64>;

    /// Read exactly `buf.len()` bytes into a pre-allocated buffer
    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()>;

    /// Number of bytes left to read
    fn remaining(&self) -> usize;
}

/// A cursor for reading binary data from a byte slice
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the beginning of the data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset from the beginning of the data
    pub fn position(&self) -> usize {
        self.position
    }

    fn take(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::UnexpectedEof)?;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

impl ByteReader for Cursor<'_> {
    fn read_u8(&mut self) -> ParseResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_uint_le(&mut self, width: usize) -> ParseResult<u64> {
        decode_uint_le(self.take(width)?)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()> {
        buf.copy_from_slice(self.take(buf.len())?);
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}
