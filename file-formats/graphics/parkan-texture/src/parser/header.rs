use super::error::Error;
use super::reader::{ByteReader, Cursor};
use super::types::ParseResult;
use crate::types::*;
use log::*;

pub fn parse_header(input: &[u8]) -> ParseResult<TextureHeader> {
    if input.len() < HEADER_SIZE {
        error!(
            "Texture of {} bytes is shorter than the {HEADER_SIZE} byte header",
            input.len()
        );
        return Err(Error::MalformedContainer(format!(
            "{} bytes is shorter than the {HEADER_SIZE} byte header",
            input.len()
        )));
    }
    let mut reader = Cursor::new(&input[..HEADER_SIZE]);

    let mut leading = [0u8; LEADING_SIZE];
    reader
        .read_into(&mut leading)
        .map_err(|e| e.with_context("leading field"))?;
    let width = parse_dimension(&mut reader).map_err(|e| e.with_context("width field"))?;
    let height = parse_dimension(&mut reader).map_err(|e| e.with_context("height field"))?;
    let mut reserved = [0u8; RESERVED_SIZE];
    reader
        .read_into(&mut reserved)
        .map_err(|e| e.with_context("reserved field"))?;

    if width == 0 || height == 0 {
        error!("Texture has degenerate base dimensions {width}x{height}");
        return Err(Error::MalformedContainer(format!(
            "base dimensions {width}x{height} describe an empty image"
        )));
    }

    Ok(TextureHeader {
        leading,
        width,
        height,
        reserved,
    })
}

fn parse_dimension(reader: &mut impl ByteReader) -> ParseResult<u32> {
    let value = reader.read_uint_le(DIMENSION_FIELD_SIZE)?;
    u32::try_from(value).map_err(|_| {
        Error::MalformedContainer(format!("dimension {value} does not fit into 32 bits"))
    })
}
