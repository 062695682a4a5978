use super::build_texture;
use parkan_texture::convert::{Error, resolve_indices};
use parkan_texture::parser::Error as ParseError;
use parkan_texture::{
    AnyPalette, ChannelLayout, Palette, RgbPalette, RgbaPalette, Texture, decode_level,
    parse_texture, texture_to_image,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_log::test;

fn gray_palette() -> RgbPalette {
    RgbPalette::new((0..=255u8).map(|i| [i, i, i]).collect()).unwrap()
}

#[test]
fn test_decode_level_two_of_square_texture() {
    let bytes = build_texture(8, 8, 255);
    let texture = parse_texture(&bytes).unwrap();

    let located = texture.locate_level(2).unwrap();
    assert_eq!(located.level.offset, 80);
    assert_eq!(located.indices, &texture.body()[80..84]);

    let grid = decode_level(&texture, 2, &gray_palette()).unwrap();
    assert_eq!(grid.shape(), (2, 2, 3));
    // level 2 pixels start at 2 * 16
    assert_eq!(grid.pixel(0, 0).unwrap(), &[32, 32, 32]);
    assert_eq!(grid.pixel(1, 1).unwrap(), &[35, 35, 35]);
}

#[test]
fn test_every_level_decodes_to_its_own_dimensions() {
    let bytes = build_texture(32, 8, 200);
    let texture = parse_texture(&bytes).unwrap();
    let palette = gray_palette();

    let levels = texture.complete_levels();
    assert_eq!(levels.len(), 4);
    for level in levels {
        let grid = decode_level(&texture, level.id, &palette).unwrap();
        assert_eq!(grid.width(), level.width);
        assert_eq!(grid.height(), level.height);
        assert_eq!(grid.pixels().len(), level.pixel_count());
    }
}

#[test]
fn test_level_beyond_chain_is_not_found() {
    let texture = parse_texture(&build_texture(8, 8, 255)).unwrap();
    for level in [4, 5, 100, usize::MAX] {
        assert!(matches!(
            decode_level(&texture, level, &gray_palette()),
            Err(Error::Parse(ParseError::LevelNotFound { .. }))
        ));
    }
}

#[test]
fn test_truncated_last_level_is_not_found() {
    let mut bytes = build_texture(8, 8, 255);
    bytes.pop();
    let texture = parse_texture(&bytes).unwrap();
    assert_eq!(texture.level_count(), 3);
    assert!(matches!(
        texture.locate_level(3),
        Err(ParseError::LevelNotFound {
            level: 3,
            available: 3
        })
    ));
}

#[test]
fn test_missing_palette_entry_aborts_decode() {
    let mut bytes = build_texture(4, 4, 255);
    let body_start = bytes.len() - 21;
    bytes[body_start + 5] = 255;
    let texture = parse_texture(&bytes).unwrap();

    let palette = RgbaPalette::new(vec![[1, 2, 3, 4]; 255]).unwrap();
    let result = decode_level(&texture, 0, &palette);
    assert!(matches!(
        result,
        Err(Error::PaletteIndexOutOfRange {
            index: 255,
            len: 255
        })
    ));

    // the other levels do not reference index 255
    assert!(decode_level(&texture, 1, &palette).is_ok());
}

#[test]
fn test_resolve_keeps_slice_order() {
    let palette = gray_palette();
    let colors = resolve_indices(&[3, 1, 2], &palette).unwrap();
    assert_eq!(colors, vec![&[3u8, 3, 3][..], &[1u8, 1, 1][..], &[2u8, 2, 2][..]]);
}

#[test]
fn test_palette_decides_channel_count() {
    let texture = parse_texture(&build_texture(4, 4, 255)).unwrap();
    let rgba: Vec<u8> = (0..=255u8).flat_map(|i| [i, 0, 255 - i, 128]).collect();
    let palette = AnyPalette::from_bytes(&rgba, ChannelLayout::Rgba).unwrap();

    let grid = decode_level(&texture, 0, &palette).unwrap();
    assert_eq!(grid.channels(), palette.channel_count());
    assert_eq!(grid.pixel(0, 1).unwrap(), &[1, 0, 254, 128]);

    let image = texture_to_image(&texture, 0, &palette).unwrap();
    assert!(image.as_rgba8().is_some());
}

#[test]
fn test_degenerate_containers_are_malformed() {
    assert!(matches!(
        parse_texture(&[0u8; 31]),
        Err(ParseError::MalformedContainer(_))
    ));
    assert!(matches!(
        parse_texture(&build_texture(0, 8, 255)),
        Err(ParseError::MalformedContainer(_))
    ));
}

#[test]
fn test_concurrent_decoding_of_shared_texture() {
    let texture = Arc::new(Texture::from_bytes(build_texture(64, 64, 251)).unwrap());
    let palette = Arc::new(gray_palette());
    let expected: Vec<_> = (0..texture.level_count())
        .map(|level| decode_level(&texture, level, &*palette).unwrap())
        .collect();

    let handles: Vec<_> = (0..texture.level_count())
        .map(|level| {
            let texture = Arc::clone(&texture);
            let palette = Arc::clone(&palette);
            std::thread::spawn(move || decode_level(&texture, level, &*palette).unwrap())
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Palette that reports a channel count its colors do not have
struct LyingPalette;

impl Palette for LyingPalette {
    fn channel_count(&self) -> usize {
        usize::MAX / 2 + 1
    }

    fn color_for(&self, _index: u8) -> parkan_texture::convert::Result<&[u8]> {
        Ok(&[1u8, 2, 3][..])
    }
}

#[test]
fn test_palette_with_bogus_channel_count_fails_cleanly() {
    let texture = parse_texture(&build_texture(4, 4, 255)).unwrap();
    assert!(matches!(
        decode_level(&texture, 0, &LyingPalette),
        Err(Error::ChannelMismatch { index: 0, actual: 3, .. })
    ));
}
