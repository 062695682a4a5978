use super::build_texture;
use image::GenericImageView;
use parkan_texture::path::{find_textures, level_output_path, textures_dir};
use parkan_texture::{ChannelLayout, Palette, decode_level, load_palette, load_texture};
use std::fs;
use test_log::test;

#[test]
fn test_export_level_from_disk() {
    let root = tempfile::tempdir().unwrap();
    let textures = root.path().join("textures");
    fs::create_dir(&textures).unwrap();
    fs::write(textures.join("WALL.A"), build_texture(16, 16, 64)).unwrap();
    fs::write(textures.join("readme.txt"), b"not a texture").unwrap();

    let palette_path = root.path().join("DEFAULT.PAL");
    let palette_bytes: Vec<u8> = (0..=255u8).flat_map(|i| [i, i / 2, 0]).collect();
    fs::write(&palette_path, palette_bytes).unwrap();
    let palette = load_palette(&palette_path, None).unwrap();
    assert_eq!(palette.layout(), ChannelLayout::Rgb);
    assert_eq!(palette.channel_count(), 3);

    let found = find_textures(textures_dir(root.path())).unwrap();
    assert_eq!(found.len(), 1);

    let texture = load_texture(&found[0]).unwrap();
    let out = level_output_path(root.path(), &found[0], 1, "png");
    decode_level(&texture, 1, &palette).unwrap().save(&out).unwrap();

    let image = image::open(&out).unwrap();
    assert_eq!(image.dimensions(), (8, 8));
    // level 1 starts with index 16
    assert_eq!(image.to_rgb8().get_pixel(0, 0).0, [16, 8, 0]);
}
