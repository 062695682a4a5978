//! Integration tests for texture decoding

mod decode_tests;
mod file_tests;

use parkan_texture::{HEADER_SIZE, MipChain};

/// Build a texture file with base dimensions `width`x`height` and a body
/// holding every level of the chain. Pixel `i` of level `n` stores
/// `(n * 16 + i) % modulo`.
pub fn build_texture(width: u32, height: u32, modulo: u8) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_SIZE];
    bytes[..4].copy_from_slice(b"PKTX");
    bytes[4..8].copy_from_slice(&width.to_le_bytes());
    bytes[8..12].copy_from_slice(&height.to_le_bytes());

    for level in MipChain::new(usize::MAX, width, height) {
        bytes.extend(
            (0..level.pixel_count()).map(|i| ((level.id * 16 + i) % modulo as usize) as u8),
        );
    }
    bytes
}
