//! Names used by discovery tooling. None of this affects decoding.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Folder holding the texture files of a game installation
pub const TEXTURES_FOLDER: &str = "textures";

/// Extensions of still textures that also have animated variants
pub const BASE_EXTENSIONS: [&str; 2] = ["A", "V"];

/// Frame numbers appended to a base extension for animated variants (`A1`..`A9`)
pub const ANIMATION_FRAMES: RangeInclusive<u8> = 1..=9;

/// Extensions without animated variants
pub const SINGLE_EXTENSIONS: [&str; 3] = ["NGB", "F", "W"];

/// Every extension a texture file can have, in upper case.
///
/// # Examples
///
/// ```
/// let extensions = parkan_texture::recognized_extensions();
/// assert_eq!(extensions.len(), 23);
/// assert!(extensions.contains("A7"));
/// ```
pub fn recognized_extensions() -> BTreeSet<String> {
    let animated = BASE_EXTENSIONS.iter().flat_map(|base| {
        ANIMATION_FRAMES.map(move |frame| format!("{base}{frame}"))
    });

    BASE_EXTENSIONS
        .iter()
        .map(|ext| (*ext).to_owned())
        .chain(animated)
        .chain(SINGLE_EXTENSIONS.iter().map(|ext| (*ext).to_owned()))
        .collect()
}

/// Whether `extension` (without the dot) names a texture file, ignoring case
pub fn is_texture_extension(extension: &str) -> bool {
    if SINGLE_EXTENSIONS
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(extension))
    {
        return true;
    }
    let (Some(base), Some(frame)) = (extension.get(..1), extension.get(1..)) else {
        return false;
    };
    if !BASE_EXTENSIONS
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(base))
    {
        return false;
    }
    match frame {
        "" => true,
        frame => frame
            .parse::<u8>()
            .is_ok_and(|n| frame.len() == 1 && ANIMATION_FRAMES.contains(&n)),
    }
}
