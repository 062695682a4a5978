use crate::catalog::{TEXTURES_FOLDER, is_texture_extension};
use crate::parser::LoadError;
use log::*;
use std::path::{Path, PathBuf};

/// Whether the file extension of `path` is a texture extension
pub fn is_texture_path<Q: AsRef<Path>>(path: Q) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_texture_extension)
}

/// The textures folder of a game installation rooted at `root`
pub fn textures_dir<Q: AsRef<Path>>(root: Q) -> PathBuf {
    root.as_ref().join(TEXTURES_FOLDER)
}

/// List the texture files directly inside `dir`, sorted by path
pub fn find_textures<Q: AsRef<Path>>(dir: Q) -> Result<Vec<PathBuf>, LoadError> {
    let dir = dir.as_ref();
    let fs_error = |e: std::io::Error| LoadError::FileSystem(dir.to_owned(), e);

    let mut textures = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(fs_error)? {
        let entry = entry.map_err(fs_error)?;
        let path = entry.path();
        if path.is_file() && is_texture_path(&path) {
            textures.push(path);
        }
    }
    textures.sort();
    debug!("Found {} texture(s) in {}", textures.len(), dir.display());
    Ok(textures)
}

/// Name of the image written for one level of a texture.
///
/// `WALL.A` level 2 with extension `png` becomes `<out_dir>/WALL_A_2.png`,
/// keeping the texture extension so animation frames do not collide.
pub fn level_output_path<Q, P>(out_dir: Q, texture: P, level: usize, extension: &str) -> PathBuf
where
    Q: AsRef<Path>,
    P: AsRef<Path>,
{
    let texture = texture.as_ref();
    let stem = texture
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let name = match texture.extension() {
        Some(ext) => format!("{stem}_{}_{level}.{extension}", ext.to_string_lossy()),
        None => format!("{stem}_{level}.{extension}"),
    };
    out_dir.as_ref().join(name)
}
