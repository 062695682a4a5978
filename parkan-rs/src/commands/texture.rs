//! Texture command implementations

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use image::ImageFormat;
use parkan_texture::path::{find_textures, level_output_path, textures_dir};
use parkan_texture::{
    AnyPalette, MipLevel, Palette, TEXTURES_FOLDER, Texture, TextureHeader, decode_level,
    load_palette, load_texture, recognized_extensions,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::PaletteLayout;
use crate::utils::{add_table_row, create_progress_bar, create_table, format_bytes, format_hex};

#[derive(Subcommand)]
pub enum TextureCommands {
    /// Display information about a texture file
    Info {
        /// Path to the texture file
        file: PathBuf,

        /// Show the uninterpreted header bytes
        #[arg(long)]
        raw: bool,

        /// Print the information as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the mipmap levels stored in a texture file
    Levels {
        /// Path to the texture file
        file: PathBuf,
    },

    /// Convert one mipmap level of a texture to an image file
    Convert {
        /// Input texture file
        input: PathBuf,

        /// Output image path
        output: PathBuf,

        /// Palette used to resolve pixel indices
        #[arg(short, long)]
        palette: PathBuf,

        /// Channel layout of the palette file
        #[arg(long, default_value = "auto")]
        palette_layout: PaletteLayout,

        /// Mipmap level to extract
        #[arg(short, long, default_value = "0")]
        level: usize,

        /// Output format (auto-detected from extension if not specified)
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,
    },

    /// Convert every texture of a folder to image files
    ExportAll {
        /// Folder with texture files, or a game folder with a `textures` subfolder
        dir: PathBuf,

        /// Folder the images are written to
        output_dir: PathBuf,

        /// Palette used to resolve pixel indices
        #[arg(short, long)]
        palette: PathBuf,

        /// Channel layout of the palette file
        #[arg(long, default_value = "auto")]
        palette_layout: PaletteLayout,

        /// Export every complete mipmap level instead of level 0 only
        #[arg(long)]
        all_levels: bool,

        /// Image format of the exported files
        #[arg(short = 'f', long, default_value = "png")]
        format: OutputFormat,

        /// Continue with the next texture when one fails
        #[arg(long)]
        keep_going: bool,
    },

    /// List the recognized texture file extensions
    Extensions,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Bmp,
    Tga,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tga => "tga",
        }
    }
}

impl From<OutputFormat> for ImageFormat {
    fn from(value: OutputFormat) -> ImageFormat {
        match value {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tga => ImageFormat::Tga,
        }
    }
}

fn guess_output_format(path: &Path) -> Option<OutputFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some(OutputFormat::Png),
        "bmp" => Some(OutputFormat::Bmp),
        "tga" => Some(OutputFormat::Tga),
        _ => None,
    }
}

/// Everything `texture info --json` prints
#[derive(Serialize)]
struct TextureInfo<'a> {
    file: &'a Path,
    file_size: usize,
    body_size: usize,
    header: TextureHeader,
    levels: Vec<MipLevel>,
    trailing_bytes: usize,
}

fn open_texture(file: &Path) -> Result<Texture> {
    load_texture(file).with_context(|| format!("Failed to load texture file: {}", file.display()))
}

fn open_palette(file: &Path, layout: PaletteLayout) -> Result<AnyPalette> {
    load_palette(file, layout.into())
        .with_context(|| format!("Failed to load palette file: {}", file.display()))
}

fn show_texture_info(file: PathBuf, show_raw: bool, json: bool) -> Result<()> {
    let texture = open_texture(&file)?;

    if json {
        let info = TextureInfo {
            file: &file,
            file_size: texture.raw().len(),
            body_size: texture.body().len(),
            header: texture.header,
            levels: texture.complete_levels(),
            trailing_bytes: texture.trailing_bytes(),
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Texture File Information: {}", file.display());
    println!("=====================================");
    println!(
        "File Size: {}",
        format_bytes(texture.raw().len() as u64)
    );
    println!(
        "Dimensions: {}x{}",
        texture.header.width, texture.header.height
    );
    println!("Body Size: {} bytes", texture.body().len());
    println!("Mipmap Levels: {}", texture.level_count());

    let trailing = texture.trailing_bytes();
    if trailing > 0 {
        println!("Trailing Bytes: {trailing}");
    }

    if show_raw {
        println!("\nRaw Header Data:");
        println!("----------------");
        println!("  Leading: {}", format_hex(&texture.header.leading));
        println!("  Width: {}", texture.header.width);
        println!("  Height: {}", texture.header.height);
        println!("  Reserved: {}", format_hex(&texture.header.reserved));
    }

    Ok(())
}

fn show_texture_levels(file: PathBuf) -> Result<()> {
    let texture = open_texture(&file)?;
    let body_len = texture.body().len();

    let mut table = create_table(&["Level", "Size", "Offset", "Pixels", "Stored"]);
    for level in texture.levels() {
        let stored = if level.fits(body_len) {
            "yes".to_string()
        } else {
            format!("partial ({} of {})", body_len - level.offset, level.pixel_count())
        };
        add_table_row(
            &mut table,
            [
                level.id.to_string(),
                format!("{}x{}", level.width, level.height),
                level.offset.to_string(),
                level.pixel_count().to_string(),
                stored,
            ],
        );
    }
    table.printstd();
    Ok(())
}

struct ConvertArgs {
    input: PathBuf,
    output: PathBuf,
    palette: PathBuf,
    palette_layout: PaletteLayout,
    level: usize,
    format: Option<OutputFormat>,
}

fn convert_texture(args: ConvertArgs) -> Result<()> {
    let format = args
        .format
        .or_else(|| guess_output_format(&args.output))
        .context("Failed to determine output format. Please specify with --format")?;

    let texture = open_texture(&args.input)?;
    let palette = open_palette(&args.palette, args.palette_layout)?;
    log::info!(
        "Converting mipmap {} of {} with a {} channel palette",
        args.level,
        args.input.display(),
        palette.channel_count()
    );

    let grid = decode_level(&texture, args.level, &palette)
        .with_context(|| format!("Failed to decode mipmap level {}", args.level))?;
    grid.save_with_format(&args.output, format.into())
        .with_context(|| format!("Failed to save image: {}", args.output.display()))?;

    println!(
        "✓ Converted {} level {} ({}x{}) to {}",
        args.input.display(),
        args.level,
        grid.width(),
        grid.height(),
        args.output.display()
    );
    Ok(())
}

struct ExportArgs {
    dir: PathBuf,
    output_dir: PathBuf,
    palette: PathBuf,
    palette_layout: PaletteLayout,
    all_levels: bool,
    format: OutputFormat,
    keep_going: bool,
}

/// Export the requested levels of one texture, returns the number of images written
fn export_texture(
    file: &Path,
    palette: &AnyPalette,
    args: &ExportArgs,
) -> Result<usize> {
    let texture = open_texture(file)?;
    let levels: Vec<usize> = if args.all_levels {
        texture.complete_levels().iter().map(|level| level.id).collect()
    } else {
        vec![0]
    };

    for &level in &levels {
        let output = level_output_path(&args.output_dir, file, level, args.format.extension());
        decode_level(&texture, level, palette)
            .and_then(|grid| grid.save_with_format(&output, args.format.into()))
            .with_context(|| {
                format!(
                    "Failed to export mipmap level {} of {}",
                    level,
                    file.display()
                )
            })?;
        log::debug!("Wrote {}", output.display());
    }
    Ok(levels.len())
}

fn export_all(args: ExportArgs) -> Result<()> {
    let nested = textures_dir(&args.dir);
    let source = if nested.is_dir() { nested } else { args.dir.clone() };

    let files = find_textures(&source)
        .with_context(|| format!("Failed to list textures in {}", source.display()))?;
    if files.is_empty() {
        anyhow::bail!(
            "No texture files found in {} (expected extensions: {})",
            source.display(),
            recognized_extensions().into_iter().collect::<Vec<_>>().join(", ")
        );
    }

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.output_dir.display()
        )
    })?;
    let palette = open_palette(&args.palette, args.palette_layout)?;

    let pb = create_progress_bar(files.len() as u64, "Exporting textures");

    #[cfg(feature = "parallel")]
    let results: Vec<(PathBuf, Result<usize>)> = {
        use rayon::prelude::*;
        files
            .par_iter()
            .map(|file| {
                let result = export_texture(file, &palette, &args);
                pb.inc(1);
                (file.clone(), result)
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<(PathBuf, Result<usize>)> = {
        let mut results = Vec::with_capacity(files.len());
        for file in &files {
            let result = export_texture(file, &palette, &args);
            pb.inc(1);
            let failed = result.is_err();
            results.push((file.clone(), result));
            if failed && !args.keep_going {
                break;
            }
        }
        results
    };

    pb.finish_and_clear();

    let mut images = 0;
    let mut failures = 0;
    for (file, result) in results {
        match result {
            Ok(count) => images += count,
            Err(e) if args.keep_going => {
                log::warn!("Skipping {}: {e:#}", file.display());
                failures += 1;
            }
            Err(e) => return Err(e),
        }
    }

    println!(
        "✓ Exported {} image(s) from {} texture(s) to {}",
        images,
        files.len() - failures,
        args.output_dir.display()
    );
    if failures > 0 {
        println!("⚠ {failures} texture(s) failed");
    }
    Ok(())
}

fn list_extensions() -> Result<()> {
    println!("Texture folder: {TEXTURES_FOLDER}");
    println!("Recognized extensions:");
    for ext in recognized_extensions() {
        println!("  .{ext}");
    }
    Ok(())
}

pub fn execute(command: TextureCommands) -> Result<()> {
    match command {
        TextureCommands::Info { file, raw, json } => show_texture_info(file, raw, json),
        TextureCommands::Levels { file } => show_texture_levels(file),
        TextureCommands::Convert {
            input,
            output,
            palette,
            palette_layout,
            level,
            format,
        } => convert_texture(ConvertArgs {
            input,
            output,
            palette,
            palette_layout,
            level,
            format,
        }),
        TextureCommands::ExportAll {
            dir,
            output_dir,
            palette,
            palette_layout,
            all_levels,
            format,
            keep_going,
        } => export_all(ExportArgs {
            dir,
            output_dir,
            palette,
            palette_layout,
            all_levels,
            format,
            keep_going,
        }),
        TextureCommands::Extensions => list_extensions(),
    }
}
