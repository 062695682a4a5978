//! Palette command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use parkan_texture::{Palette, load_palette};
use std::path::PathBuf;

use super::PaletteLayout;
use crate::utils::{add_table_row, create_table, format_color};

#[derive(Subcommand)]
pub enum PaletteCommands {
    /// Display information about a raw palette file
    Info {
        /// Path to the palette file
        file: PathBuf,

        /// Channel layout of the palette file
        #[arg(long, default_value = "auto")]
        layout: PaletteLayout,

        /// Print every color of the palette
        #[arg(long)]
        colors: bool,
    },
}

fn show_palette_info(file: PathBuf, layout: PaletteLayout, show_colors: bool) -> Result<()> {
    let palette = load_palette(&file, layout.into())
        .with_context(|| format!("Failed to load palette file: {}", file.display()))?;

    println!("Palette File Information: {}", file.display());
    println!("=====================================");
    println!("Layout: {:?}", palette.layout());
    println!("Channels: {}", palette.channel_count());
    println!("Colors: {}", palette.len());

    if show_colors {
        println!();
        let mut table = create_table(&["Index", "Color"]);
        for index in 0..palette.len() {
            let color = palette.color_for(index as u8)?;
            add_table_row(&mut table, [index.to_string(), format_color(color)]);
        }
        table.printstd();
    }

    Ok(())
}

pub fn execute(command: PaletteCommands) -> Result<()> {
    match command {
        PaletteCommands::Info {
            file,
            layout,
            colors,
        } => show_palette_info(file, layout, colors),
    }
}
