use parkan_texture::{decode_level, load_palette, load_texture};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        println!("Usage: {} <texture> <palette> [level] [output.png]", args[0]);
        println!("\nExample: Convert one mipmap level of a Parkan texture to PNG");
        return;
    }

    let texture_filename = &args[1];
    let palette_filename = &args[2];
    let level = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);
    let output_filename = args.get(4).map(String::as_str).unwrap_or("output.png");

    let texture = match load_texture(texture_filename) {
        Ok(texture) => texture,
        Err(e) => {
            eprintln!("✗ Failed to load texture '{texture_filename}': {e}");
            return;
        }
    };
    println!("✓ Loaded texture: {texture_filename}");
    println!(
        "  Dimensions: {}x{}",
        texture.header.width, texture.header.height
    );
    println!("  Mipmaps: {}", texture.level_count());

    let palette = match load_palette(palette_filename, None) {
        Ok(palette) => palette,
        Err(e) => {
            eprintln!("✗ Failed to load palette '{palette_filename}': {e}");
            return;
        }
    };

    match decode_level(&texture, level, &palette).and_then(|grid| grid.save(output_filename)) {
        Ok(()) => println!("✓ Saved level {level} as: {output_filename}"),
        Err(e) => eprintln!("✗ Failed to convert level {level}: {e}"),
    }
}
