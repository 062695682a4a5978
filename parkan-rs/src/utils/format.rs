//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format raw bytes as space separated hex pairs
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a color as `#rrggbb` or `#rrggbbaa`, other channel counts as hex pairs
pub fn format_color(color: &[u8]) -> String {
    match color.len() {
        3 | 4 => {
            let hex: String = color.iter().map(|b| format!("{b:02x}")).collect();
            format!("#{hex}")
        }
        _ => format_hex(color),
    }
}
