use egui::Color32;

use crate::error::{ColorError, ColorResult};

/// The paint color a fresh grid starts with.
pub const DEFAULT_COLOR: &str = "black";

/// Parse a text color: `#rgb`, `#rrggbb`, `#rrggbbaa` or a handful of CSS names.
pub fn parse_color(text: &str) -> ColorResult<Color32> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Unrecognised(text.to_string()));
    }

    let named = match text.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        "transparent" => Color32::TRANSPARENT,
        _ => return Err(ColorError::Unrecognised(text.to_string())),
    };
    Ok(named)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    // #abc is shorthand for #aabbcc
    let short = |c: &str| channel(c).map(|v| v * 17);

    match hex.len() {
        3 => Some(Color32::from_rgb(
            short(&hex[0..1])?,
            short(&hex[1..2])?,
            short(&hex[2..3])?,
        )),
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Format an opaque color as `#rrggbb`, the encoding the color control emits.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
