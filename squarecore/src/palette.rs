//! Static color palette.
//!
//! Material design 600-series accents (https://material.io/design/color/),
//! plus the black/white the chrome is drawn with. Read-only data; the app
//! picks one accent at a time for the cells.

use egui::Color32;
use rand::Rng;

/// Build a color from a 0xRRGGBB hex value.
pub const fn from_hex(hex: u32) -> Color32 {
    Color32::from_rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

pub struct Palette;

impl Palette {
    pub const WHITE: Color32 = from_hex(0xFFFFFF);
    pub const BLACK: Color32 = from_hex(0x000000);
    pub const GREY: Color32 = from_hex(0x757575);

    // 600s
    pub const CYAN: Color32 = from_hex(0x00ACC1);
    pub const TEAL: Color32 = from_hex(0x00897B);
    pub const INDIGO: Color32 = from_hex(0x3949AB);
    pub const AMBER: Color32 = from_hex(0xFFB300);
    pub const RED: Color32 = from_hex(0xE53935);
    pub const BLUE: Color32 = from_hex(0x1E88E5);
}

/// Accent choices offered in the view menu. Cyan is the startup accent.
pub const ACCENTS: &[(&str, Color32)] = &[
    ("cyan", Palette::CYAN),
    ("teal", Palette::TEAL),
    ("indigo", Palette::INDIGO),
    ("amber", Palette::AMBER),
];

/// A random opaque color, for the shuffle menu entry.
pub fn random() -> Color32 {
    let mut rng = rand::thread_rng();
    Color32::from_rgb(rng.gen(), rng.gen(), rng.gen())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_channels() {
        assert_eq!(from_hex(0x00ACC1), Color32::from_rgb(0x00, 0xAC, 0xC1));
        assert_eq!(from_hex(0xFFFFFF), Color32::from_rgb(255, 255, 255));
        assert_eq!(from_hex(0x000000), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_default_accent_is_cyan() {
        assert_eq!(ACCENTS[0].1, Palette::CYAN);
    }
}
