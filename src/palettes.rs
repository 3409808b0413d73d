//! Built-in color palettes.
//!
//! Palettes are read-only reference data: selecting one copies its colors
//! into the current style, the palette itself is never modified.

use crate::color::Color;

/// The four colors a palette contributes to a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColors {
    pub primary: Color,
    pub secondary: Color,
    pub gradient_from: Color,
    pub gradient_to: Color,
}

/// A named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: PaletteColors,
}

const fn hex(value: u32) -> Color {
    Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

const fn palette(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    colors: [u32; 4],
) -> ColorPalette {
    ColorPalette {
        id,
        name,
        description,
        colors: PaletteColors {
            primary: hex(colors[0]),
            secondary: hex(colors[1]),
            gradient_from: hex(colors[2]),
            gradient_to: hex(colors[3]),
        },
    }
}

/// Every built-in palette, in display order.
pub static PALETTES: [ColorPalette; 12] = [
    palette("apple-white", "Apple White", "Clean and minimal white theme", [0x000000, 0x86868b, 0xffffff, 0xf5f5f7]),
    palette("apple-dark", "Apple Dark", "Sleek dark theme", [0xffffff, 0x86868b, 0x000000, 0x1d1d1f]),
    palette("google-blue", "Google Blue", "Google's signature blue", [0x4285f4, 0x34a853, 0xffffff, 0xf8f9fa]),
    palette("microsoft", "Microsoft", "Microsoft's modern style", [0x00a4ef, 0x7fba00, 0xf2f2f2, 0xffffff]),
    palette("github-dark", "GitHub Dark", "GitHub's dark theme", [0xffffff, 0x6e7681, 0x0d1117, 0x161b22]),
    palette("spotify", "Spotify", "Spotify's vibrant green", [0x1db954, 0x1ed760, 0x000000, 0x121212]),
    palette("twitter-blue", "Twitter Blue", "Twitter's classic blue", [0x1da1f2, 0x14171a, 0xffffff, 0xf8f9fa]),
    palette("netflix-red", "Netflix Red", "Netflix's bold red", [0xe50914, 0x221f1f, 0x000000, 0x141414]),
    palette("discord", "Discord", "Discord's playful purple", [0x5865f2, 0x99aab5, 0x36393f, 0x2f3136]),
    palette("slack", "Slack", "Slack's workspace colors", [0x36c5f0, 0x2eb67d, 0xffffff, 0xf4ede4]),
    palette("meta", "Meta", "Meta's gradient blue", [0x0668e1, 0x0078ff, 0x0668e1, 0x0078ff]),
    palette("instagram", "Instagram", "Instagram's vibrant gradient", [0x833ab4, 0xfd1d1d, 0x405de6, 0xfd1d1d]),
];

/// The palette that seeds a fresh design.
pub fn default_palette() -> &'static ColorPalette {
    &PALETTES[0]
}

/// Looks a palette up by id.
pub fn find_palette(id: &str) -> Option<&'static ColorPalette> {
    PALETTES.iter().find(|p| p.id == id)
}
