use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A palette entry: either transparent or an opaque 24 bit rgb color.
///
/// The rgb channels of a transparent color are kept but carry no meaning,
/// two transparent colors always compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub transparent: bool,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Color::transparent()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.transparent {
            write!(f, "{{Color: transparent}}")
        } else {
            write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}}}", self.r, self.g, self.b)
        }
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { transparent: false, r, g, b }
    }

    pub const fn transparent() -> Self {
        Color {
            transparent: true,
            r: 0,
            g: 0,
            b: 0,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Packs the color as `0xAARRGGBB`. Transparent colors are transparent black.
    pub fn argb(&self) -> u32 {
        if self.transparent {
            return 0;
        }
        (0xff << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Any alpha other than 0 counts as opaque.
    pub fn from_argb(color: u32) -> Self {
        if color >> 24 == 0 {
            return Color::transparent();
        }
        Color::new((color >> 16) as u8, (color >> 8) as u8, color as u8)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        match (self.transparent, other.transparent) {
            (true, true) => true,
            (false, false) => self.r == other.r && self.g == other.g && self.b == other.b,
            _ => false,
        }
    }
}

impl Eq for Color {}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(value: Color) -> (u8, u8, u8) {
        (value.r, value.g, value.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> [u8; 3] {
        [value.r, value.g, value.b]
    }
}
