//! Colour conversions used by the tools and the colour wheel.
//!
//! Colours travel through the board as `#rrggbb` strings, the same form the
//! swatches and wheel produce. They are resolved to [`Rgb`] only when a
//! segment's paint is computed.

use std::fmt;

/// An 8-bit sRGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Resolved paint of a segment, already adjusted for the tool that drew it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    /// Colour with its alpha folded in, used by the brush so overlapping
    /// segments build up density.
    Translucent { rgb: Rgb, alpha: f32 },
}

impl Paint {
    pub fn rgb(&self) -> Rgb {
        match self {
            Paint::Solid(rgb) | Paint::Translucent { rgb, .. } => *rgb,
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Paint::Solid(_) => 1.0,
            Paint::Translucent { alpha, .. } => *alpha,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Rgb::BLACK)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid(rgb) => write!(f, "{}", rgb.to_hex()),
            Paint::Translucent { rgb, alpha } => {
                write!(f, "rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha)
            }
        }
    }
}

/// Converts hue (degrees), saturation and lightness (both 0..=1) to `#rrggbb`.
pub fn hsl_to_hex(hue: f32, saturation: f32, lightness: f32) -> String {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let a = s * l.min(1.0 - l);
    let channel = |n: f32| {
        let k = (n + h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0)).to_hex()
}

/// Parses exactly `#` followed by six hex digits.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}
