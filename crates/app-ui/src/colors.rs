//! Color helpers for server-provided theme colors
//!
//! Servers send brand colors as strings that may be missing or malformed,
//! so parsing always has a fallback. Darkness is judged by HSL lightness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Color Type
// =============================================================================

/// An ARGB color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Alpha
    pub a: u8,
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Opaque black
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Color from ARGB components
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Color from a packed `0xAARRGGBB` value
    pub const fn from_argb_u32(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Packed `0xAARRGGBB` value
    pub const fn to_argb_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Foreground used on light backgrounds
pub const GREY_900: Color = Color::rgb(0x21, 0x21, 0x21);

const LIGHTNESS_DARK_THRESHOLD: f32 = 0.6;

/// Color helper error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ColorError {
    /// The string is not a known color format or name
    #[error("Unknown color: {0}")]
    InvalidColor(String),

    /// Lightness must be within [0, 1]
    #[error("Lightness must be between 0 and 1, got {0}")]
    LightnessOutOfRange(f32),
}

// =============================================================================
// Parsing
// =============================================================================

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("darkgrey", 0xFF444444),
    ("gray", 0xFF888888),
    ("grey", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("lightgrey", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
];

/// Parse `#RRGGBB`, `#AARRGGBB` or a color name (case-insensitive)
pub fn parse_color(value: &str) -> Result<Color, ColorError> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(value.to_string()));
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidColor(value.to_string()))?;
        return match hex.len() {
            6 => Ok(Color::from_argb_u32(0xFF000000 | packed)),
            8 => Ok(Color::from_argb_u32(packed)),
            _ => Err(ColorError::InvalidColor(value.to_string())),
        };
    }

    let name = value.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, packed)| Color::from_argb_u32(*packed))
        .ok_or_else(|| ColorError::InvalidColor(value.to_string()))
}

fn parse_color_or_else(value: Option<&str>, fallback: impl FnOnce() -> Color) -> Color {
    match value {
        Some(value) if !value.trim().is_empty() => parse_color(value).unwrap_or_else(|e| {
            tracing::warn!("Invalid color: {}", e);
            fallback()
        }),
        _ => fallback(),
    }
}

/// Parse a color, using `fallback` when it is absent, blank or invalid
pub fn null_safe_color(value: Option<&str>, fallback: Color) -> Color {
    parse_color_or_else(value, || fallback)
}

/// Parse a text color, falling back to a readable color for `background`
pub fn text_color(value: Option<&str>, background: Color) -> Color {
    parse_color_or_else(value, || foreground_for_background(background))
}

// =============================================================================
// Lightness
// =============================================================================

/// White on dark backgrounds, near-black otherwise
pub fn foreground_for_background(background: Color) -> Color {
    if is_dark_background(background) {
        Color::WHITE
    } else {
        GREY_900
    }
}

/// Whether the color's HSL lightness is below 0.6
pub fn is_dark_background(color: Color) -> bool {
    color.to_hsl().lightness < LIGHTNESS_DARK_THRESHOLD
}

/// Replace the HSL lightness of a color
///
/// The result is opaque.
pub fn set_lightness(color: Color, lightness: f32) -> Result<Color, ColorError> {
    color.with_lightness(lightness)
}

// =============================================================================
// Alpha and Formatting
// =============================================================================

/// Scale the alpha channel by `opacity`
pub fn adjust_opacity(color: Color, opacity: f32) -> Color {
    let alpha = (color.a as f32 * opacity).round().clamp(0.0, 255.0) as u8;
    Color { a: alpha, ..color }
}

/// `#RRGGBB`, dropping alpha
pub fn to_hex_string(color: Color) -> String {
    format!("#{:06X}", color.to_argb_u32() & 0xFFFFFF)
}

// =============================================================================
// HSL
// =============================================================================

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub hue: f32,
    /// Saturation
    pub saturation: f32,
    /// Lightness
    pub lightness: f32,
}

impl Hsl {
    /// Opaque color for these coordinates
    pub fn to_color(self) -> Color {
        let chroma = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let sector = self.hue.rem_euclid(360.0) / 60.0;
        let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u8 {
            0 => (chroma, second, 0.0),
            1 => (second, chroma, 0.0),
            2 => (0.0, chroma, second),
            3 => (0.0, second, chroma),
            4 => (second, 0.0, chroma),
            _ => (chroma, 0.0, second),
        };

        let base = self.lightness - chroma / 2.0;
        Color::rgb(unit_to_channel(r + base), unit_to_channel(g + base), unit_to_channel(b + base))
    }
}

impl Color {
    /// HSL coordinates, ignoring alpha
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = [self.r, self.g, self.b].map(|channel| channel as f32 / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        let lightness = (max + min) / 2.0;

        if chroma <= f32::EPSILON {
            return Hsl { hue: 0.0, saturation: 0.0, lightness };
        }

        let saturation = chroma / (1.0 - (2.0 * lightness - 1.0).abs());
        let sector = if max == r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Hsl { hue: sector * 60.0, saturation, lightness }
    }

    /// Same hue and saturation with another lightness; the result is opaque
    pub fn with_lightness(self, lightness: f32) -> Result<Color, ColorError> {
        if !(0.0..=1.0).contains(&lightness) {
            return Err(ColorError::LightnessOutOfRange(lightness));
        }
        Ok(Hsl { lightness, ..self.to_hsl() }.to_color())
    }
}

fn unit_to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
