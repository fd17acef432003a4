//! Color parsing, RGB/HSL conversion and palette generation.
//!
//! Hue-based palettes (analogous, complementary, triadic, tetradic) rotate
//! the base color's HSL hue and keep saturation and lightness. The
//! monochromatic palette shifts all channels together.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Rounded HSL as displayed: hue in degrees, saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    InvalidHex(String),
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex(value) => write!(f, "invalid hex color `{value}`"),
        }
    }
}

impl Error for ColorError {}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB`; the hash is optional, case is ignored.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(value.to_string());
        let digits = value.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        let channel = |at: usize| u8::from_str_radix(&expanded[at..at + 2], 16).map_err(|_| invalid());

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`, the value a color input holds.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let (h, s, l) = rgb_to_hsl_unit(self);
        Hsl {
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// All display formats for the picker panel.
    pub fn formats(self) -> ColorFormats {
        ColorFormats {
            hex: self.to_hex().to_uppercase(),
            rgb: self.to_css_rgb(),
            hsl: self.to_hsl().to_string(),
        }
    }

    /// Same saturation and lightness, hue moved by `degrees`.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let (h, s, l) = rgb_to_hsl_unit(self);
        let h = (h + degrees / 360.0).rem_euclid(1.0);
        hsl_unit_to_rgb(h, s, l)
    }

    fn shifted(self, delta: i16) -> Self {
        let shift = |channel: u8| (i16::from(channel) + delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Converts rounded HSL back to RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl_unit_to_rgb(
        f64::from(hsl.h % 360) / 360.0,
        f64::from(hsl.s.min(100)) / 100.0,
        f64::from(hsl.l.min(100)) / 100.0,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFormats {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
}

impl PaletteKind {
    /// Display order in the palette panel.
    pub const ALL: [PaletteKind; 5] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
        }
    }
}

/// Palette colors derived from `base`; the base color is always included.
pub fn generate_palette(kind: PaletteKind, base: Rgb) -> Vec<Rgb> {
    match kind {
        PaletteKind::Monochromatic => vec![
            base,
            base.shifted(30),
            base.shifted(-30),
            base.shifted(60),
            base.shifted(-60),
        ],
        PaletteKind::Analogous => rotations(base, &[-30.0, -15.0, 0.0, 15.0, 30.0]),
        PaletteKind::Complementary => rotations(base, &[0.0, 180.0]),
        PaletteKind::Triadic => rotations(base, &[0.0, 120.0, 240.0]),
        PaletteKind::Tetradic => rotations(base, &[0.0, 90.0, 180.0, 270.0]),
    }
}

fn rotations(base: Rgb, degrees: &[f64]) -> Vec<Rgb> {
    degrees
        .iter()
        .map(|&offset| {
            if offset == 0.0 {
                base
            } else {
                base.rotate_hue(offset)
            }
        })
        .collect()
}

/// HSL components in `[0, 1]`.
fn rgb_to_hsl_unit(color: Rgb) -> (f64, f64, f64) {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_unit_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        let gray = unit_to_channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb::new(
        unit_to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_to_channel(p, q, h)),
        unit_to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn shifted_clamps_each_channel() {
        let color = Rgb::new(250, 10, 128);
        assert_eq!(color.shifted(30), Rgb::new(255, 40, 158));
        assert_eq!(color.shifted(-30), Rgb::new(220, 0, 98));
    }
}
