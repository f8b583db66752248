// ABOUTME: Color representation and device color space conversion.
// ABOUTME: Supports device RGB, device gray, and opaque pattern colors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque handle to an image or pattern color owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternId(pub u64);

/// Normalized device RGB components plus alpha, each in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue, saturation, brightness and alpha, each in 0.0..=1.0.
///
/// Hue is a fraction of a full turn, so 0.5 is cyan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsba {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Rgb(Rgba),
    Gray { white: f64, alpha: f64 },
    /// Image-backed color with no component representation
    Pattern(PatternId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Color {0:?} cannot be converted to device RGB")]
pub struct ConversionError(pub PatternId);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Empty color string")]
    Empty,

    #[error("Invalid hex color length: {0} (expected 6 or 8 digits)")]
    InvalidLength(usize),

    #[error("Invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_hsba(self) -> Hsba {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let degrees = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * (((self.g - self.b) / delta) % 6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };
        let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };

        Hsba {
            hue: degrees / 360.0,
            saturation,
            brightness: max,
            alpha: self.a,
        }
    }
}

impl Hsba {
    pub const fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Convert to device RGB. Out-of-range components are clamped first.
    #[allow(clippy::many_single_char_names)]
    pub fn to_rgba(self) -> Rgba {
        let h = self.hue.clamp(0.0, 1.0) * 6.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);
        let a = self.alpha.clamp(0.0, 1.0);

        let sector = (h.floor() as u8) % 6;
        let f = h - h.floor();

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::new(r, g, b, a)
    }
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::Rgb(Rgba::new(r, g, b, 1.0))
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::Rgb(Rgba::new(r, g, b, a))
    }

    pub const fn gray(white: f64) -> Self {
        Self::Gray { white, alpha: 1.0 }
    }

    pub fn hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self::Rgb(Hsba::new(hue, saturation, brightness, alpha).to_rgba())
    }

    pub const BLACK: Self = Self::gray(0.0);

    pub const WHITE: Self = Self::gray(1.0);

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }

        let component = |i: usize| -> Result<f64, ColorParseError> {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|v| v as f64 / 255.0)
                .ok_or_else(|| ColorParseError::InvalidDigit(hex.to_string()))
        };

        let alpha = if digits.len() == 8 { component(6)? } else { 1.0 };
        Ok(Self::rgba(component(0)?, component(2)?, component(4)?, alpha))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(&self) -> Result<String, ConversionError> {
        let rgba = self.to_device_rgb()?;
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut hex = format!("#{:02x}{:02x}{:02x}", byte(rgba.r), byte(rgba.g), byte(rgba.b));
        if rgba.a < 1.0 {
            hex.push_str(&format!("{:02x}", byte(rgba.a)));
        }
        Ok(hex)
    }

    /// Convert into the device RGB space used for every comparison.
    pub fn to_device_rgb(&self) -> Result<Rgba, ConversionError> {
        match *self {
            Color::Rgb(rgba) => Ok(rgba),
            Color::Gray { white, alpha } => Ok(Rgba::new(white, white, white, alpha)),
            Color::Pattern(id) => Err(ConversionError(id)),
        }
    }

    pub fn to_hsba(&self) -> Result<Hsba, ConversionError> {
        self.to_device_rgb().map(Rgba::to_hsba)
    }

    /// HSB brightness in device RGB, the value contrast is measured on.
    pub fn brightness(&self) -> Result<f64, ConversionError> {
        self.to_hsba().map(|hsba| hsba.brightness)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
