use serde::{Deserialize, Serialize};

use crate::geometry::clamp01;
use crate::rng::Rng;
use crate::seed::Seed;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSL; hue in degrees, saturation and lightness in
    /// percent.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let l = l / 100.0;
        let a = s * l.min(1.0 - l) / 100.0;
        let f = |n: f64| -> u8 {
            let k = (n + h / 30.0) % 12.0;
            let channel = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * channel).round() as u8
        };
        Self::new(f(0.0), f(8.0), f(4.0))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let clean = hex.strip_prefix('#').unwrap_or(hex);
        if clean.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&clean[0..2], 16).ok()?;
        let g = u8::from_str_radix(&clean[2..4], 16).ok()?;
        let b = u8::from_str_radix(&clean[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }
}

/// A small ordered color set with a continuous blend function, used for
/// along-path coloring against a dark background layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a 1-3 color palette from a palette seed. Hues fan out from a
    /// random base by a 25-160 degree spread plus a fixed 37-degree per
    /// index increment; saturation and lightness stay in mid-to-high bands.
    pub fn generate(seed: &Seed) -> Self {
        let mut rng = Rng::from_seed(seed);
        let count = rng.next_int(1, 3);
        let base_hue = rng.next_float(0.0, 360.0);

        let mut colors = Vec::with_capacity(count as usize);
        for i in 0..count {
            let hue = (base_hue + rng.next_float(25.0, 160.0) + f64::from(i) * 37.0) % 360.0;
            let sat = 55.0 + rng.next_float(-5.0, 25.0);
            let light = 38.0 + rng.next_float(0.0, 24.0);
            colors.push(Rgb::from_hsl(hue, sat, light));
        }

        Self { colors }
    }

    /// A palette over explicit colors. At least one color is required.
    pub fn from_colors(colors: Vec<Rgb>) -> Self {
        assert!(!colors.is_empty(), "palette requires at least one color");
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(Rgb::to_hex).collect()
    }

    /// Map a normalized position to an interpolated color. `t` is clamped
    /// into [0, 1]; a single-color palette blends to that color everywhere.
    pub fn blend(&self, t: f64) -> Rgb {
        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let scaled = clamp01(t) * (self.colors.len() - 1) as f64;
        let idx = (scaled.floor() as usize).min(self.colors.len() - 2);
        let frac = scaled - idx as f64;
        let a = self.colors[idx];
        let b = self.colors[idx + 1];

        Rgb::new(
            blend_channel(a.r, b.r, frac),
            blend_channel(a.g, b.g, frac),
            blend_channel(a.b, b.b, frac),
        )
    }

    pub fn blend_hex(&self, t: f64) -> String {
        self.blend(t).to_hex()
    }
}

/// Interpolate one channel, rounding to the nearest integer with halfway
/// values rounding down (the midpoint of black and white is `0x7f`).
fn blend_channel(a: u8, b: u8, frac: f64) -> u8 {
    let value = f64::from(a) + (f64::from(b) - f64::from(a)) * frac;
    (value - 0.5).ceil().clamp(0.0, 255.0) as u8
}
