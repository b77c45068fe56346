//! Perceptual colour representation used by the colour-continuity cost
//!
//! Colours are compared in the HSL cylinder rather than raw RGB: hue is an
//! angle, saturation a radius and lightness the height, so two dark colours
//! with very different hues are still close.

use image::Rgb;
use palette::{FromColor, Hsl, Srgb};

/// Hue, saturation and lightness of an RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslColor {
    /// Hue in degrees, `0 <= hue < 360`
    pub hue: f64,
    /// Saturation in `[0, 1]`
    pub saturation: f64,
    /// Lightness in `[0, 1]`
    pub lightness: f64,
}

impl HslColor {
    /// Convert an 8-bit RGB colour
    pub fn from_rgb(color: Rgb<u8>) -> Self {
        let Rgb([red, green, blue]) = color;
        let srgb: Srgb<f32> = Srgb::new(red, green, blue).into_format();
        let hsl: Hsl = Hsl::from_color(srgb);

        Self {
            hue: f64::from(hsl.hue.into_positive_degrees()),
            saturation: f64::from(hsl.saturation),
            lightness: f64::from(hsl.lightness),
        }
    }

    /// Position in the HSL cylinder as `(a, b, lightness)`
    pub fn cylinder(&self) -> [f64; 3] {
        let (sin, cos) = self.hue.to_radians().sin_cos();
        [self.saturation * cos, self.saturation * sin, self.lightness]
    }

    /// Euclidean distance in the HSL cylinder
    ///
    /// Ranges from 0 for identical colours to `sqrt(5)` for fully saturated
    /// opposite hues at opposite lightness extremes.
    pub fn distance(&self, other: &Self) -> f64 {
        let [a1, b1, l1] = self.cylinder();
        let [a2, b2, l2] = other.cylinder();
        let da = a1 - a2;
        let db = b1 - b2;
        let dl = l1 - l2;
        dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
    }
}

impl From<Rgb<u8>> for HslColor {
    fn from(color: Rgb<u8>) -> Self {
        Self::from_rgb(color)
    }
}
