//! Perceptual sort orders for colour sources

use std::cmp::Ordering;

use image::Rgb;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::math::color::HslColor;

/// HSL component used as a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Hue angle
    Hue,
    /// Saturation
    Saturation,
    /// Lightness
    Lightness,
}

impl Component {
    const fn of(self, color: &HslColor) -> f64 {
        match self {
            Self::Hue => color.hue,
            Self::Saturation => color.saturation,
            Self::Lightness => color.lightness,
        }
    }
}

/// Lexicographic HSL ordering with a per-key direction
///
/// Keys are compared in `order`; `reverse[i]` sorts key `i` descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslOrdering {
    /// Keys from most to least significant
    pub order: [Component; 3],
    /// Descending flag per key
    pub reverse: [bool; 3],
}

impl Default for HslOrdering {
    // Hue ascending, then most saturated and lightest first
    fn default() -> Self {
        Self {
            order: [Component::Hue, Component::Saturation, Component::Lightness],
            reverse: [false, true, true],
        }
    }
}

impl HslOrdering {
    /// Compare two colours under this ordering
    pub fn compare(&self, a: &HslColor, b: &HslColor) -> Ordering {
        self.order
            .iter()
            .zip(self.reverse)
            .map(|(component, reverse)| {
                let ordering = component.of(a).total_cmp(&component.of(b));
                if reverse { ordering.reverse() } else { ordering }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort of `colors` under this ordering
    pub fn sort(&self, colors: &mut [Rgb<u8>]) {
        let mut keyed: Vec<(HslColor, Rgb<u8>)> = colors
            .iter()
            .map(|&color| (HslColor::from_rgb(color), color))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| self.compare(a, b));

        for (slot, (_, color)) in colors.iter_mut().zip(keyed) {
            *slot = color;
        }
    }
}

/// Shuffle colours with a seeded generator
///
/// The same seed always produces the same order.
pub fn shuffle_colors(colors: &mut [Rgb<u8>], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    colors.shuffle(&mut rng);
}
