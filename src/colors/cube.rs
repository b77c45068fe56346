use image::Rgb;

use crate::io::error::{Result, invalid_parameter};

/// Quantised RGB colour cube with `levels` values per channel
///
/// Level `i` maps to channel value `i * 256 / levels`, so 32 levels gives
/// the multiples of 8 and 256 levels gives every 8-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCube {
    levels: usize,
}

impl ColorCube {
    /// Create a cube with `levels` values per channel
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `levels` is zero or above 256
    pub fn new(levels: usize) -> Result<Self> {
        if levels == 0 || levels > 256 {
            return Err(invalid_parameter(
                "levels",
                &levels,
                &"must be between 1 and 256",
            ));
        }
        Ok(Self { levels })
    }

    /// Values per channel
    pub const fn levels(&self) -> usize {
        self.levels
    }

    /// Number of distinct colours
    pub const fn len(&self) -> usize {
        self.levels * self.levels * self.levels
    }

    /// Always false, a cube has at least one level
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Channel value of a quantisation level
    pub const fn channel(&self, level: usize) -> u8 {
        (level * 256 / self.levels) as u8
    }

    /// Every colour of the cube, red-major then green then blue
    pub fn colors(&self) -> Vec<Rgb<u8>> {
        let levels = self.levels;
        let mut colors = Vec::with_capacity(self.len());
        for r in 0..levels {
            for g in 0..levels {
                for b in 0..levels {
                    colors.push(Rgb([self.channel(r), self.channel(g), self.channel(b)]));
                }
            }
        }
        colors
    }
}
