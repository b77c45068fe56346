//! Planar distance and angle helpers over integer step vectors

use std::f64::consts::PI;

/// Distance measure used by the recency cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Straight-line distance
    #[default]
    Euclidean,
    /// Sum of absolute axis offsets
    Manhattan,
}

impl DistanceMetric {
    /// Length of the step `(dx, dy)` under this metric
    pub fn length(self, (dx, dy): (isize, isize)) -> f64 {
        let dx = dx as f64;
        let dy = dy as f64;
        match self {
            Self::Euclidean => dx.hypot(dy),
            Self::Manhattan => dx.abs() + dy.abs(),
        }
    }
}

/// Unsigned angle between two step vectors, in `[0, π]`
///
/// Returns `None` when either vector has zero length.
pub fn angle_between(a: (isize, isize), b: (isize, isize)) -> Option<f64> {
    if a == (0, 0) || b == (0, 0) {
        return None;
    }

    let (ax, ay) = (a.0 as f64, a.1 as f64);
    let (bx, by) = (b.0 as f64, b.1 as f64);
    let cross = ax.mul_add(by, -(ay * bx));
    let dot = ax.mul_add(bx, ay * by);

    // atan2 stays accurate for nearly parallel vectors where acos does not
    Some(cross.abs().atan2(dot).clamp(0.0, PI))
}
