//! Hilbert-curve walk over arbitrary canvas sizes
//!
//! The curve is laid over the smallest power-of-two square covering the
//! canvas; curve positions falling outside the canvas are skipped, so every
//! cell is still visited exactly once.

use image::Rgb;

use crate::io::error::{AlgorithmError, Result};
use crate::placement::Placer;
use crate::spatial::grid::{Grid, Point};

/// Places colours along a Hilbert curve
#[derive(Debug, Clone)]
pub struct HilbertPlacer {
    grid: Grid,
    side: usize,
    distance: usize,
}

impl HilbertPlacer {
    /// Start at the curve origin (top-left corner)
    pub const fn new(grid: Grid) -> Self {
        let longest = if grid.width() > grid.height() {
            grid.width()
        } else {
            grid.height()
        };

        Self {
            grid,
            side: longest.next_power_of_two(),
            distance: 0,
        }
    }
}

impl Placer for HilbertPlacer {
    fn place(&mut self, _color: Rgb<u8>) -> Result<Point> {
        let end = self.side * self.side;
        while self.distance < end {
            let point = hilbert_point(self.side, self.distance);
            self.distance += 1;
            if self.grid.contains(point) {
                return Ok(point);
            }
        }

        Err(AlgorithmError::CanvasFull {
            capacity: self.grid.cell_count(),
        })
    }

    fn capacity(&self) -> usize {
        self.grid.cell_count()
    }
}

/// Point at curve distance `distance` on a `side`×`side` Hilbert curve
///
/// `side` must be a power of two.
pub const fn hilbert_point(side: usize, distance: usize) -> Point {
    let mut x = 0;
    let mut y = 0;
    let mut remaining = distance;
    let mut span = 1;

    while span < side {
        let rx = 1 & (remaining / 2);
        let ry = 1 & (remaining ^ rx);

        // Rotate the quadrant so the sub-curve joins its neighbours
        if ry == 0 {
            if rx == 1 {
                x = span - 1 - x;
                y = span - 1 - y;
            }
            let swapped = x;
            x = y;
            y = swapped;
        }

        x += span * rx;
        y += span * ry;
        remaining /= 4;
        span *= 2;
    }

    Point::new(x, y)
}
