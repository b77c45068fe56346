use image::Rgb;

use crate::io::error::{AlgorithmError, Result};
use crate::placement::Placer;
use crate::spatial::grid::{Grid, Point};

/// Fills the canvas row by row, left to right
#[derive(Debug, Clone)]
pub struct RasterPlacer {
    grid: Grid,
    next: usize,
}

impl RasterPlacer {
    /// Start at the top-left cell
    pub const fn new(grid: Grid) -> Self {
        Self { grid, next: 0 }
    }
}

impl Placer for RasterPlacer {
    fn place(&mut self, _color: Rgb<u8>) -> Result<Point> {
        if self.next >= self.grid.cell_count() {
            return Err(AlgorithmError::CanvasFull {
                capacity: self.grid.cell_count(),
            });
        }

        let point = self.grid.point_at(self.next);
        self.next += 1;
        Ok(point)
    }

    fn capacity(&self) -> usize {
        self.grid.cell_count()
    }
}
