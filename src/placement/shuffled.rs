use image::Rgb;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::io::error::{AlgorithmError, Result};
use crate::placement::Placer;
use crate::spatial::grid::{Grid, Point};

/// Visits every cell once in a seeded random order
///
/// The generator is owned by the placer, so the same seed always yields
/// the same order.
#[derive(Debug, Clone)]
pub struct ShuffledPlacer {
    order: Vec<Point>,
    next: usize,
}

impl ShuffledPlacer {
    /// Shuffle all cells of the grid with the given seed
    pub fn new(grid: Grid, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order: Vec<Point> = grid.points().collect();
        order.shuffle(&mut rng);

        Self { order, next: 0 }
    }
}

impl Placer for ShuffledPlacer {
    fn place(&mut self, _color: Rgb<u8>) -> Result<Point> {
        let point = self
            .order
            .get(self.next)
            .copied()
            .ok_or(AlgorithmError::CanvasFull {
                capacity: self.order.len(),
            })?;
        self.next += 1;
        Ok(point)
    }

    fn capacity(&self) -> usize {
        self.order.len()
    }
}
