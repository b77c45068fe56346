//! Occupancy and colour storage for every cell of the output image

use bitvec::prelude::*;
use image::Rgb;
use ndarray::Array2;

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::math::color::HslColor;
use crate::spatial::grid::{Grid, Point};

/// Fixed-size grid of cells, each empty or holding its final colour
///
/// Occupancy is tracked in a bitset; colours are stored both as RGB and in
/// their perceptual form so the cost model never converts on the hot path.
/// A committed cell is never cleared or recoloured.
#[derive(Debug, Clone)]
pub struct Canvas {
    grid: Grid,
    occupied: BitVec,
    colors: Array2<Rgb<u8>>,
    perceptual: Array2<HslColor>,
    occupied_count: usize,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new(grid: Grid) -> Self {
        let shape = (grid.height(), grid.width());
        Self {
            grid,
            occupied: bitvec![0; grid.cell_count()],
            colors: Array2::from_elem(shape, Rgb([0, 0, 0])),
            perceptual: Array2::from_elem(shape, HslColor::default()),
            occupied_count: 0,
        }
    }

    /// Geometry of the canvas
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Commit `color` to the empty cell `p`
    ///
    /// # Errors
    ///
    /// Returns `AlreadyOccupied` if the cell already holds a colour, and
    /// `InvalidParameter` if `p` lies outside the canvas
    pub fn take(&mut self, p: Point, color: Rgb<u8>) -> Result<()> {
        if !self.grid.contains(p) {
            return Err(invalid_parameter(
                "point",
                &format!("({}, {})", p.x, p.y),
                &"outside the canvas",
            ));
        }
        if self.is_occupied(p) {
            return Err(AlgorithmError::AlreadyOccupied { point: p });
        }

        self.occupied.set(self.grid.index(p), true);
        if let Some(cell) = self.colors.get_mut([p.y, p.x]) {
            *cell = color;
        }
        if let Some(cell) = self.perceptual.get_mut([p.y, p.x]) {
            *cell = HslColor::from_rgb(color);
        }
        self.occupied_count += 1;

        Ok(())
    }

    /// Test whether a cell holds a colour
    pub fn is_occupied(&self, p: Point) -> bool {
        self.grid.contains(p)
            && self
                .occupied
                .get(self.grid.index(p))
                .is_some_and(|bit| *bit)
    }

    /// Colour committed to a cell, if any
    pub fn color_at(&self, p: Point) -> Option<Rgb<u8>> {
        if self.is_occupied(p) {
            self.colors.get([p.y, p.x]).copied()
        } else {
            None
        }
    }

    /// Perceptual form of the colour committed to a cell, if any
    pub fn perceptual_at(&self, p: Point) -> Option<&HslColor> {
        if self.is_occupied(p) {
            self.perceptual.get([p.y, p.x])
        } else {
            None
        }
    }

    /// Number of occupied cells
    pub const fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Whether every cell is occupied
    pub const fn is_full(&self) -> bool {
        self.occupied_count == self.grid.cell_count()
    }

    /// Iterate occupied cells in row-major order
    pub fn occupied_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.occupied
            .iter_ones()
            .map(|index| self.grid.point_at(index))
    }
}
