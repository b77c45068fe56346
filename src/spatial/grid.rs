//! Canvas geometry: points, edge handling and neighbourhood enumeration
//!
//! Neighbourhoods are Chebyshev (Moore) windows. Clamped grids shrink the
//! window at edges and corners; toroidal grids wrap around and never report a
//! cell twice, even when the window is wider than the grid.

use std::cmp::Ordering;

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Integer pixel coordinate
///
/// Ordered row-major: by `y`, then by `x`. The evaluator relies on this
/// ordering for its tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column, `0 <= x < width`
    pub x: usize,
    /// Row, `0 <= y < height`
    pub y: usize,
}

impl Point {
    /// Create a point from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How neighbourhoods behave at the canvas border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Windows are cut off at the border
    #[default]
    Clamped,
    /// Windows wrap around to the opposite border
    Toroidal,
}

impl EdgePolicy {
    /// Policy for the `wrap_edges` configuration flag
    pub const fn from_wrap(wrap_edges: bool) -> Self {
        if wrap_edges {
            Self::Toroidal
        } else {
            Self::Clamped
        }
    }

    /// Whether windows wrap around
    pub const fn wraps(self) -> bool {
        matches!(self, Self::Toroidal)
    }
}

/// Fixed-size grid geometry shared by the canvas, frontier and cost model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    edges: EdgePolicy,
}

impl Grid {
    /// Create a grid, validating its dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_CANVAS_DIMENSION`
    pub fn new(width: usize, height: usize, edges: EdgePolicy) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        Ok(Self {
            width,
            height,
            edges,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Border behaviour
    pub const fn edges(&self) -> EdgePolicy {
        self.edges
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Test whether a point lies on the grid
    pub const fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Row-major linear index of a point
    pub const fn index(&self, p: Point) -> usize {
        p.y * self.width + p.x
    }

    /// Point for a row-major linear index
    pub const fn point_at(&self, index: usize) -> Point {
        Point::new(index % self.width, index / self.width)
    }

    /// Iterate every cell in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cell_count()).map(|index| self.point_at(index))
    }

    /// Collect the Chebyshev neighbourhood of `p` in row-major order
    ///
    /// The point itself is never included. An 8×4 clamped grid gives 3
    /// neighbours at a corner, 5 along an edge and 8 in the interior for
    /// radius 1.
    pub fn neighbours(&self, p: Point, radius: usize) -> Vec<Point> {
        let side = radius.saturating_mul(2).saturating_add(1);
        let window = side.saturating_mul(side).saturating_sub(1);
        let mut found = Vec::with_capacity(window.min(self.cell_count()));
        self.for_each_neighbour(p, radius, |n| found.push(n));
        found
    }

    /// Visit the Chebyshev neighbourhood of `p` without allocating
    pub fn for_each_neighbour(&self, p: Point, radius: usize, mut visit: impl FnMut(Point)) {
        let (row_start, row_end) = self.axis_span(p.y, self.height, radius);
        let (col_start, col_end) = self.axis_span(p.x, self.width, radius);

        for row in row_start..=row_end {
            let y = Self::wrap_axis(row, self.height);
            for col in col_start..=col_end {
                let x = Self::wrap_axis(col, self.width);
                if x != p.x || y != p.y {
                    visit(Point::new(x, y));
                }
            }
        }
    }

    /// Count neighbourhood cells matching a predicate
    pub fn count_neighbours(
        &self,
        p: Point,
        radius: usize,
        mut predicate: impl FnMut(Point) -> bool,
    ) -> usize {
        let mut count = 0;
        self.for_each_neighbour(p, radius, |n| {
            if predicate(n) {
                count += 1;
            }
        });
        count
    }

    /// Signed step from `from` to `to`
    ///
    /// Toroidal grids take the shorter way around each axis.
    pub const fn delta(&self, from: Point, to: Point) -> (isize, isize) {
        let dx = to.x as isize - from.x as isize;
        let dy = to.y as isize - from.y as isize;
        match self.edges {
            EdgePolicy::Clamped => (dx, dy),
            EdgePolicy::Toroidal => (
                Self::shortest(dx, self.width as isize),
                Self::shortest(dy, self.height as isize),
            ),
        }
    }

    const fn shortest(delta: isize, len: isize) -> isize {
        if 2 * delta > len {
            delta - len
        } else if 2 * delta < -len {
            delta + len
        } else {
            delta
        }
    }

    // Inclusive span of axis offsets covering the window; wide toroidal
    // windows collapse to the whole axis so no cell is visited twice.
    // A radius beyond the axis length covers the same cells as the length.
    const fn axis_span(&self, coord: usize, len: usize, radius: usize) -> (isize, isize) {
        let radius = if radius > len { len } else { radius };
        let coord = coord as isize;
        let len = len as isize;
        let radius = radius as isize;
        match self.edges {
            EdgePolicy::Toroidal if 2 * radius + 1 >= len => (0, len - 1),
            EdgePolicy::Toroidal => (coord - radius, coord + radius),
            EdgePolicy::Clamped => {
                let start = if coord - radius < 0 { 0 } else { coord - radius };
                let end = if coord + radius > len - 1 {
                    len - 1
                } else {
                    coord + radius
                };
                (start, end)
            }
        }
    }

    const fn wrap_axis(offset: isize, len: usize) -> usize {
        offset.rem_euclid(len as isize) as usize
    }
}
