//! Bounded record of recent placements

use std::collections::VecDeque;

use crate::spatial::grid::{Grid, Point};

// Deeper histories grow on demand
const HISTORY_CAPACITY_HINT: usize = 1024;

/// Last `depth` committed points, most recent last
///
/// Owned by the placement engine and read by the cost model.
#[derive(Debug, Clone)]
pub struct PlacementHistory {
    points: VecDeque<Point>,
    depth: usize,
}

impl PlacementHistory {
    /// Create an empty history remembering up to `depth` points
    pub fn new(depth: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(depth.min(HISTORY_CAPACITY_HINT)),
            depth,
        }
    }

    /// Append a committed point, evicting the oldest beyond `depth`
    pub fn record(&mut self, p: Point) {
        if self.depth == 0 {
            return;
        }
        if self.points.len() == self.depth {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    /// Most recent placement
    pub fn latest(&self) -> Option<Point> {
        self.points.back().copied()
    }

    /// Last committed step as a vector from the previous placement
    ///
    /// Needs at least two remembered points.
    pub fn last_step(&self, grid: &Grid) -> Option<(isize, isize)> {
        let len = self.points.len();
        if len < 2 {
            return None;
        }
        let previous = self.points.get(len - 2)?;
        let latest = self.points.get(len - 1)?;
        Some(grid.delta(*previous, *latest))
    }

    /// Iterate remembered points, oldest first
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Number of remembered points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been placed yet
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of remembered points
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
