//! Growth boundary: empty cells adjacent to the painted region

use std::collections::BTreeSet;

use crate::spatial::canvas::Canvas;
use crate::spatial::grid::Point;

/// Set of empty cells eligible for the next placement
///
/// Members are kept in row-major order so snapshots are reproducible.
/// Only the placement engine mutates the set; evaluators work on owned
/// snapshots and never observe it directly.
#[derive(Debug, Clone, Default)]
pub struct FrontierSet {
    points: BTreeSet<Point>,
}

impl FrontierSet {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Add every point that is still empty on the canvas
    ///
    /// Points already present are left untouched.
    pub fn extend(&mut self, canvas: &Canvas, points: impl IntoIterator<Item = Point>) {
        self.points.extend(
            points
                .into_iter()
                .filter(|&p| canvas.grid().contains(p) && !canvas.is_occupied(p)),
        );
    }

    /// Remove a point that has just been occupied
    pub fn take(&mut self, p: Point) {
        self.points.remove(&p);
    }

    /// Independent copy of the current members
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    /// Test membership
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the frontier has no members
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate members in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}
