//! Composable cost model ranking frontier candidates for an incoming colour
//!
//! The composite cost of placing colour `c` at candidate `p` is the weighted
//! sum
//!
//! ```text
//! cost(p, c) = w_density   * density(p)
//!            + w_color     * color(p, c)
//!            + w_recency   * recency(p)
//!            + w_direction * direction(p)
//! ```
//!
//! Every term is non-negative and lower is better. A term whose weight is
//! zero is disabled and never computed. The density term is `+inf` for
//! overcrowded candidates, which removes them from contention whenever any
//! finite candidate exists.

use crate::algorithm::history::PlacementHistory;
use crate::io::configuration::{
    DEFAULT_COLOR_WEIGHT, DEFAULT_DIRECTION_WEIGHT, DEFAULT_HISTORY_DEPTH,
    DEFAULT_NEIGHBORHOOD_RADIUS, DEFAULT_NEIGHBORHOOD_WEIGHT, DEFAULT_RECENCY_WEIGHT,
    DENSITY_HIGH_THRESHOLD, DENSITY_LOW_THRESHOLD, DENSITY_RADIUS, MAX_HISTORY_DEPTH, MAX_RADIUS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::color::HslColor;
use crate::math::geometry::{DistanceMetric, angle_between};
use crate::spatial::canvas::Canvas;
use crate::spatial::grid::{EdgePolicy, Grid, Point};
use std::f64::consts::PI;

/// Weights and neighbourhood parameters fixed at engine construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostConfig {
    /// Weight of the density term (0 disables it)
    pub neighborhood_weight: f64,
    /// Weight of the colour continuity term (0 disables it)
    pub color_weight: f64,
    /// Weight of the recency term (0 disables it)
    pub recency_weight: f64,
    /// Weight of the directional continuity term (0 disables it)
    pub direction_weight: f64,
    /// Chebyshev radius defining frontier adjacency and colour neighbours
    pub neighborhood_radius: usize,
    /// Number of recent placements remembered
    pub history_depth: usize,
    /// Whether neighbourhoods wrap around the canvas border
    pub wrap_edges: bool,
    /// Distance measure of the recency term
    pub distance_metric: DistanceMetric,
    /// Chebyshev radius of the density window
    pub density_radius: usize,
    /// Occupied count below which the density cost starts rising
    pub density_low: usize,
    /// Occupied count above which a candidate is disqualified
    pub density_high: usize,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            neighborhood_weight: DEFAULT_NEIGHBORHOOD_WEIGHT,
            color_weight: DEFAULT_COLOR_WEIGHT,
            recency_weight: DEFAULT_RECENCY_WEIGHT,
            direction_weight: DEFAULT_DIRECTION_WEIGHT,
            neighborhood_radius: DEFAULT_NEIGHBORHOOD_RADIUS,
            history_depth: DEFAULT_HISTORY_DEPTH,
            wrap_edges: false,
            distance_metric: DistanceMetric::Euclidean,
            density_radius: DENSITY_RADIUS,
            density_low: DENSITY_LOW_THRESHOLD,
            density_high: DENSITY_HIGH_THRESHOLD,
        }
    }
}

impl CostConfig {
    /// Check every parameter
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - A weight is negative or not finite
    /// - A radius or the history depth is zero
    /// - A radius exceeds `MAX_RADIUS` or the history depth exceeds
    ///   `MAX_HISTORY_DEPTH`
    /// - The density band is empty or starts at zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, weight) in [
            ("neighborhood_weight", self.neighborhood_weight),
            ("color_weight", self.color_weight),
            ("recency_weight", self.recency_weight),
            ("direction_weight", self.direction_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &weight,
                    &"must be finite and non-negative",
                ));
            }
        }

        for (parameter, value) in [
            ("neighborhood_radius", self.neighborhood_radius),
            ("history_depth", self.history_depth),
            ("density_radius", self.density_radius),
            ("density_low", self.density_low),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        for (parameter, value, limit) in [
            ("neighborhood_radius", self.neighborhood_radius, MAX_RADIUS),
            ("density_radius", self.density_radius, MAX_RADIUS),
            ("history_depth", self.history_depth, MAX_HISTORY_DEPTH),
        ] {
            if value > limit {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {limit}"),
                ));
            }
        }

        if self.density_high < self.density_low {
            return Err(invalid_parameter(
                "density_high",
                &self.density_high,
                &format!("must be at least density_low ({})", self.density_low),
            ));
        }

        Ok(())
    }

    /// Edge policy implied by `wrap_edges`
    pub const fn edge_policy(&self) -> EdgePolicy {
        EdgePolicy::from_wrap(self.wrap_edges)
    }
}

/// Read-only state consulted while scoring
///
/// Borrowed immutably by every evaluator worker; nothing in it changes while
/// an evaluation round is running.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Canvas as of the last completed placement
    pub canvas: &'a Canvas,
    /// Recent placements, most recent last
    pub history: &'a PlacementHistory,
}

/// Scoring function ranking a candidate for an incoming colour
///
/// Lower is better. Implementations are shared across evaluator workers and
/// must not rely on interior mutability for correctness.
pub trait Scorer: Sync {
    /// Cost of placing `color` at `candidate`
    fn score(&self, candidate: Point, color: &HslColor, context: &ScoringContext<'_>) -> f64;
}

/// Raw value of each cost term before weighting
///
/// Disabled terms are reported as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostBreakdown {
    /// Neighbourhood density term
    pub density: f64,
    /// Colour continuity term
    pub color: f64,
    /// Recency term
    pub recency: f64,
    /// Directional continuity term
    pub direction: f64,
}

/// Weighted sum of the density, colour, recency and direction terms
#[derive(Debug, Clone)]
pub struct CostModel {
    config: CostConfig,
}

impl CostModel {
    /// Create a cost model from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: CostConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub const fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Evaluate each enabled term for a candidate
    pub fn breakdown(
        &self,
        candidate: Point,
        color: &HslColor,
        context: &ScoringContext<'_>,
    ) -> CostBreakdown {
        let config = &self.config;
        let canvas = context.canvas;
        let grid = canvas.grid();
        let mut terms = CostBreakdown::default();

        if config.neighborhood_weight > 0.0 {
            let occupied = grid.count_neighbours(candidate, config.density_radius, |n| {
                canvas.is_occupied(n)
            });
            terms.density = density_cost(occupied, config.density_low, config.density_high);
        }
        if config.color_weight > 0.0 {
            terms.color = color_cost(candidate, color, canvas, config.neighborhood_radius);
        }
        if config.recency_weight > 0.0 {
            terms.recency =
                recency_cost(candidate, context.history, grid, config.distance_metric);
        }
        if config.direction_weight > 0.0 {
            terms.direction = direction_cost(candidate, context.history, grid);
        }

        terms
    }

    /// Weighted sum of a breakdown over the enabled terms
    ///
    /// NaN is mapped to `+inf` so a broken term can never win.
    pub fn combine(&self, terms: &CostBreakdown) -> f64 {
        let weighted = [
            (self.config.neighborhood_weight, terms.density),
            (self.config.color_weight, terms.color),
            (self.config.recency_weight, terms.recency),
            (self.config.direction_weight, terms.direction),
        ];

        let total: f64 = weighted
            .iter()
            .filter(|(weight, _)| *weight > 0.0)
            .map(|(weight, term)| weight * term)
            .sum();

        if total.is_nan() { f64::INFINITY } else { total }
    }
}

impl Scorer for CostModel {
    fn score(&self, candidate: Point, color: &HslColor, context: &ScoringContext<'_>) -> f64 {
        self.combine(&self.breakdown(candidate, color, context))
    }
}

/// Piecewise density penalty for `occupied` cells in the density window
///
/// - `occupied < low`: `(low - occupied) / low`, rising towards 1 as the
///   candidate becomes isolated
/// - `low <= occupied <= high`: 0
/// - `occupied > high`: `+inf`, disqualifying the candidate
pub fn density_cost(occupied: usize, low: usize, high: usize) -> f64 {
    if occupied > high {
        f64::INFINITY
    } else if occupied >= low {
        0.0
    } else {
        (low - occupied) as f64 / low as f64
    }
}

/// Mean perceptual distance between `color` and the occupied neighbours of
/// `candidate`, or 0 if it has none
pub fn color_cost(candidate: Point, color: &HslColor, canvas: &Canvas, radius: usize) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    canvas
        .grid()
        .for_each_neighbour(candidate, radius, |n| {
            if let Some(neighbour) = canvas.perceptual_at(n) {
                total += color.distance(neighbour);
                count += 1;
            }
        });

    if count == 0 { 0.0 } else { total / count as f64 }
}

/// Mean distance from `candidate` to the remembered placements, or 0 before
/// the first placement
pub fn recency_cost(
    candidate: Point,
    history: &PlacementHistory,
    grid: &Grid,
    metric: DistanceMetric,
) -> f64 {
    if history.is_empty() {
        return 0.0;
    }

    let total: f64 = history
        .iter()
        .map(|recent| metric.length(grid.delta(recent, candidate)))
        .sum();
    total / history.len() as f64
}

/// Turning angle from the last committed step to the step towards
/// `candidate`, scaled to `[0, 1]`
///
/// 0 keeps going straight, 1 reverses. Zero until two placements exist.
pub fn direction_cost(candidate: Point, history: &PlacementHistory, grid: &Grid) -> f64 {
    let Some(step) = history.last_step(grid) else {
        return 0.0;
    };
    let Some(latest) = history.latest() else {
        return 0.0;
    };

    angle_between(step, grid.delta(latest, candidate)).map_or(0.0, |angle| angle / PI)
}
