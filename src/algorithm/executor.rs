use image::Rgb;
use log::{debug, info, warn};

use crate::algorithm::cost::{CostConfig, CostModel, Scorer, ScoringContext};
use crate::algorithm::evaluator::{CancelToken, CandidateEvaluator};
use crate::algorithm::history::PlacementHistory;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::math::color::HslColor;
use crate::spatial::canvas::Canvas;
use crate::spatial::frontier::FrontierSet;
use crate::spatial::grid::{Grid, Point};

/// Frontier-growth placement engine
///
/// Grows a connected painted region one cell per colour. Each placement
/// scores a snapshot of the frontier in parallel, commits the cheapest
/// candidate and updates the frontier and history. `place` takes `&mut self`,
/// so evaluation and commit of one placement always finish before the next
/// begins; multiple callers go through `PlacementService`.
pub struct PlacementEngine<S = CostModel> {
    /// Occupancy and colours, the source of truth for placement
    canvas: Canvas,
    /// Empty cells eligible for the next placement
    frontier: FrontierSet,
    /// Recent placements consumed by the scorer
    history: PlacementHistory,
    /// Ranking of frontier candidates
    scorer: S,
    /// Parallel candidate search
    evaluator: CandidateEvaluator,
    /// Radius within which occupation makes a cell eligible
    neighborhood_radius: usize,
    /// Growth origins, eligible before any neighbour is occupied
    seeds: Vec<Point>,
    /// Abandon signal shared with the evaluator workers
    cancel: CancelToken,
    /// Set once an invariant failure has been observed
    halted: Option<Point>,
}

impl PlacementEngine<CostModel> {
    /// Create an engine scoring with the composite cost model
    ///
    /// Uses one evaluator worker per available core.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the dimensions, seeds or configuration
    /// are invalid, and `WorkerPool` if the evaluator cannot be started
    pub fn new(width: usize, height: usize, seeds: &[Point], config: CostConfig) -> Result<Self> {
        let scorer = CostModel::new(config)?;
        Self::with_scorer(
            width,
            height,
            seeds,
            &config,
            scorer,
            CandidateEvaluator::with_default_workers()?,
        )
    }

    /// Create an engine with a fixed number of evaluator workers
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the dimensions, seeds, configuration or
    /// worker count are invalid, and `WorkerPool` if the evaluator cannot be
    /// started
    pub fn with_workers(
        width: usize,
        height: usize,
        seeds: &[Point],
        config: CostConfig,
        workers: usize,
    ) -> Result<Self> {
        let scorer = CostModel::new(config)?;
        Self::with_scorer(
            width,
            height,
            seeds,
            &config,
            scorer,
            CandidateEvaluator::new(workers)?,
        )
    }
}

impl<S: Scorer> PlacementEngine<S> {
    /// Create an engine with a custom scorer
    ///
    /// `config` still governs geometry: frontier radius, history depth and
    /// edge wrapping.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - Either dimension is zero or too large
    /// - No seed is given or a seed lies outside the canvas
    /// - The configuration fails validation
    pub fn with_scorer(
        width: usize,
        height: usize,
        seeds: &[Point],
        config: &CostConfig,
        scorer: S,
        evaluator: CandidateEvaluator,
    ) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(width, height, config.edge_policy())?;

        if seeds.is_empty() {
            return Err(invalid_parameter(
                "seeds",
                &"[]",
                &"at least one seed point is required",
            ));
        }
        if let Some(outside) = seeds.iter().find(|&&seed| !grid.contains(seed)) {
            return Err(invalid_parameter(
                "seeds",
                &format!("({}, {})", outside.x, outside.y),
                &format!("seed lies outside the {width}x{height} canvas"),
            ));
        }

        let canvas = Canvas::new(grid);
        let mut frontier = FrontierSet::new();
        frontier.extend(&canvas, seeds.iter().copied());

        let mut seeds = seeds.to_vec();
        seeds.sort_unstable();
        seeds.dedup();

        info!(
            "Placement engine ready: {width}x{height} canvas, {} seed(s), {} worker(s)",
            seeds.len(),
            evaluator.workers()
        );

        Ok(Self {
            canvas,
            frontier,
            history: PlacementHistory::new(config.history_depth),
            scorer,
            evaluator,
            neighborhood_radius: config.neighborhood_radius,
            seeds,
            cancel: CancelToken::new(),
            halted: None,
        })
    }

    /// Place one colour and return the cell it was committed to
    ///
    /// Snapshots the frontier, finds the cheapest candidate in parallel, then
    /// commits it, extends the frontier with its empty neighbours, removes it
    /// from the frontier and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `CanvasFull` once every cell is occupied
    /// - `Cancelled` after `cancel_token().cancel()`; nothing is committed
    /// - `FrontierExhausted` if no candidate remains on a non-full canvas
    /// - `AlreadyOccupied` if the winner was already committed; the engine
    ///   refuses every later placement with the same error
    pub fn place(&mut self, color: Rgb<u8>) -> Result<Point> {
        if let Some(point) = self.halted {
            return Err(AlgorithmError::AlreadyOccupied { point });
        }
        if self.canvas.is_full() {
            return Err(AlgorithmError::CanvasFull {
                capacity: self.canvas.grid().cell_count(),
            });
        }
        if self.cancel.is_cancelled() {
            return Err(AlgorithmError::Cancelled);
        }

        let snapshot = self.frontier.snapshot();
        let perceptual = HslColor::from_rgb(color);
        let context = ScoringContext {
            canvas: &self.canvas,
            history: &self.history,
        };
        let winner = self.evaluator.best_candidate(
            &snapshot,
            &perceptual,
            &self.scorer,
            &context,
            &self.cancel,
        )?;

        self.commit(winner.point, color)?;

        debug!(
            "Placed {:?} at ({}, {}) cost {:.4}, frontier {}",
            color.0,
            winner.point.x,
            winner.point.y,
            winner.cost,
            self.frontier.len()
        );
        if self.canvas.is_full() {
            info!("Canvas full after {} placements", self.placed());
        }

        Ok(winner.point)
    }

    // The only mutation window of a placement
    fn commit(&mut self, point: Point, color: Rgb<u8>) -> Result<()> {
        if let Err(error) = self.canvas.take(point, color) {
            if let AlgorithmError::AlreadyOccupied { point: occupied } = error {
                warn!(
                    "Invariant violated: ({}, {}) already occupied; halting engine",
                    occupied.x, occupied.y
                );
                self.halted = Some(occupied);
            }
            return Err(error);
        }

        let grid = *self.canvas.grid();
        let eligible = grid.neighbours(point, self.neighborhood_radius);
        self.frontier.extend(&self.canvas, eligible);
        self.frontier.take(point);
        self.history.record(point);

        Ok(())
    }

    /// Canvas as of the last completed placement
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Current frontier
    pub const fn frontier(&self) -> &FrontierSet {
        &self.frontier
    }

    /// Recent placements
    pub const fn history(&self) -> &PlacementHistory {
        &self.history
    }

    /// Scorer in use
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Seed points, sorted and deduplicated
    pub fn seeds(&self) -> &[Point] {
        &self.seeds
    }

    /// Radius within which occupation makes a cell eligible
    pub const fn neighborhood_radius(&self) -> usize {
        self.neighborhood_radius
    }

    /// Number of successful placements
    pub const fn placed(&self) -> usize {
        self.canvas.occupied_count()
    }

    /// Total number of cells
    pub const fn capacity(&self) -> usize {
        self.canvas.grid().cell_count()
    }

    /// Token abandoning in-flight and future placements when cancelled
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Abandon in-flight and future placements
    pub fn cancel(&self) {
        if !self.cancel.is_cancelled() {
            warn!("Placement cancelled after {} placements", self.placed());
        }
        self.cancel.cancel();
    }
}
