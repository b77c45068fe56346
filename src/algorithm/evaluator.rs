//! Parallel best-candidate search over a frontier snapshot
//!
//! The snapshot is split into one contiguous partition per worker. Each
//! worker folds its partition to a partial minimum while reading only the
//! immutable scoring context, and a single reduction folds the partial
//! minima into the winner. Candidates compare by cost, then by `(y, x)`, so
//! the winner does not depend on partitioning or scheduling.

use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::algorithm::cost::{Scorer, ScoringContext};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::math::color::HslColor;
use crate::spatial::grid::Point;

/// Shared abandon signal observed by evaluator workers and the placement loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation to every holder of the token
    pub fn cancel(&self) {
        self.cancelled.store(true, AtomicOrdering::Release);
    }

    /// Whether cancellation has been signalled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(AtomicOrdering::Acquire)
    }
}

/// Scored frontier point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Frontier point
    pub point: Point,
    /// Composite cost, lower is better
    pub cost: f64,
}

impl Candidate {
    /// Total order used by the reduction: cost, then row-major position
    pub fn rank(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.point.cmp(&other.point))
    }

    /// Keep the better of two optional candidates
    pub fn better(left: Option<Self>, right: Option<Self>) -> Option<Self> {
        match (left, right) {
            (Some(a), Some(b)) => Some(if b.rank(&a) == Ordering::Less { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Fixed-size worker pool scoring frontier snapshots
pub struct CandidateEvaluator {
    pool: ThreadPool,
    workers: usize,
}

impl CandidateEvaluator {
    /// Create an evaluator with `workers` threads
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero or the thread pool cannot be built
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(invalid_parameter(
                "workers",
                &workers,
                &"at least one worker is required",
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("allrgb-evaluator-{index}"))
            .build()?;

        Ok(Self { pool, workers })
    }

    /// Create an evaluator sized to the available parallelism
    ///
    /// # Errors
    ///
    /// Returns an error if the thread pool cannot be built
    pub fn with_default_workers() -> Result<Self> {
        let workers = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        Self::new(workers)
    }

    /// Number of worker threads
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Find the minimum-cost point of a snapshot
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `FrontierExhausted` if the snapshot is empty
    /// - `Cancelled` if `cancel` is signalled before the round completes
    pub fn best_candidate<S: Scorer>(
        &self,
        snapshot: &[Point],
        color: &HslColor,
        scorer: &S,
        context: &ScoringContext<'_>,
        cancel: &CancelToken,
    ) -> Result<Candidate> {
        if snapshot.is_empty() {
            return Err(AlgorithmError::FrontierExhausted {
                placed: context.canvas.occupied_count(),
            });
        }

        let partition_len = snapshot.len().div_ceil(self.workers);

        let winner = self.pool.install(|| {
            snapshot
                .par_chunks(partition_len)
                .map(|partition| score_partition(partition, color, scorer, context, cancel))
                .try_reduce(|| None, |left, right| Ok(Candidate::better(left, right)))
        })?;

        winner.ok_or(AlgorithmError::FrontierExhausted {
            placed: context.canvas.occupied_count(),
        })
    }
}

// Sequential fold of one worker's partition
fn score_partition<S: Scorer>(
    partition: &[Point],
    color: &HslColor,
    scorer: &S,
    context: &ScoringContext<'_>,
    cancel: &CancelToken,
) -> Result<Option<Candidate>> {
    let mut best = None;
    for &point in partition {
        if cancel.is_cancelled() {
            return Err(AlgorithmError::Cancelled);
        }
        let cost = scorer.score(point, color, context);
        let cost = if cost.is_nan() { f64::INFINITY } else { cost };
        best = Candidate::better(best, Some(Candidate { point, cost }));
    }
    Ok(best)
}
