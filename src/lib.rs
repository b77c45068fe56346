//! Paint every colour of a quantised RGB cube exactly once on a canvas
//!
//! The frontier-growth engine places each incoming colour on the empty cell
//! adjacent to the painted region where a composite cost (neighbourhood
//! density, colour continuity, recency, direction) is lowest. Candidates are
//! scored in parallel and committed by a single writer, so the result is
//! deterministic for a given colour sequence and configuration.

#![forbid(unsafe_code)]

/// Cost model, parallel evaluation, placement engine and service
pub mod algorithm;
/// Colour cube enumeration and feed orders
pub mod colors;
/// Errors, configuration, rendering, progress and the command line
pub mod io;
/// Perceptual colour and planar geometry helpers
pub mod math;
/// Placement strategies and the colour-feeding driver
pub mod placement;
/// Grid geometry, canvas state and frontier
pub mod spatial;

pub use algorithm::cost::{CostConfig, CostModel, Scorer};
pub use algorithm::executor::PlacementEngine;
pub use algorithm::service::{PlacementHandle, PlacementService};
pub use io::error::{AlgorithmError, Result};
pub use spatial::{Canvas, EdgePolicy, FrontierSet, Grid, Point};
