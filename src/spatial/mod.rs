//! Spatial data structures for the output canvas
//!
//! This module contains:
//! - Grid geometry and neighbourhood enumeration
//! - Canvas occupancy and colour storage
//! - The frontier of cells eligible for placement

/// Occupancy and colour storage
pub mod canvas;
/// Frontier of empty cells adjacent to the painted region
pub mod frontier;
/// Points, edge policies and neighbourhoods
pub mod grid;

pub use canvas::Canvas;
pub use frontier::FrontierSet;
pub use grid::{EdgePolicy, Grid, Point};
