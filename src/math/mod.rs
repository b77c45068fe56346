//! Mathematical utilities for the cost model

/// Perceptual (HSL) colour representation and distance
pub mod color;
/// Distance metrics and step angles
pub mod geometry;
