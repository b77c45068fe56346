//! Colour sources feeding the placers
//!
//! A source is any ordered sequence of colours. The cube enumerates a
//! quantised RGB space; the ordering helpers rearrange it before feeding.

/// Quantised RGB cube enumeration
pub mod cube;
/// HSL sort orders and seeded shuffling
pub mod ordering;

pub use cube::ColorCube;
pub use ordering::{Component, HslOrdering, shuffle_colors};
