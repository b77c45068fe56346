//! Placement strategies and the colour-feeding driver
//!
//! Every strategy maps an incoming colour to a cell. The frontier-growth
//! engine is the only one that looks at the colour; the others are fixed
//! walks over the canvas.

use image::Rgb;
use log::info;

use crate::algorithm::cost::Scorer;
use crate::algorithm::executor::PlacementEngine;
use crate::io::error::Result;
use crate::spatial::grid::Point;

/// Space-filling curve placement
pub mod hilbert;
/// Row-major placement
pub mod raster;
/// Seeded random placement
pub mod shuffled;

pub use hilbert::HilbertPlacer;
pub use raster::RasterPlacer;
pub use shuffled::ShuffledPlacer;

/// Decides where each incoming colour goes
pub trait Placer {
    /// Cell for the next colour
    ///
    /// # Errors
    ///
    /// Returns `CanvasFull` once every cell has been handed out; strategies
    /// may return other errors specific to them
    fn place(&mut self, color: Rgb<u8>) -> Result<Point>;

    /// Number of cells the placer can hand out
    fn capacity(&self) -> usize;
}

impl<S: Scorer> Placer for PlacementEngine<S> {
    fn place(&mut self, color: Rgb<u8>) -> Result<Point> {
        Self::place(self, color)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }
}

/// Feed colours one at a time to a placer
///
/// `on_placed` receives each placed point, its colour and the running
/// count. Stops cleanly when the placer reports a terminal condition
/// (`CanvasFull`, `Cancelled`) and returns the number of placements.
///
/// # Errors
///
/// Propagates any non-terminal placer error and any error from `on_placed`
pub fn run_placements<P, C, F>(colors: C, placer: &mut P, mut on_placed: F) -> Result<usize>
where
    P: Placer + ?Sized,
    C: IntoIterator<Item = Rgb<u8>>,
    F: FnMut(Point, Rgb<u8>, usize) -> Result<()>,
{
    let mut placed = 0;

    for color in colors {
        match placer.place(color) {
            Ok(point) => {
                placed += 1;
                on_placed(point, color, placed)?;
            }
            Err(error) if error.is_terminal() => {
                info!("Stopping colour feed after {placed} placements: {error}");
                break;
            }
            Err(error) => return Err(error),
        }
    }

    Ok(placed)
}
