//! Placement constants and runtime configuration defaults

// Canvas defaults: 256 x 128 holds exactly the 32-level colour cube
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 256;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 128;
/// Default quantisation levels per RGB channel
pub const DEFAULT_LEVELS: usize = 32;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 16_384;
/// Maximum neighbourhood or density radius; larger windows cover any canvas
pub const MAX_RADIUS: usize = MAX_CANVAS_DIMENSION;
/// Maximum history depth, one entry per cell of the largest canvas
pub const MAX_HISTORY_DEPTH: usize = MAX_CANVAS_DIMENSION * MAX_CANVAS_DIMENSION;

/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

// Cost model defaults
/// Weight of the neighbourhood density term
pub const DEFAULT_NEIGHBORHOOD_WEIGHT: f64 = 1.0;
/// Weight of the colour continuity term
pub const DEFAULT_COLOR_WEIGHT: f64 = 4.0;
/// Weight of the recency term
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.05;
/// Weight of the directional continuity term
pub const DEFAULT_DIRECTION_WEIGHT: f64 = 0.25;

/// Chebyshev radius of the frontier adjacency and colour neighbourhood
pub const DEFAULT_NEIGHBORHOOD_RADIUS: usize = 1;
/// Number of recent placements remembered
pub const DEFAULT_HISTORY_DEPTH: usize = 8;

/// Chebyshev radius of the density window
pub const DENSITY_RADIUS: usize = 2;
/// Occupied count below which a candidate is considered isolated
pub const DENSITY_LOW_THRESHOLD: usize = 10;
/// Occupied count above which a candidate is considered overcrowded
pub const DENSITY_HIGH_THRESHOLD: usize = 20;

// Output settings
/// Default output file
pub const DEFAULT_OUTPUT: &str = "allrgb.png";
/// Default number of placements between checkpoint frames (0 disables)
pub const DEFAULT_FRAME_INTERVAL: usize = 0;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Name prefix for placement threads
pub const THREAD_NAME: &str = "allrgb-placement";
