//! Command-line interface for generating all-colour images

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use image::Rgb;
use log::{info, warn};

use crate::algorithm::cost::CostConfig;
use crate::algorithm::executor::PlacementEngine;
use crate::colors::{ColorCube, HslOrdering, shuffle_colors};
use crate::io::checkpoint::FrameSaver;
use crate::io::configuration::{
    DEFAULT_COLOR_WEIGHT, DEFAULT_DIRECTION_WEIGHT, DEFAULT_FRAME_INTERVAL, DEFAULT_HEIGHT,
    DEFAULT_HISTORY_DEPTH, DEFAULT_LEVELS, DEFAULT_NEIGHBORHOOD_RADIUS,
    DEFAULT_NEIGHBORHOOD_WEIGHT, DEFAULT_OUTPUT, DEFAULT_RECENCY_WEIGHT, DEFAULT_SEED,
    DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{ImageRenderer, save_png};
use crate::io::progress::ProgressReporter;
use crate::math::geometry::DistanceMetric;
use crate::placement::{HilbertPlacer, Placer, RasterPlacer, ShuffledPlacer, run_placements};
use crate::spatial::grid::{EdgePolicy, Grid, Point};

/// Where each colour goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Grow a connected region, placing each colour where it fits best
    Frontier,
    /// Row by row
    Raster,
    /// Along a Hilbert curve
    Hilbert,
    /// Seeded random cell order
    Shuffled,
}

/// Order in which colours are fed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorOrder {
    /// Red-major cube order
    Rgb,
    /// Hue, then saturation and lightness descending
    Hsl,
    /// Seeded random order
    Shuffled,
}

/// Distance measure of the recency term
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Straight-line distance
    Euclidean,
    /// Sum of axis distances
    Manhattan,
}

impl From<MetricArg> for DistanceMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Euclidean => Self::Euclidean,
            MetricArg::Manhattan => Self::Manhattan,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "allrgb")]
#[command(
    author,
    version,
    about = "Paint every colour of a quantised RGB cube exactly once"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Placement strategy
    #[arg(short = 'S', long, value_enum, default_value_t = Strategy::Frontier)]
    pub strategy: Strategy,

    /// Colour feed order
    #[arg(short = 'c', long, value_enum, default_value_t = ColorOrder::Hsl)]
    pub order: ColorOrder,

    /// Values per RGB channel
    #[arg(short, long, default_value_t = DEFAULT_LEVELS)]
    pub levels: usize,

    /// Random seed for shuffled orders
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Growth origin as `X,Y`, repeatable (defaults to the canvas centre)
    #[arg(long = "origin", value_name = "X,Y", value_parser = parse_point)]
    pub origins: Vec<Point>,

    /// Evaluator threads (defaults to the available cores)
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Placements between checkpoint frames (0 disables)
    #[arg(short, long, default_value_t = DEFAULT_FRAME_INTERVAL)]
    pub frames: usize,

    /// Directory receiving checkpoint frames
    #[arg(long, default_value = "frames")]
    pub frames_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Wrap neighbourhoods around the canvas border
    #[arg(long)]
    pub wrap: bool,

    /// Neighbourhood radius for frontier adjacency and colour comparison
    #[arg(short, long, default_value_t = DEFAULT_NEIGHBORHOOD_RADIUS)]
    pub radius: usize,

    /// Number of recent placements remembered
    #[arg(long, default_value_t = DEFAULT_HISTORY_DEPTH)]
    pub history: usize,

    /// Weight of the neighbourhood density term
    #[arg(long, default_value_t = DEFAULT_NEIGHBORHOOD_WEIGHT)]
    pub neighborhood_weight: f64,

    /// Weight of the colour continuity term
    #[arg(long, default_value_t = DEFAULT_COLOR_WEIGHT)]
    pub color_weight: f64,

    /// Weight of the recency term
    #[arg(long, default_value_t = DEFAULT_RECENCY_WEIGHT)]
    pub recency_weight: f64,

    /// Weight of the directional continuity term
    #[arg(long, default_value_t = DEFAULT_DIRECTION_WEIGHT)]
    pub direction_weight: f64,

    /// Distance measure of the recency term
    #[arg(long, value_enum, default_value_t = MetricArg::Euclidean)]
    pub metric: MetricArg,
}

impl Cli {
    /// Cost configuration assembled from the flags
    pub fn cost_config(&self) -> CostConfig {
        CostConfig {
            neighborhood_weight: self.neighborhood_weight,
            color_weight: self.color_weight,
            recency_weight: self.recency_weight,
            direction_weight: self.direction_weight,
            neighborhood_radius: self.radius,
            history_depth: self.history,
            wrap_edges: self.wrap,
            distance_metric: self.metric.into(),
            ..CostConfig::default()
        }
    }

    /// Growth origins, defaulting to the canvas centre
    pub fn seed_points(&self) -> Vec<Point> {
        if self.origins.is_empty() {
            vec![Point::new(self.width / 2, self.height / 2)]
        } else {
            self.origins.clone()
        }
    }
}

/// Parse an `X,Y` pair
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated integers
pub fn parse_point(value: &str) -> std::result::Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|error| format!("invalid x coordinate '{x}': {error}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|error| format!("invalid y coordinate '{y}': {error}"))?;
    Ok(Point::new(x, y))
}

/// Runs one generation from parsed arguments
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments in use
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Colours in feed order
    ///
    /// # Errors
    ///
    /// Returns an error if the level count is invalid
    pub fn colors(&self) -> Result<Vec<Rgb<u8>>> {
        let mut colors = ColorCube::new(self.cli.levels)?.colors();
        match self.cli.order {
            ColorOrder::Rgb => {}
            ColorOrder::Hsl => HslOrdering::default().sort(&mut colors),
            ColorOrder::Shuffled => shuffle_colors(&mut colors, self.cli.seed),
        }
        Ok(colors)
    }

    /// Placer for the selected strategy
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas, seeds, weights or worker count are
    /// invalid
    pub fn placer(&self) -> Result<Box<dyn Placer>> {
        let cli = &self.cli;
        let edges = EdgePolicy::from_wrap(cli.wrap);

        Ok(match cli.strategy {
            Strategy::Frontier => {
                let seeds = cli.seed_points();
                let config = cli.cost_config();
                let engine = match cli.workers {
                    Some(workers) => {
                        PlacementEngine::with_workers(cli.width, cli.height, &seeds, config, workers)?
                    }
                    None => PlacementEngine::new(cli.width, cli.height, &seeds, config)?,
                };
                Box::new(engine)
            }
            Strategy::Raster => Box::new(RasterPlacer::new(Grid::new(cli.width, cli.height, edges)?)),
            Strategy::Hilbert => {
                Box::new(HilbertPlacer::new(Grid::new(cli.width, cli.height, edges)?))
            }
            Strategy::Shuffled => Box::new(ShuffledPlacer::new(
                Grid::new(cli.width, cli.height, edges)?,
                cli.seed,
            )),
        })
    }

    /// Generate the image, write checkpoints and the final PNG
    ///
    /// Returns the number of placed colours.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, placement fails or an
    /// image cannot be written
    pub fn run(&self) -> Result<usize> {
        let cli = &self.cli;
        let start_time = Instant::now();

        let colors = self.colors()?;
        let mut placer = self.placer()?;
        let capacity = placer.capacity();
        if colors.len() != capacity {
            warn!(
                "{} colours for {} cells ({}x{}); {}",
                colors.len(),
                capacity,
                cli.width,
                cli.height,
                if colors.len() > capacity {
                    "surplus colours will be dropped"
                } else {
                    "part of the canvas stays transparent"
                }
            );
        }

        let progress = ProgressReporter::new(colors.len().min(capacity), cli.quiet);
        let mut renderer = ImageRenderer::new(cli.width, cli.height);
        let mut frames = FrameSaver::new(&cli.frames_dir, "frame", cli.frames);

        info!(
            "Placing {} colours with {:?} strategy in {:?} order",
            colors.len(),
            cli.strategy,
            cli.order
        );

        let placed = run_placements(colors, placer.as_mut(), |point, color, placed| {
            renderer.paint(point, color);
            frames.record(renderer.image(), placed)?;
            progress.update(placed);
            Ok(())
        })?;

        frames.finish(renderer.image())?;
        save_png(renderer.image(), &cli.output)?;
        progress.finish("done");

        info!(
            "Wrote {} ({placed} placements, {} frame(s)) in {:.2?}",
            cli.output.display(),
            frames.frames(),
            start_time.elapsed()
        );

        Ok(placed)
    }
}
