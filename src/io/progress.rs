//! Terminal progress bar for a generation run

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}} (eta {{eta}})"
        ))
        .unwrap_or_else(|_invalid| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Placed/total bar with elapsed time and ETA
///
/// In quiet mode no bar is created and every call is a no-op.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for `total` placements
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(PLACEMENT_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Report the number of placements so far
    pub fn update(&self, placed: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(placed as u64);
        }
    }

    /// Placements reported so far
    pub fn position(&self) -> usize {
        self.bar.as_ref().map_or(0, |bar| bar.position() as usize)
    }

    /// Close the bar with a final message
    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }
}
