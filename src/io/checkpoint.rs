//! Periodic PNG frames of a generation in progress

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;

use crate::io::error::Result;
use crate::io::image::save_png;

/// Writes a numbered frame every `interval` placements
///
/// Frames are named `<stem>_<frame:06>.png` inside `directory`. An interval
/// of zero disables checkpoints entirely. The saver keeps no pixels of its
/// own; callers pass the image they are painting.
#[derive(Debug, Clone)]
pub struct FrameSaver {
    directory: PathBuf,
    stem: String,
    interval: usize,
    frames: usize,
    pending: bool,
}

impl FrameSaver {
    /// Create a saver writing every `interval` placements
    pub fn new(directory: impl Into<PathBuf>, stem: impl Into<String>, interval: usize) -> Self {
        Self {
            directory: directory.into(),
            stem: stem.into(),
            interval,
            frames: 0,
            pending: false,
        }
    }

    /// Whether frames are being written
    pub const fn is_enabled(&self) -> bool {
        self.interval > 0
    }

    /// Number of frames written so far
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Directory receiving the frames
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of frame number `frame`
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.directory
            .join(format!("{}_{frame:06}.png", self.stem))
    }

    /// Record a placement already painted into `image`, writing a frame
    /// when `placed` hits the interval
    ///
    /// # Errors
    ///
    /// Returns an error if a due frame cannot be written
    pub fn record(&mut self, image: &RgbaImage, placed: usize) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        self.pending = true;

        if placed.is_multiple_of(self.interval) {
            self.write_frame(image)?;
        }
        Ok(())
    }

    /// Write the last frame if placements happened since the previous one
    ///
    /// Returns the path written, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written
    pub fn finish(&mut self, image: &RgbaImage) -> Result<Option<PathBuf>> {
        if !self.is_enabled() || !self.pending {
            return Ok(None);
        }
        self.write_frame(image).map(Some)
    }

    fn write_frame(&mut self, image: &RgbaImage) -> Result<PathBuf> {
        let path = self.frame_path(self.frames);
        save_png(image, &path)?;
        debug!("Wrote frame {} to {}", self.frames, path.display());

        self.frames += 1;
        self.pending = false;
        Ok(path)
    }
}
