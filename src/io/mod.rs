//! Input/output: errors, configuration, rendering and the command line

/// Periodic frame checkpoints
pub mod checkpoint;
/// Command-line arguments and the generation driver
pub mod cli;
/// Placement constants and defaults
pub mod configuration;
/// Error types for every fallible operation
pub mod error;
/// Canvas rendering and PNG output
pub mod image;
/// Terminal progress reporting
pub mod progress;
