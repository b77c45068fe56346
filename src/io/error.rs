//! Error types for placement, configuration and image output

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::Point;

/// Main error type for all placement operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Commit attempted on a cell that already holds a colour
    ///
    /// The placement loop serialises every mutation, so this indicates a
    /// broken invariant. The engine refuses further placements once it occurs.
    AlreadyOccupied {
        /// Cell that was already occupied
        point: Point,
    },

    /// Frontier snapshot was empty when an evaluation was requested
    FrontierExhausted {
        /// Number of cells occupied when the frontier ran dry
        placed: usize,
    },

    /// Every cell of the canvas is occupied
    CanvasFull {
        /// Total number of cells on the canvas
        capacity: usize,
    },

    /// The engine was abandoned before this request could be serviced
    Cancelled,

    /// The placement loop has stopped accepting requests
    ServiceClosed,

    /// Construction parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Worker pool or placement thread failure
    WorkerPool {
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl AlgorithmError {
    /// Whether the error is an ordinary end-of-generation signal
    ///
    /// Callers stop feeding colours on terminal errors; anything else is a
    /// genuine failure.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::CanvasFull { .. } | Self::Cancelled)
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOccupied { point } => {
                write!(
                    f,
                    "Cell ({}, {}) is already occupied; placement invariant violated",
                    point.x, point.y
                )
            }
            Self::FrontierExhausted { placed } => {
                write!(f, "Frontier exhausted after {placed} placements")
            }
            Self::CanvasFull { capacity } => {
                write!(f, "Canvas is full ({capacity} cells occupied)")
            }
            Self::Cancelled => write!(f, "Placement cancelled"),
            Self::ServiceClosed => write!(f, "Placement service is no longer running"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WorkerPool { reason } => write!(f, "Worker pool failure: {reason}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for placement results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for AlgorithmError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
