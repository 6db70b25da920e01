//! Error types and path context for entropy estimation runs

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all estimation operations
#[derive(Debug)]
pub enum EntropyError {
    /// Input path does not name an existing file
    InputNotFound {
        /// Path given on the command line
        path: PathBuf,
    },

    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Configuration value validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Traversal delivered a coordinate outside the rectangle
    TraversalOutOfBounds {
        /// Delivered coordinate (x, y)
        coordinate: (usize, usize),
        /// Declared rectangle (width, height)
        dimensions: (usize, usize),
    },

    /// Traversal delivered the same coordinate twice
    TraversalDuplicate {
        /// Coordinate delivered again (x, y)
        coordinate: (usize, usize),
    },

    /// Traversal returned before covering the rectangle
    TraversalIncomplete {
        /// Distinct coordinates accepted
        visited: usize,
        /// Coordinates the rectangle contains
        expected: usize,
    },

    /// Entropy sink used outside of its lifecycle
    SinkState {
        /// Operation that was attempted
        operation: &'static str,
        /// Lifecycle state that rejected it
        state: &'static str,
    },

    /// Entropy requested before any symbol was processed
    EmptyStream,

    /// Sink cannot report an entropy figure
    EntropyUnsupported {
        /// Name of the sink implementation
        sink: &'static str,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl EntropyError {
    /// Whether the error was raised by traversal validation
    pub const fn is_traversal_error(&self) -> bool {
        matches!(
            self,
            Self::TraversalOutOfBounds { .. }
                | Self::TraversalDuplicate { .. }
                | Self::TraversalIncomplete { .. }
        )
    }
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => {
                write!(f, "Invalid image '{}'", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TraversalOutOfBounds {
                coordinate,
                dimensions,
            } => {
                write!(
                    f,
                    "Invalid image access [{},{}] outside {}x{}",
                    coordinate.0, coordinate.1, dimensions.0, dimensions.1
                )
            }
            Self::TraversalDuplicate { coordinate } => {
                write!(
                    f,
                    "Pixel [{},{}] visited more than once",
                    coordinate.0, coordinate.1
                )
            }
            Self::TraversalIncomplete { visited, expected } => {
                write!(f, "Traversal visited {visited} of {expected} pixels")
            }
            Self::SinkState { operation, state } => {
                write!(f, "Entropy sink cannot {operation} while {state}")
            }
            Self::EmptyStream => {
                write!(f, "Entropy requested before any symbol was processed")
            }
            Self::EntropyUnsupported { sink } => {
                write!(f, "Entropy sink '{sink}' does not report entropy")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for EntropyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for estimation results
pub type Result<T> = std::result::Result<T, EntropyError>;

/// Attaches the path being decoded to image errors
pub trait WithPath<T> {
    /// Replace the placeholder path of a converted error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<EntropyError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let EntropyError::ImageLoad { path: slot, .. } = &mut error {
                *slot = path.to_path_buf();
            }
            error
        })
    }
}

impl From<image::ImageError> for EntropyError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EntropyError {
    EntropyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> EntropyError {
    EntropyError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
