//! Errors raised while transforming an image.

use std::error::Error;
use std::fmt;
use std::io;

use locality_core::GridError;
use locality_ppm::PpmError;

/// Failure of a rotation or of the read/rotate/write pipeline.
#[derive(Debug)]
pub enum TransformError {
    /// A grid operation failed.
    Grid(GridError),
    /// The image could not be decoded or encoded.
    Ppm(PpmError),
    /// Writing the output failed.
    Io(io::Error),
    /// The angle is not one of 0, 90, 180 or 270.
    InvalidAngle {
        /// The rejected angle in degrees.
        degrees: i64,
    },
    /// The destination grid has the wrong dimensions for the rotation.
    TargetShape {
        /// Dimensions the rotation produces.
        expected: (u32, u32),
        /// Dimensions of the grid that was supplied.
        found: (u32, u32),
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Ppm(e) => write!(f, "ppm: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidAngle { degrees } => {
                write!(f, "rotation must be 0, 90, 180 or 270, got {degrees}")
            }
            Self::TargetShape { expected, found } => write!(
                f,
                "rotation needs a {}x{} destination, got {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Ppm(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for TransformError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PpmError> for TransformError {
    fn from(e: PpmError) -> Self {
        Self::Ppm(e)
    }
}

impl From<io::Error> for TransformError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
