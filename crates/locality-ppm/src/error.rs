//! Error types for the PPM codec.

use std::fmt;
use std::io;

use locality_core::GridError;

/// Errors that can occur while reading or writing a PPM image.
#[derive(Debug)]
pub enum PpmError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream does not start with `P3` or `P6`.
    BadMagic {
        /// The first token found, lossily decoded.
        found: String,
    },
    /// A header field is missing or not a positive integer.
    BadHeader {
        /// Which field and what went wrong.
        detail: String,
    },
    /// `maxval` is outside `[1, 65535]`.
    UnsupportedMaxval {
        /// The maxval found in the header.
        found: u64,
    },
    /// The raster ended before every pixel was read.
    Truncated {
        /// Row being read when the data ran out.
        row: u32,
    },
    /// A sample exceeds the header's maxval.
    SampleOutOfRange {
        /// The offending sample.
        value: u32,
        /// The header's maxval.
        maxval: u16,
    },
    /// The pixel grid rejected an operation.
    Grid(GridError),
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::BadMagic { found } => {
                write!(f, "not a PPM image: expected P3 or P6, found {found:?}")
            }
            Self::BadHeader { detail } => write!(f, "malformed PPM header: {detail}"),
            Self::UnsupportedMaxval { found } => {
                write!(f, "unsupported maxval {found} (expected 1..=65535)")
            }
            Self::Truncated { row } => write!(f, "PPM raster truncated at row {row}"),
            Self::SampleOutOfRange { value, maxval } => {
                write!(f, "sample {value} exceeds maxval {maxval}")
            }
            Self::Grid(e) => write!(f, "pixel grid: {e}"),
        }
    }
}

impl std::error::Error for PpmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PpmError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for PpmError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
