//! Transformation configuration and command-line parsing.
//!
//! [`TransformConfig`] is the input for one run of the pipeline.
//! [`from_args`](TransformConfig::from_args) builds it from single-dash
//! flags and [`validate`](TransformConfig::validate) checks the chosen
//! traversal order against the representation's map table, so an
//! unsupported combination is rejected before any image is read.

use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use locality_core::{GridError, Layout, MapOrder, MapTable};

use crate::rotate::Rotation;

/// One-line synopsis printed after every usage error.
pub const USAGE: &str = "[-rotate <angle>] [-{row,col,block}-major] [-time <file>] [filename]";

// ── UsageError ─────────────────────────────────────────────────────

/// Errors detected while parsing or validating the command line.
#[derive(Debug, PartialEq)]
pub enum UsageError {
    /// A flag that takes a value was last on the line.
    MissingValue {
        /// The flag missing its value.
        flag: &'static str,
    },
    /// `-rotate` was given something other than 0, 90, 180 or 270.
    InvalidRotation {
        /// The rejected argument.
        value: String,
    },
    /// An argument started with `-` but is not a known flag.
    UnknownOption {
        /// The unrecognised argument.
        option: String,
    },
    /// More than one input file was named.
    TooManyArguments,
    /// The representation does not implement the requested order.
    UnsupportedOrder(GridError),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { flag } => write!(f, "{flag} requires a value"),
            Self::InvalidRotation { value } => {
                write!(f, "rotation must be 0, 90, 180 or 270, got {value:?}")
            }
            Self::UnknownOption { option } => write!(f, "unknown option '{option}'"),
            Self::TooManyArguments => write!(f, "too many arguments"),
            Self::UnsupportedOrder(e) => write!(f, "{e}"),
        }
    }
}

impl Error for UsageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedOrder(e) => Some(e),
            _ => None,
        }
    }
}

// ── TransformConfig ────────────────────────────────────────────────

/// Everything one `ppmtrans` run needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformConfig {
    /// Grid representation to read the image into. Default: plain.
    pub layout: Layout,
    /// Traversal order for the rotation. Default: the layout's default.
    pub order: MapOrder,
    /// Rotation to apply. Default: 0.
    pub rotation: Rotation,
    /// Input file; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// File the timing report is appended to, if any.
    pub timing_path: Option<PathBuf>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Plain,
            order: MapTable::PLAIN.default_order(),
            rotation: Rotation::Zero,
            input: None,
            timing_path: None,
        }
    }
}

impl TransformConfig {
    /// Map table of the configured representation.
    pub fn map_table(&self) -> MapTable {
        match self.layout {
            Layout::Plain => MapTable::PLAIN,
            Layout::Blocked => MapTable::BLOCKED,
        }
    }

    /// Check that the configured order is implemented by the layout.
    pub fn validate(&self) -> Result<(), UsageError> {
        self.map_table()
            .check(self.order)
            .map(|_| ())
            .map_err(UsageError::UnsupportedOrder)
    }

    /// Parse arguments, not including the program name.
    ///
    /// Arguments are taken as `OsString` so file names need not be
    /// Unicode. Later layout flags override earlier ones. The result is
    /// validated before it is returned.
    pub fn from_args<I, S>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::<OsString>::into).peekable();
        while let Some(arg) = args.next() {
            match arg.to_str() {
                Some("-row-major") => config.select(Layout::Plain, MapOrder::RowMajor),
                Some("-col-major") => config.select(Layout::Plain, MapOrder::ColumnMajor),
                Some("-block-major") => config.select(Layout::Blocked, MapOrder::BlockMajor),
                Some("-rotate") => {
                    let value = args.next().ok_or(UsageError::MissingValue { flag: "-rotate" })?;
                    config.rotation = parse_rotation(&value)?;
                }
                Some("-time") => {
                    let value = args.next().ok_or(UsageError::MissingValue { flag: "-time" })?;
                    config.timing_path = Some(PathBuf::from(value));
                }
                _ if is_option(&arg) => {
                    return Err(UsageError::UnknownOption {
                        option: arg.to_string_lossy().into_owned(),
                    });
                }
                _ => {
                    if args.peek().is_some() || config.input.is_some() {
                        return Err(UsageError::TooManyArguments);
                    }
                    config.input = Some(PathBuf::from(arg));
                }
            }
        }
        config.validate()?;
        Ok(config)
    }

    fn select(&mut self, layout: Layout, order: MapOrder) {
        self.layout = layout;
        self.order = order;
    }
}

/// A lone `-` is a file name, not a flag.
fn is_option(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

fn parse_rotation(value: &OsStr) -> Result<Rotation, UsageError> {
    value
        .to_str()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|degrees| Rotation::from_degrees(degrees).ok())
        .ok_or_else(|| UsageError::InvalidRotation {
            value: value.to_string_lossy().into_owned(),
        })
}
