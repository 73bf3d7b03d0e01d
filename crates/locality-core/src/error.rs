//! Error kinds shared by every grid representation.
//!
//! `InvalidArgument` and the two out-of-range kinds are precondition
//! failures: they are reported as early as possible and never recovered
//! from by clamping or wrapping indices. `UnsupportedOrder` is the value
//! form of a capability-table slot marked unsupported.

use std::error::Error;
use std::fmt;

use crate::order::{Layout, MapOrder};

/// Errors from grid construction, element access, or traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A constructor argument is outside its valid domain
    /// (zero dimension, zero-sized element, zero block size, overflow).
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was rejected.
        value: u64,
        /// What the argument must satisfy.
        expected: &'static str,
    },
    /// A `(column, row)` coordinate lies outside `[0, width) x [0, height)`.
    OutOfRange {
        /// Requested column.
        column: i32,
        /// Requested row.
        row: i32,
        /// Logical width of the grid.
        width: u32,
        /// Logical height of the grid.
        height: u32,
    },
    /// A linear index lies outside `[0, length)` of a flat array.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of elements in the array.
        length: usize,
    },
    /// The traversal order is not implemented by the representation.
    UnsupportedOrder {
        /// Representation that was asked.
        layout: Layout,
        /// The order it does not implement.
        order: MapOrder,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                name,
                value,
                expected,
            } => write!(f, "invalid {name} {value}: expected {expected}"),
            Self::OutOfRange {
                column,
                row,
                width,
                height,
            } => write!(
                f,
                "cell ({column}, {row}) out of range: [0, {width}) x [0, {height})"
            ),
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index {index} out of range: [0, {length})")
            }
            Self::UnsupportedOrder { layout, order } => {
                write!(f, "{layout} grids do not support {order} mapping")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_argument() {
        let err = GridError::InvalidArgument {
            name: "blocksize",
            value: 0,
            expected: "a positive block size",
        };
        assert_eq!(
            err.to_string(),
            "invalid blocksize 0: expected a positive block size"
        );
    }

    #[test]
    fn display_out_of_range_shows_extent() {
        let err = GridError::OutOfRange {
            column: 4,
            row: -1,
            width: 4,
            height: 3,
        };
        assert_eq!(err.to_string(), "cell (4, -1) out of range: [0, 4) x [0, 3)");
    }

    #[test]
    fn display_unsupported_order() {
        let err = GridError::UnsupportedOrder {
            layout: Layout::Plain,
            order: MapOrder::BlockMajor,
        };
        assert_eq!(err.to_string(), "plain grids do not support block-major mapping");
    }
}
