//! Two-dimensional grids with pluggable physical layout.
//!
//! This crate defines the [`Grid`] trait, the single interface through
//! which clients read, write and traverse cells, and the
//! [`GridMethods`] capability table that constructs grids of one concrete
//! representation without the client naming it.
//!
//! # Representations
//!
//! - [`PlainGrid`]: one row-major buffer; row-major and column-major traversal.
//! - [`BlockedGrid`]: square blocks, one buffer each; block-major traversal.
//!
//! # Choosing a representation
//!
//! ```
//! use locality_grid::{Grid, GridMethods, MapOrder, BLOCKED, PLAIN};
//!
//! fn total<M: GridMethods<u32>>(methods: M) -> u64 {
//!     let mut grid = methods.create(5, 3).unwrap();
//!     grid.small_map_default(|v| *v = 2);
//!     let mut sum = 0u64;
//!     grid.small_map_default(|v| sum += u64::from(*v));
//!     sum
//! }
//!
//! assert_eq!(total(PLAIN), 30);
//! assert_eq!(total(BLOCKED), 30);
//! assert!(!GridMethods::<u32>::supports(PLAIN, MapOrder::BlockMajor));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blocked;
pub mod grid;
pub mod methods;
pub mod plain;
pub mod visit;

#[cfg(test)]
pub(crate) mod compliance;

pub use blocked::BlockedGrid;
pub use grid::Grid;
pub use methods::{BlockedMethods, GridMethods, PlainMethods, BLOCKED, PLAIN};
pub use plain::PlainGrid;

pub use locality_core::{GridError, GridShape, Layout, MapOrder, MapSlot, MapTable};
