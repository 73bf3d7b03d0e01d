//! Locality: two-dimensional grids with pluggable physical layout.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Locality sub-crates. For most users, adding `locality` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use locality::prelude::*;
//!
//! // Written once, runs on either representation.
//! fn transpose_sum<M: GridMethods<u32>>(methods: M) -> u64 {
//!     let mut grid = methods.create(40, 30).unwrap();
//!     grid.map_default(|c, r, _, v| *v = (r * 40 + c) as u32);
//!     let order = methods.default_order();
//!     let mut rotated = rotate(methods, &mut grid, order, Rotation::Ninety).unwrap();
//!     assert_eq!((rotated.width(), rotated.height()), (30, 40));
//!     let mut total = 0u64;
//!     rotated.small_map_default(|v| total += u64::from(*v));
//!     total
//! }
//!
//! assert_eq!(transpose_sum(PLAIN), transpose_sum(BLOCKED));
//! assert_eq!(transpose_sum(PLAIN), (0..1200u64).sum::<u64>());
//!
//! // Blocked grids only implement block-major traversal.
//! assert!(!GridMethods::<u32>::supports(BLOCKED, MapOrder::RowMajor));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `locality-core` | Errors, orders, map tables, grid shapes |
//! | [`arena`] | `locality-arena` | `FlatArray` storage and block sizing |
//! | [`grid`] | `locality-grid` | Plain and blocked grids, the `Grid` trait, method tables |
//! | [`ppm`] | `locality-ppm` | PPM image codec |
//! | [`transform`] | `locality-transform` | Rotations, timing, CLI configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, traversal orders and grid shapes (`locality-core`).
pub use locality_core as types;

/// Flat element storage and block sizing (`locality-arena`).
///
/// [`arena::BlockConfig`] decides how large blocks are when a blocked grid
/// picks its own block size.
pub use locality_arena as arena;

/// Grid representations (`locality-grid`).
///
/// [`grid::PlainGrid`] and [`grid::BlockedGrid`] behind the
/// [`grid::Grid`] trait, built through [`grid::PLAIN`] or [`grid::BLOCKED`].
pub use locality_grid as grid;

/// PPM image codec (`locality-ppm`).
pub use locality_ppm as ppm;

/// Image rotations and the `ppmtrans` pipeline (`locality-transform`).
pub use locality_transform as transform;

/// Common imports for typical Locality usage.
///
/// ```rust
/// use locality::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use locality_core::{GridError, GridShape, Layout, MapOrder, MapSlot, MapTable};

    // Grids
    pub use locality_grid::{
        BlockedGrid, BlockedMethods, Grid, GridMethods, PlainGrid, PlainMethods, BLOCKED, PLAIN,
    };

    // Images
    pub use locality_ppm::{Ppm, PpmError, Rgb};

    // Transforms
    pub use locality_transform::{rotate, Rotation, TransformError};
}
