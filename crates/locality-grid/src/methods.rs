//! The [`GridMethods`] capability table.
//!
//! A client that must work with either representation is written once,
//! generic over `M: GridMethods<T>`, and handed [`PLAIN`] or [`BLOCKED`].
//! The table is resolved at that single point; all per-cell work goes
//! through the monomorphised [`Grid`] methods of the concrete grid.
//!
//! Which traversal orders a representation implements is part of the
//! table ([`GridMethods::map_table`]), so a caller can reject or redirect
//! an unsupported order before building any grid.

use std::fmt;

use locality_arena::BlockConfig;
use locality_core::{GridError, Layout, MapOrder, MapTable};

use crate::blocked::BlockedGrid;
use crate::grid::Grid;
use crate::plain::PlainGrid;

/// Constructors and capabilities for one grid representation.
///
/// Implementors are small `Copy` values without mutable state.
pub trait GridMethods<T>: Copy + fmt::Debug {
    /// The concrete grid this table builds.
    type Grid: Grid<T>;

    /// Traversal capabilities of grids built by this table.
    fn map_table(self) -> MapTable;

    /// Build a `width x height` grid, choosing any block size itself.
    fn create(self, width: u32, height: u32) -> Result<Self::Grid, GridError>;

    /// Build a `width x height` grid with the given block size.
    ///
    /// Representations without blocks ignore `blocksize`.
    fn create_with_blocksize(
        self,
        width: u32,
        height: u32,
        blocksize: u32,
    ) -> Result<Self::Grid, GridError>;

    /// Representation this table builds.
    fn layout(self) -> Layout {
        self.map_table().layout()
    }

    /// Whether grids from this table implement `order`.
    fn supports(self, order: MapOrder) -> bool {
        self.map_table().supports(order)
    }

    /// The most natural traversal order for this representation.
    fn default_order(self) -> MapOrder {
        self.map_table().default_order()
    }

    /// Return `order` if supported, else [`GridError::UnsupportedOrder`].
    fn check(self, order: MapOrder) -> Result<MapOrder, GridError> {
        self.map_table().check(order)
    }
}

/// Capability table for [`PlainGrid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainMethods;

/// Capability table for [`BlockedGrid`].
///
/// [`create`](GridMethods::create) sizes blocks from the per-block byte
/// budget this table carries (64KB for [`BLOCKED`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockedMethods {
    budget_bytes: usize,
}

impl BlockedMethods {
    /// A table whose automatic block size fits `budget_bytes`.
    pub const fn with_budget(budget_bytes: usize) -> Self {
        Self { budget_bytes }
    }

    /// Per-block byte budget used by [`create`](GridMethods::create).
    pub fn budget_bytes(&self) -> usize {
        self.budget_bytes
    }
}

impl Default for BlockedMethods {
    fn default() -> Self {
        BLOCKED
    }
}

/// The row-major representation.
pub const PLAIN: PlainMethods = PlainMethods;

/// The block-major representation with 64KB blocks.
pub const BLOCKED: BlockedMethods = BlockedMethods::with_budget(BlockConfig::DEFAULT_BUDGET_BYTES);

impl<T: Clone + Default> GridMethods<T> for PlainMethods {
    type Grid = PlainGrid<T>;

    fn map_table(self) -> MapTable {
        MapTable::PLAIN
    }

    fn create(self, width: u32, height: u32) -> Result<PlainGrid<T>, GridError> {
        PlainGrid::new(width, height)
    }

    fn create_with_blocksize(
        self,
        width: u32,
        height: u32,
        _blocksize: u32,
    ) -> Result<PlainGrid<T>, GridError> {
        PlainGrid::new(width, height)
    }
}

impl<T: Clone + Default> GridMethods<T> for BlockedMethods {
    type Grid = BlockedGrid<T>;

    fn map_table(self) -> MapTable {
        MapTable::BLOCKED
    }

    fn create(self, width: u32, height: u32) -> Result<BlockedGrid<T>, GridError> {
        BlockedGrid::with_config(width, height, &BlockConfig::new(self.budget_bytes))
    }

    fn create_with_blocksize(
        self,
        width: u32,
        height: u32,
        blocksize: u32,
    ) -> Result<BlockedGrid<T>, GridError> {
        BlockedGrid::new(width, height, blocksize)
    }
}
