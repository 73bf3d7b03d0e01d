//! Block-major grid: square blocks, each an independent buffer.
//!
//! # Layout
//!
//! The logical `width x height` extent is cut into `blocksize x blocksize`
//! blocks. Block `(bc, br)` holds the cells with
//! `column / blocksize == bc` and `row / blocksize == br`. Inside a block
//! the cells are stored column-major:
//!
//! ```text
//! index = blocksize * (column % blocksize) + (row % blocksize)
//! ```
//!
//! Every block has full `blocksize²` capacity, including blocks on the
//! right and bottom edges where only part of the block lies inside the
//! logical extent. The cells past the edge exist physically but are never
//! reachable through `get`/`at` or visited by traversal.

use std::mem;

use locality_arena::{BlockConfig, FlatArray};
use locality_core::{GridError, GridShape, Layout, MapOrder, MapTable};
use log::{debug, trace};

use crate::grid::Grid;
use crate::plain::PlainGrid;

/// A `width x height` grid stored as an arena of square blocks.
///
/// The blocks themselves live in a row-major [`PlainGrid`] indexed by
/// block coordinates; the grid owns every block exclusively.
///
/// # Examples
///
/// ```
/// use locality_grid::{BlockedGrid, Grid, MapOrder};
///
/// // 3x3 cells in 2x2 blocks: four blocks, three of them partial.
/// let mut grid: BlockedGrid<u8> = BlockedGrid::new(3, 3, 2).unwrap();
/// assert_eq!(grid.block_count(), 4);
///
/// let mut order = Vec::new();
/// grid.map(MapOrder::BlockMajor, |c, r, _, _| order.push((c, r))).unwrap();
/// assert_eq!(
///     order,
///     vec![(0, 0), (1, 0), (0, 1), (1, 1), (2, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BlockedGrid<T> {
    shape: GridShape,
    blocks: PlainGrid<FlatArray<T>>,
}

impl<T: Clone + Default> BlockedGrid<T> {
    /// Allocate a grid with blocks of side `blocksize`.
    ///
    /// Every block is allocated eagerly. Fails with
    /// [`GridError::InvalidArgument`] if `width`, `height` or `blocksize`
    /// is zero or too large, if the padded blocks would not fit in memory,
    /// or if `T` is zero-sized.
    pub fn new(width: u32, height: u32, blocksize: u32) -> Result<Self, GridError> {
        let shape = GridShape::new(width, height, mem::size_of::<T>(), blocksize)?;
        let block_columns = width.div_ceil(blocksize);
        let block_rows = height.div_ceil(blocksize);
        let block_len = block_len::<T>(blocksize, block_columns, block_rows)?;
        let template: FlatArray<T> = FlatArray::new(block_len)?;
        let blocks = PlainGrid::from_fn(block_columns, block_rows, |_, _| template.clone())?;
        debug!(
            "blocked grid {width}x{height}: {} blocks of {blocksize}x{blocksize}, {} bytes",
            blocks.cells().len(),
            blocks.cells().len() * template.memory_bytes()
        );
        Ok(Self { shape, blocks })
    }

    /// Allocate a grid whose block size is the largest that keeps one
    /// block within 64KB.
    pub fn with_auto_blocksize(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_config(width, height, &BlockConfig::default())
    }

    /// Allocate a grid whose block size is derived from `config`.
    pub fn with_config(width: u32, height: u32, config: &BlockConfig) -> Result<Self, GridError> {
        Self::new(width, height, config.blocksize_for(mem::size_of::<T>()))
    }
}

impl<T> BlockedGrid<T> {
    /// Number of block columns, `ceil(width / blocksize)`.
    pub fn block_columns(&self) -> u32 {
        self.blocks.width()
    }

    /// Number of block rows, `ceil(height / blocksize)`.
    pub fn block_rows(&self) -> u32 {
        self.blocks.height()
    }

    /// Total number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.cells().len()
    }

    /// Bytes held by all blocks, including cells past the logical edge.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.cells().iter().map(FlatArray::memory_bytes).sum()
    }

    /// Visit every cell block by block.
    ///
    /// Blocks are taken in row-major order of block coordinates. Within a
    /// block, cells are visited row by row, clipped to the logical extent;
    /// cells of an edge block that lie past `width` or `height` are
    /// skipped.
    pub fn map_block_major<F>(&mut self, mut visit: F)
    where
        F: FnMut(i32, i32, &GridShape, &mut T),
    {
        let shape = self.shape;
        let bs = shape.blocksize();
        let (width, height) = (shape.width(), shape.height());
        trace!("block-major map over {width}x{height} in {bs}x{bs} blocks");
        self.blocks.map_row_major(|block_col, block_row, _, block| {
            let col_lo = block_col as u32 * bs;
            let row_lo = block_row as u32 * bs;
            let col_hi = (col_lo + bs).min(width);
            let row_hi = (row_lo + bs).min(height);
            let cells = block.as_mut_slice();
            for row in row_lo..row_hi {
                for column in col_lo..col_hi {
                    let elem = &mut cells[in_block_index(bs, column, row)];
                    visit(column as i32, row as i32, &shape, elem);
                }
            }
        });
    }
}

impl<T> Grid<T> for BlockedGrid<T> {
    fn shape(&self) -> GridShape {
        self.shape
    }

    fn map_table(&self) -> MapTable {
        MapTable::BLOCKED
    }

    fn get(&self, column: i32, row: i32) -> Result<&T, GridError> {
        let (c, r) = self.shape.check(column, row)?;
        let bs = self.shape.blocksize();
        let block = self.blocks.get((c / bs) as i32, (r / bs) as i32)?;
        block.get(in_block_index(bs, c, r))
    }

    fn at(&mut self, column: i32, row: i32) -> Result<&mut T, GridError> {
        let (c, r) = self.shape.check(column, row)?;
        let bs = self.shape.blocksize();
        let block = self.blocks.at((c / bs) as i32, (r / bs) as i32)?;
        block.at(in_block_index(bs, c, r))
    }

    fn map<F>(&mut self, order: MapOrder, visit: F) -> Result<(), GridError>
    where
        F: FnMut(i32, i32, &GridShape, &mut T),
    {
        match order {
            MapOrder::BlockMajor => {
                self.map_block_major(visit);
                Ok(())
            }
            MapOrder::RowMajor | MapOrder::ColumnMajor => Err(GridError::UnsupportedOrder {
                layout: Layout::Blocked,
                order,
            }),
        }
    }

    fn map_default<F>(&mut self, visit: F)
    where
        F: FnMut(i32, i32, &GridShape, &mut T),
    {
        self.map_block_major(visit);
    }
}

/// Position of `(column, row)` inside its block's buffer.
fn in_block_index(blocksize: u32, column: u32, row: u32) -> usize {
    let bs = blocksize as usize;
    bs * (column as usize % bs) + row as usize % bs
}

/// Elements in one block, rejecting block sizes whose padded storage,
/// summed over every block, cannot be addressed.
fn block_len<T>(blocksize: u32, block_columns: u32, block_rows: u32) -> Result<usize, GridError> {
    let size = mem::size_of::<T>();
    let block_bytes = BlockConfig::block_bytes(blocksize, size);
    let total = (block_columns as usize)
        .checked_mul(block_rows as usize)
        .zip(block_bytes)
        .and_then(|(blocks, bytes)| blocks.checked_mul(bytes));
    match (block_bytes, total) {
        (Some(bytes), Some(total)) if total <= isize::MAX as usize => Ok(bytes / size),
        _ => Err(GridError::InvalidArgument {
            name: "blocksize",
            value: blocksize as u64,
            expected: "padded blocks that fit in isize::MAX bytes",
        }),
    }
}
