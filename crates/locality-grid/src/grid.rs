//! The [`Grid`] trait.

use locality_core::{GridError, GridShape, Layout, MapOrder, MapTable};

use crate::visit::small;

/// Uniform interface over every grid representation.
///
/// Clients obtain a grid from a [`GridMethods`](crate::GridMethods)
/// implementation and touch it only through this trait. Traversal
/// methods are generic over the visitor, so each call site is
/// monomorphised for its closure.
///
/// # Visitors
///
/// A full visitor receives `(column, row, &shape, &mut element)`, is
/// called exactly once per logical cell, and may mutate the element it
/// is given. The grid's shape is fixed for its whole lifetime.
pub trait Grid<T> {
    /// Dimensions of the grid.
    fn shape(&self) -> GridShape;

    /// Traversal capabilities of this representation.
    fn map_table(&self) -> MapTable;

    /// Shared reference to the cell at `(column, row)`.
    ///
    /// Fails with [`GridError::OutOfRange`] outside the logical extent.
    fn get(&self, column: i32, row: i32) -> Result<&T, GridError>;

    /// Mutable reference to the cell at `(column, row)`.
    ///
    /// Fails with [`GridError::OutOfRange`] outside the logical extent.
    fn at(&mut self, column: i32, row: i32) -> Result<&mut T, GridError>;

    /// Visit every cell in `order`.
    ///
    /// Returns [`GridError::UnsupportedOrder`] without visiting anything
    /// if the representation does not implement `order`.
    fn map<F>(&mut self, order: MapOrder, visit: F) -> Result<(), GridError>
    where
        F: FnMut(i32, i32, &GridShape, &mut T);

    /// Visit every cell in the representation's default order.
    fn map_default<F>(&mut self, visit: F)
    where
        F: FnMut(i32, i32, &GridShape, &mut T);

    /// Physical layout.
    fn layout(&self) -> Layout {
        self.map_table().layout()
    }

    /// Number of columns.
    fn width(&self) -> u32 {
        self.shape().width()
    }

    /// Number of rows.
    fn height(&self) -> u32 {
        self.shape().height()
    }

    /// Size of one element in bytes.
    fn element_size(&self) -> usize {
        self.shape().element_size()
    }

    /// Block side length; 1 for unblocked layouts.
    fn blocksize(&self) -> u32 {
        self.shape().blocksize()
    }

    /// Whether `order` can be passed to [`map`](Self::map).
    fn supports(&self, order: MapOrder) -> bool {
        self.map_table().supports(order)
    }

    /// The most natural traversal order for this representation.
    fn default_order(&self) -> MapOrder {
        self.map_table().default_order()
    }

    /// [`map`](Self::map) with a visitor that only sees the element.
    fn small_map<F>(&mut self, order: MapOrder, visit: F) -> Result<(), GridError>
    where
        F: FnMut(&mut T),
    {
        self.map(order, small(visit))
    }

    /// [`map_default`](Self::map_default) with a visitor that only sees
    /// the element.
    fn small_map_default<F>(&mut self, visit: F)
    where
        F: FnMut(&mut T),
    {
        self.map_default(small(visit))
    }
}
