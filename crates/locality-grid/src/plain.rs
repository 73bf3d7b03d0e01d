//! Row-major grid over one contiguous buffer.

use std::mem;

use locality_arena::FlatArray;
use locality_core::{GridError, GridShape, Layout, MapOrder, MapTable};
use log::{debug, trace};

use crate::grid::Grid;

/// A `width x height` grid stored row-major in one [`FlatArray`].
///
/// Cell `(column, row)` lives at index `row * width + column`.
///
/// # Examples
///
/// ```
/// use locality_grid::{Grid, MapOrder, PlainGrid};
///
/// let mut grid: PlainGrid<u8> = PlainGrid::new(3, 2).unwrap();
/// *grid.at(2, 1).unwrap() = 9;
/// assert_eq!(grid.cells(), &[0, 0, 0, 0, 0, 9]);
///
/// let mut order = Vec::new();
/// grid.map(MapOrder::ColumnMajor, |c, r, _, _| order.push((c, r))).unwrap();
/// assert_eq!(order[..3], [(0, 0), (0, 1), (1, 0)]);
/// ```
#[derive(Clone, Debug)]
pub struct PlainGrid<T> {
    shape: GridShape,
    cells: FlatArray<T>,
}

impl<T: Clone + Default> PlainGrid<T> {
    /// Allocate a grid of default-initialised cells.
    ///
    /// Fails with [`GridError::InvalidArgument`] if either dimension is
    /// zero or too large, or if `T` is zero-sized.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let shape = GridShape::new(width, height, mem::size_of::<T>(), 1)?;
        let cells = FlatArray::new(shape.cell_count())?;
        debug!(
            "plain grid {width}x{height}: {} bytes",
            cells.memory_bytes()
        );
        Ok(Self { shape, cells })
    }
}

impl<T> PlainGrid<T> {
    /// Allocate a grid whose cell `(column, row)` is `f(column, row)`.
    ///
    /// Same validation as [`new`](Self::new). Cells are produced in
    /// row-major order.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> T,
    ) -> Result<Self, GridError> {
        let shape = GridShape::new(width, height, mem::size_of::<T>(), 1)?;
        let w = width as usize;
        let cells = FlatArray::from_fn(shape.cell_count(), |i| {
            f((i % w) as u32, (i / w) as u32)
        })?;
        Ok(Self { shape, cells })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        self.cells.as_slice()
    }

    /// Bytes held by the cell buffer.
    pub fn memory_bytes(&self) -> usize {
        self.cells.memory_bytes()
    }

    fn index(&self, column: u32, row: u32) -> usize {
        row as usize * self.shape.width() as usize + column as usize
    }

    /// Visit every cell, rows top to bottom, each row left to right.
    pub fn map_row_major<F>(&mut self, mut visit: F)
    where
        F: FnMut(i32, i32, &GridShape, &mut T),
    {
        let shape = self.shape;
        trace!("row-major map over {}x{}", shape.width(), shape.height());
        let w = shape.width() as usize;
        for (row, line) in self.cells.as_mut_slice().chunks_exact_mut(w).enumerate() {
            for (column, elem) in line.iter_mut().enumerate() {
                visit(column as i32, row as i32, &shape, elem);
            }
        }
    }

    /// Visit every cell, columns left to right, each column top to bottom.
    pub fn map_col_major<F>(&mut self, mut visit: F)
    where
        F: FnMut(i32, i32, &GridShape, &mut T),
    {
        let shape = self.shape;
        trace!("column-major map over {}x{}", shape.width(), shape.height());
        let w = shape.width() as usize;
        let h = shape.height() as usize;
        let cells = self.cells.as_mut_slice();
        for column in 0..w {
            for row in 0..h {
                visit(column as i32, row as i32, &shape, &mut cells[row * w + column]);
            }
        }
    }
}

impl<T> Grid<T> for PlainGrid<T> {
    fn shape(&self) -> GridShape {
        self.shape
    }

    fn map_table(&self) -> MapTable {
        MapTable::PLAIN
    }

    fn get(&self, column: i32, row: i32) -> Result<&T, GridError> {
        let (c, r) = self.shape.check(column, row)?;
        self.cells.get(self.index(c, r))
    }

    fn at(&mut self, column: i32, row: i32) -> Result<&mut T, GridError> {
        let (c, r) = self.shape.check(column, row)?;
        let index = self.index(c, r);
        self.cells.at(index)
    }

    fn map<F>(&mut self, order: MapOrder, visit: F) -> Result<(), GridError>
    where
        F: FnMut(i32, i32, &GridShape, &mut T),
    {
        match order {
            MapOrder::RowMajor => self.map_row_major(visit),
            MapOrder::ColumnMajor => self.map_col_major(visit),
            MapOrder::BlockMajor => {
                return Err(GridError::UnsupportedOrder {
                    layout: Layout::Plain,
                    order,
                })
            }
        }
        Ok(())
    }

    fn map_default<F>(&mut self, visit: F)
    where
        F: FnMut(i32, i32, &GridShape, &mut T),
    {
        self.map_row_major(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn sequential(width: u32, height: u32) -> PlainGrid<u32> {
        PlainGrid::from_fn(width, height, |c, r| r * width + c).unwrap()
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            PlainGrid::<u8>::new(0, 4),
            Err(GridError::InvalidArgument { name: "width", .. })
        ));
        assert!(matches!(
            PlainGrid::<u8>::new(4, 0),
            Err(GridError::InvalidArgument { name: "height", .. })
        ));
    }

    #[test]
    fn new_rejects_zero_sized_elements() {
        assert!(matches!(
            PlainGrid::<()>::new(2, 2),
            Err(GridError::InvalidArgument {
                name: "element_size",
                ..
            })
        ));
    }

    #[test]
    fn unaddressable_grid_is_an_error() {
        let max = i32::MAX as u32;
        assert!(matches!(
            PlainGrid::<u64>::new(max, max),
            Err(GridError::InvalidArgument { name: "height", .. })
        ));
        assert!(matches!(
            PlainGrid::from_fn(max, max, |c, r| u64::from(c) + u64::from(r)),
            Err(GridError::InvalidArgument { name: "height", .. })
        ));
    }

    #[test]
    fn storage_is_row_major() {
        let g = sequential(3, 2);
        assert_eq!(g.cells(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(*g.get(1, 1).unwrap(), 4);
    }

    #[test]
    fn accessors_report_shape() {
        let g: PlainGrid<[u8; 3]> = PlainGrid::new(7, 5).unwrap();
        assert_eq!(g.width(), 7);
        assert_eq!(g.height(), 5);
        assert_eq!(g.element_size(), 3);
        assert_eq!(g.blocksize(), 1);
        assert_eq!(g.layout(), Layout::Plain);
        assert_eq!(g.memory_bytes(), 105);
    }

    #[test]
    fn row_major_order() {
        let mut g = sequential(3, 2);
        let mut seen = Vec::new();
        g.map_row_major(|c, r, _, v| seen.push((c, r, *v)));
        assert_eq!(
            seen,
            vec![
                (0, 0, 0),
                (1, 0, 1),
                (2, 0, 2),
                (0, 1, 3),
                (1, 1, 4),
                (2, 1, 5)
            ]
        );
    }

    #[test]
    fn column_major_order() {
        let mut g = sequential(3, 2);
        let mut seen = Vec::new();
        g.map_col_major(|c, r, _, v| seen.push((c, r, *v)));
        assert_eq!(
            seen,
            vec![
                (0, 0, 0),
                (0, 1, 3),
                (1, 0, 1),
                (1, 1, 4),
                (2, 0, 2),
                (2, 1, 5)
            ]
        );
    }

    #[test]
    fn visitor_sees_grid_shape() {
        let mut g: PlainGrid<u8> = PlainGrid::new(4, 2).unwrap();
        g.map_default(|_, _, shape, _| {
            assert_eq!((shape.width(), shape.height()), (4, 2));
        });
    }

    #[test]
    fn visitor_mutations_persist() {
        let mut g = sequential(4, 4);
        g.small_map(MapOrder::ColumnMajor, |v| *v *= 2).unwrap();
        assert_eq!(*g.get(3, 3).unwrap(), 30);
    }

    #[test]
    fn block_major_is_unsupported_and_visits_nothing() {
        let mut g = sequential(2, 2);
        let mut calls = 0;
        let result = g.map(MapOrder::BlockMajor, |_, _, _, _| calls += 1);
        assert_eq!(
            result,
            Err(GridError::UnsupportedOrder {
                layout: Layout::Plain,
                order: MapOrder::BlockMajor,
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn single_cell_grid() {
        let mut g: PlainGrid<u64> = PlainGrid::new(1, 1).unwrap();
        *g.at(0, 0).unwrap() = 5;
        compliance::assert_out_of_range_edges(&mut g);
        let mut n = 0;
        g.map_col_major(|_, _, _, v| n += *v);
        assert_eq!(n, 5);
    }

    #[test]
    fn compliance_small_grids() {
        for (w, h) in [(1, 1), (1, 7), (7, 1), (3, 5), (16, 16)] {
            let mut g: PlainGrid<u32> = PlainGrid::new(w, h).unwrap();
            compliance::run_full_compliance(&mut g);
        }
    }

    proptest! {
        #[test]
        fn round_trip_every_cell(w in 1u32..40, h in 1u32..40) {
            let mut g: PlainGrid<u32> = PlainGrid::new(w, h).unwrap();
            for r in 0..h as i32 {
                for c in 0..w as i32 {
                    *g.at(c, r).unwrap() = (r as u32) * 1000 + c as u32;
                }
            }
            for r in 0..h as i32 {
                for c in 0..w as i32 {
                    prop_assert_eq!(*g.get(c, r).unwrap(), (r as u32) * 1000 + c as u32);
                }
            }
        }

        #[test]
        fn both_orders_cover_every_cell(w in 1u32..30, h in 1u32..30) {
            let mut g: PlainGrid<u32> = PlainGrid::new(w, h).unwrap();
            compliance::assert_visits_every_cell_once(&mut g, MapOrder::RowMajor);
            compliance::assert_visits_every_cell_once(&mut g, MapOrder::ColumnMajor);
        }
    }
}
