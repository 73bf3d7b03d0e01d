//! Grid dimensions and coordinate validation.

use crate::error::GridError;

/// Dimensions of a grid, handed to traversal visitors.
///
/// A visitor borrows the element it is given mutably, so it cannot also
/// borrow the grid; the shape carries everything a visitor may ask the
/// grid about. Construction validates every field, so a `GridShape`
/// always describes a non-empty grid whose cells are addressable with
/// `i32` coordinates and a `usize` cell count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    width: u32,
    height: u32,
    element_size: usize,
    blocksize: u32,
}

impl GridShape {
    /// Largest accepted width, height, or block size.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Validate and build a shape.
    ///
    /// Fails with [`GridError::InvalidArgument`] if `width`, `height`,
    /// `element_size` or `blocksize` is zero, if a dimension exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or if `width * height * element_size`
    /// bytes exceed `isize::MAX`, the most any allocation may hold.
    pub fn new(
        width: u32,
        height: u32,
        element_size: usize,
        blocksize: u32,
    ) -> Result<Self, GridError> {
        check_dim("width", width)?;
        check_dim("height", height)?;
        check_dim("blocksize", blocksize)?;
        if element_size == 0 {
            return Err(GridError::InvalidArgument {
                name: "element_size",
                value: 0,
                expected: "a non-zero-sized element type",
            });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|cells| cells.checked_mul(element_size))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(GridError::InvalidArgument {
                name: "height",
                value: height as u64,
                expected: "width * height elements to fit in isize::MAX bytes",
            })?;
        Ok(Self {
            width,
            height,
            element_size,
            blocksize,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Side length of a block; 1 for unblocked layouts.
    pub fn blocksize(&self) -> u32 {
        self.blocksize
    }

    /// Number of logical cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `(column, row)` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= 0 && row >= 0 && (column as u32) < self.width && (row as u32) < self.height
    }

    /// Validate `(column, row)` and return it as unsigned offsets.
    pub fn check(&self, column: i32, row: i32) -> Result<(u32, u32), GridError> {
        if self.contains(column, row) {
            Ok((column as u32, row as u32))
        } else {
            Err(GridError::OutOfRange {
                column,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

}

fn check_dim(name: &'static str, value: u32) -> Result<(), GridError> {
    if value == 0 {
        return Err(GridError::InvalidArgument {
            name,
            value: 0,
            expected: "a positive value",
        });
    }
    if value > GridShape::MAX_DIM {
        return Err(GridError::InvalidArgument {
            name,
            value: value as u64,
            expected: "a value no larger than i32::MAX",
        });
    }
    Ok(())
}
