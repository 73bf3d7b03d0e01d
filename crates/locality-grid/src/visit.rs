//! Visitor adapters.
//!
//! Every traversal calls a full visitor,
//! `FnMut(column, row, &GridShape, &mut element)`. Callers that only care
//! about the element wrap a reduced `FnMut(&mut element)` with [`small`];
//! there is no second traversal implementation for the reduced shape.

use locality_core::GridShape;

/// Adapt a reduced visitor to the full visitor signature by discarding
/// the coordinates and the shape.
pub fn small<T, F>(mut visit: F) -> impl FnMut(i32, i32, &GridShape, &mut T)
where
    F: FnMut(&mut T),
{
    move |_column, _row, _shape, elem| visit(elem)
}
