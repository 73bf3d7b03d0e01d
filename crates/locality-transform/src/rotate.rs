//! Quarter-turn rotations.
//!
//! A rotation traverses the source once, in a caller-chosen order, and
//! writes each element to its rotated position in a fresh destination
//! built through the same [`GridMethods`] table. The traversal order only
//! changes the memory access pattern; the result is identical for every
//! supported order.

use std::fmt;

use locality_core::MapOrder;
use locality_grid::{Grid, GridMethods};
use log::debug;

use crate::error::TransformError;

/// Clockwise rotation by a multiple of 90 degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Copy unchanged.
    #[default]
    Zero,
    /// Quarter turn clockwise.
    Ninety,
    /// Half turn.
    OneEighty,
    /// Three quarter turns clockwise.
    TwoSeventy,
}

impl Rotation {
    /// Every rotation, in increasing angle.
    pub const ALL: [Rotation; 4] = [
        Rotation::Zero,
        Rotation::Ninety,
        Rotation::OneEighty,
        Rotation::TwoSeventy,
    ];

    /// Parse an angle in degrees. Only 0, 90, 180 and 270 are accepted.
    pub fn from_degrees(degrees: i64) -> Result<Self, TransformError> {
        match degrees {
            0 => Ok(Self::Zero),
            90 => Ok(Self::Ninety),
            180 => Ok(Self::OneEighty),
            270 => Ok(Self::TwoSeventy),
            _ => Err(TransformError::InvalidAngle { degrees }),
        }
    }

    /// The angle in degrees.
    pub fn degrees(self) -> u32 {
        self.quarter_turns() * 90
    }

    fn quarter_turns(self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::Ninety => 1,
            Self::OneEighty => 2,
            Self::TwoSeventy => 3,
        }
    }

    /// The rotation equivalent to applying `self` and then `next`.
    pub fn then(self, next: Rotation) -> Rotation {
        Self::ALL[((self.quarter_turns() + next.quarter_turns()) % 4) as usize]
    }

    /// Whether the rotation exchanges width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Ninety | Self::TwoSeventy)
    }

    /// Dimensions of the result when rotating a `width x height` grid.
    pub fn output_dims(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Destination of source cell `(column, row)` in a `width x height`
    /// source.
    pub fn target(self, column: i32, row: i32, width: u32, height: u32) -> (i32, i32) {
        let (w, h) = (width as i32, height as i32);
        match self {
            Self::Zero => (column, row),
            Self::Ninety => (h - 1 - row, column),
            Self::OneEighty => (w - 1 - column, h - 1 - row),
            Self::TwoSeventy => (row, w - 1 - column),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Rotate `source` into an existing `target`, traversing the source in
/// `order`.
///
/// `target` must already have the rotated dimensions. This is the part of
/// a rotation that timing measures: one traversal, no allocation.
///
/// # Errors
///
/// [`TransformError::TargetShape`] if `target` has the wrong dimensions,
/// [`TransformError::Grid`] if `source` does not support `order`. Nothing
/// is written in either case.
pub fn rotate_into<T, S, D>(
    source: &mut S,
    target: &mut D,
    order: MapOrder,
    rotation: Rotation,
) -> Result<(), TransformError>
where
    T: Clone,
    S: Grid<T>,
    D: Grid<T>,
{
    let expected = rotation.output_dims(source.width(), source.height());
    let found = (target.width(), target.height());
    if expected != found {
        return Err(TransformError::TargetShape { expected, found });
    }
    let mut first_err = None;
    source.map(order, |column, row, shape, elem| {
        if first_err.is_some() {
            return;
        }
        let (c, r) = rotation.target(column, row, shape.width(), shape.height());
        match target.at(c, r) {
            Ok(slot) => *slot = elem.clone(),
            Err(e) => first_err = Some(e),
        }
    })?;
    match first_err {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Rotate `source` into a new grid built by `methods`.
///
/// The order is checked against the table before the destination is
/// allocated.
pub fn rotate<T, G, M>(
    methods: M,
    source: &mut G,
    order: MapOrder,
    rotation: Rotation,
) -> Result<G, TransformError>
where
    T: Clone,
    G: Grid<T>,
    M: GridMethods<T, Grid = G>,
{
    let order = methods.check(order)?;
    let (width, height) = rotation.output_dims(source.width(), source.height());
    debug!(
        "rotating {}x{} {} grid by {rotation} in {order} order",
        source.width(),
        source.height(),
        methods.layout()
    );
    let mut target = methods.create(width, height)?;
    rotate_into(source, &mut target, order, rotation)?;
    Ok(target)
}
