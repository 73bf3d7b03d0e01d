//! Representations, traversal orders, and the per-representation
//! table recording which orders are implemented.

use std::fmt;

use crate::error::GridError;

/// Physical layout of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One row-major buffer.
    Plain,
    /// Square blocks, each its own buffer.
    Blocked,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Blocked => f.write_str("blocked"),
        }
    }
}

/// Order in which a traversal visits the cells of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapOrder {
    /// Increasing row outer, increasing column inner.
    RowMajor,
    /// Increasing column outer, increasing row inner.
    ColumnMajor,
    /// All cells of one block before the next; blocks in row-major
    /// order of block coordinates.
    BlockMajor,
}

impl MapOrder {
    /// Every order, in declaration order.
    pub const ALL: [MapOrder; 3] = [Self::RowMajor, Self::ColumnMajor, Self::BlockMajor];
}

impl fmt::Display for MapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowMajor => f.write_str("row-major"),
            Self::ColumnMajor => f.write_str("column-major"),
            Self::BlockMajor => f.write_str("block-major"),
        }
    }
}

/// One slot of a [`MapTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapSlot {
    /// The representation implements this order.
    Supported,
    /// The representation does not implement this order. Callers must
    /// pick another order or representation before traversing.
    Unsupported,
}

impl MapSlot {
    /// `true` for [`MapSlot::Supported`].
    pub fn is_supported(self) -> bool {
        self == Self::Supported
    }
}

/// Traversal capabilities of one grid representation.
///
/// A fixed record: one slot per [`MapOrder`] plus the order the
/// representation considers most natural. The default order is always
/// a supported one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapTable {
    layout: Layout,
    row_major: MapSlot,
    column_major: MapSlot,
    block_major: MapSlot,
    default: MapOrder,
}

impl MapTable {
    /// Table of a row-major representation: row- and column-major
    /// supported, row-major by default.
    pub const PLAIN: MapTable = MapTable {
        layout: Layout::Plain,
        row_major: MapSlot::Supported,
        column_major: MapSlot::Supported,
        block_major: MapSlot::Unsupported,
        default: MapOrder::RowMajor,
    };

    /// Table of a block-major representation: block-major only.
    pub const BLOCKED: MapTable = MapTable {
        layout: Layout::Blocked,
        row_major: MapSlot::Unsupported,
        column_major: MapSlot::Unsupported,
        block_major: MapSlot::Supported,
        default: MapOrder::BlockMajor,
    };

    /// Representation this table describes.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Slot for `order`.
    pub fn slot(&self, order: MapOrder) -> MapSlot {
        match order {
            MapOrder::RowMajor => self.row_major,
            MapOrder::ColumnMajor => self.column_major,
            MapOrder::BlockMajor => self.block_major,
        }
    }

    /// Whether `order` is implemented.
    pub fn supports(&self, order: MapOrder) -> bool {
        self.slot(order).is_supported()
    }

    /// The most natural order for this representation.
    pub fn default_order(&self) -> MapOrder {
        self.default
    }

    /// Return `order` if supported, else [`GridError::UnsupportedOrder`].
    pub fn check(&self, order: MapOrder) -> Result<MapOrder, GridError> {
        match self.slot(order) {
            MapSlot::Supported => Ok(order),
            MapSlot::Unsupported => Err(GridError::UnsupportedOrder {
                layout: self.layout,
                order,
            }),
        }
    }
}
