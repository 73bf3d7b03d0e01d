//! Core types for the Locality grid layouts.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every grid representation: the error kinds,
//! the traversal orders and the capability table that records which of
//! them a representation supports, and the [`GridShape`] passed to
//! traversal visitors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod order;
pub mod shape;

pub use error::GridError;
pub use order::{Layout, MapOrder, MapSlot, MapTable};
pub use shape::GridShape;
