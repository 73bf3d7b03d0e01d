//! Flat element storage for Locality grids.
//!
//! Every grid owns its cells through [`FlatArray`] buffers: a plain grid
//! owns one, a blocked grid owns one per block. Buffers are never shared
//! between grids and are freed when their owner is dropped.
//!
//! ```text
//! PlainGrid<T>   ── FlatArray<T> (width * height, row-major)
//! BlockedGrid<T> ── PlainGrid<FlatArray<T>> (one per block)
//!                   └── FlatArray<T> (blocksize², column-major in block)
//! ```
//!
//! [`BlockConfig`] decides how large a block may be.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod flat;

pub use config::BlockConfig;
pub use flat::FlatArray;
