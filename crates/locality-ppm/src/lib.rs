//! PPM image codec for Locality grids.
//!
//! Reads portable pixmaps into a grid of any representation and writes
//! grid-backed images back out. The codec never sees how the grid stores
//! its pixels: reading goes through [`GridMethods`](locality_grid::GridMethods)
//! and [`Grid::at`](locality_grid::Grid::at), writing through
//! [`Grid::get`](locality_grid::Grid::get).
//!
//! # Format
//!
//! ```text
//! P6 <ws> width <ws> height <ws> maxval <one ws byte> raster
//! P3 <ws> width <ws> height <ws> maxval <ws> ascii samples...
//! ```
//!
//! `#` starts a comment that runs to the end of the line. Binary samples
//! are one byte when `maxval < 256`, otherwise two bytes big-endian.
//! Output is always P6.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod image;
pub mod reader;
pub mod writer;

pub use error::PpmError;
pub use image::{Ppm, Rgb};
pub use reader::read;
pub use writer::write;
