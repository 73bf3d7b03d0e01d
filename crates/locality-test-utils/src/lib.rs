//! Test fixtures for Locality development.
//!
//! Provides grid and image builders shared by the integration tests of
//! the codec, transform and facade crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    encode_p6, gradient_image, gradient_pixel, grid_from_rows, pixel_rows, rows_of,
    sequential_grid, sequential_grid_with_blocksize, BLOCKSIZES,
};
