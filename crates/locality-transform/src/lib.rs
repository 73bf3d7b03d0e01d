//! Image rotations over Locality grids.
//!
//! Everything here is written once against
//! [`GridMethods`](locality_grid::GridMethods) and runs unchanged on the
//! plain and blocked representations. Which representation and which
//! traversal order to use is chosen by [`TransformConfig`], normally
//! parsed from the `ppmtrans` command line.
//!
//! # Architecture
//!
//! ```text
//! args ──► TransformConfig ──► pipeline::transform(methods, ..)
//!                                 │ read PPM into methods.create(..)
//!                                 │ Stopwatch ─┐
//!                                 │ rotate_into│(source.map(order, ..))
//!                                 │          ◄─┘ elapsed
//!                                 └ write P6, return TimingReport
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod rotate;
pub mod timing;

pub use config::{TransformConfig, UsageError, USAGE};
pub use error::TransformError;
pub use pipeline::transform;
pub use rotate::{rotate, rotate_into, Rotation};
pub use timing::{Stopwatch, TimingReport};
