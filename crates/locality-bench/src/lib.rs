//! Benchmark profiles and utilities for the Locality grids.
//!
//! Provides synthetic images of fixed sizes so benchmarks and ad-hoc
//! measurements compare the representations on identical data:
//!
//! - [`SMALL`]: 256x256 (64K pixels), fits comfortably in cache
//! - [`REFERENCE`]: 1024x768 (~786K pixels), larger than a typical L2
//! - [`noise_image`]: deterministic pixel noise via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use locality_grid::{Grid, GridMethods};
use locality_ppm::{Ppm, PpmError, Rgb};

/// Dimensions of a synthetic benchmark image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageProfile {
    /// Short name used in benchmark ids.
    pub name: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageProfile {
    /// Number of pixels.
    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// 256x256 image.
pub const SMALL: ImageProfile = ImageProfile {
    name: "small",
    width: 256,
    height: 256,
};

/// 1024x768 image.
pub const REFERENCE: ImageProfile = ImageProfile {
    name: "reference",
    width: 1024,
    height: 768,
};

/// Deterministic noise pixel for `(column, row)` under `seed`.
pub fn noise_pixel(column: u32, row: u32, seed: u64) -> Rgb {
    let i = (u64::from(row) << 32) | u64::from(column);
    let h = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407));
    let h = h ^ (h >> 29);
    Rgb::new(
        (h & 0xff) as u16,
        ((h >> 8) & 0xff) as u16,
        ((h >> 16) & 0xff) as u16,
    )
}

/// Build a noise image with maxval 255 through `methods`.
pub fn noise_image<M: GridMethods<Rgb>>(
    methods: M,
    profile: ImageProfile,
    seed: u64,
) -> Result<Ppm<M::Grid>, PpmError> {
    let mut pixels = methods.create(profile.width, profile.height)?;
    pixels.map_default(|c, r, _, px| *px = noise_pixel(c as u32, r as u32, seed));
    Ppm::new(pixels, 255)
}

/// Encode the noise image of `profile` as a P6 byte stream.
pub fn noise_p6(profile: ImageProfile, seed: u64) -> Result<Vec<u8>, PpmError> {
    let image = noise_image(locality_grid::PLAIN, profile, seed)?;
    let mut out = Vec::new();
    locality_ppm::write(&mut out, &image)?;
    Ok(out)
}
