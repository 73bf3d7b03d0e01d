//! Pixels and grid-backed images.

use locality_grid::Grid;

use crate::error::PpmError;

/// One RGB pixel. Samples are scaled by the image's maxval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red sample.
    pub red: u16,
    /// Green sample.
    pub green: u16,
    /// Blue sample.
    pub blue: u16,
}

impl Rgb {
    /// Build a pixel from its three samples.
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Largest of the three samples.
    pub fn max_sample(&self) -> u16 {
        self.red.max(self.green).max(self.blue)
    }
}

/// A pixmap whose pixels live in a grid of any representation.
///
/// Width and height are those of the grid. `maxval` is the value that
/// represents full intensity for every sample.
#[derive(Clone, Debug)]
pub struct Ppm<G> {
    maxval: u16,
    pixels: G,
}

impl<G: Grid<Rgb>> Ppm<G> {
    /// Wrap a pixel grid.
    ///
    /// Fails with [`PpmError::UnsupportedMaxval`] if `maxval` is zero.
    pub fn new(pixels: G, maxval: u16) -> Result<Self, PpmError> {
        if maxval == 0 {
            return Err(PpmError::UnsupportedMaxval { found: 0 });
        }
        Ok(Self { maxval, pixels })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Full-intensity sample value.
    pub fn maxval(&self) -> u16 {
        self.maxval
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.shape().cell_count()
    }

    /// The pixel grid.
    pub fn pixels(&self) -> &G {
        &self.pixels
    }

    /// The pixel grid, mutably.
    pub fn pixels_mut(&mut self) -> &mut G {
        &mut self.pixels
    }

    /// Replace the pixel grid, e.g. with a transformed copy. The new grid
    /// may have different dimensions.
    pub fn replace_pixels(&mut self, pixels: G) -> G {
        std::mem::replace(&mut self.pixels, pixels)
    }

    /// Unwrap the pixel grid.
    pub fn into_pixels(self) -> G {
        self.pixels
    }
}
