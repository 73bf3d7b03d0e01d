//! Grid and image fixtures.
//!
//! Grids are filled and read back through the [`Grid`] trait only, so the
//! same fixture works for every representation.

use locality_grid::{Grid, GridMethods};
use locality_ppm::{Ppm, Rgb};

/// Block sizes that exercise exact fits, ragged edges and blocks larger
/// than the grid.
pub const BLOCKSIZES: [u32; 5] = [1, 2, 3, 7, 64];

/// A `width x height` grid where cell `(c, r)` holds `r * width + c`.
pub fn sequential_grid<M: GridMethods<u32>>(methods: M, width: u32, height: u32) -> M::Grid {
    let mut grid = methods.create(width, height).unwrap();
    fill_sequential(&mut grid);
    grid
}

/// Like [`sequential_grid`] with an explicit block size.
pub fn sequential_grid_with_blocksize<M: GridMethods<u32>>(
    methods: M,
    width: u32,
    height: u32,
    blocksize: u32,
) -> M::Grid {
    let mut grid = methods
        .create_with_blocksize(width, height, blocksize)
        .unwrap();
    fill_sequential(&mut grid);
    grid
}

fn fill_sequential<G: Grid<u32>>(grid: &mut G) {
    let w = grid.width();
    for r in 0..grid.height() {
        for c in 0..w {
            *grid.at(c as i32, r as i32).unwrap() = r * w + c;
        }
    }
}

/// Build a grid from explicit rows. All rows must have the same length.
pub fn grid_from_rows<T, M>(methods: M, rows: &[&[T]]) -> M::Grid
where
    T: Clone,
    M: GridMethods<T>,
{
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let mut grid = methods.create(width, height).unwrap();
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as u32, width, "ragged fixture row {r}");
        for (c, v) in row.iter().enumerate() {
            *grid.at(c as i32, r as i32).unwrap() = v.clone();
        }
    }
    grid
}

/// Read a grid back as rows, top to bottom.
pub fn rows_of<T: Clone, G: Grid<T>>(grid: &G) -> Vec<Vec<T>> {
    (0..grid.height() as i32)
        .map(|r| {
            (0..grid.width() as i32)
                .map(|c| grid.get(c, r).unwrap().clone())
                .collect()
        })
        .collect()
}

/// Pixel at `(c, r)` of the gradient fixture.
pub fn gradient_pixel(c: u32, r: u32) -> Rgb {
    Rgb::new((c % 256) as u16, (r % 256) as u16, ((c + r) % 256) as u16)
}

/// A `width x height` image with maxval 255 whose pixels encode their
/// own coordinates (see [`gradient_pixel`]).
pub fn gradient_image<M: GridMethods<Rgb>>(methods: M, width: u32, height: u32) -> Ppm<M::Grid> {
    let mut pixels = methods.create(width, height).unwrap();
    for r in 0..height {
        for c in 0..width {
            *pixels.at(c as i32, r as i32).unwrap() = gradient_pixel(c, r);
        }
    }
    Ppm::new(pixels, 255).unwrap()
}

/// The pixels of an image as rows, top to bottom.
pub fn pixel_rows<G: Grid<Rgb>>(image: &Ppm<G>) -> Vec<Vec<Rgb>> {
    rows_of(image.pixels())
}

/// Hand-encode a P6 stream with 8-bit samples, independent of the writer.
pub fn encode_p6(rows: &[Vec<Rgb>], maxval: u8) -> Vec<u8> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    let mut out = format!("P6\n{width} {height}\n{maxval}\n").into_bytes();
    for px in rows.iter().flatten() {
        out.extend([px.red as u8, px.green as u8, px.blue as u8]);
    }
    out
}
