//! PPM reader.
//!
//! [`read`] decodes a P3 or P6 stream into a grid built through any
//! [`GridMethods`] table. Pixels are stored through [`Grid::at`] in file
//! order, so the reader works the same for every representation.

use std::io::{self, BufRead};

use locality_grid::{Grid, GridMethods};
use log::debug;

use crate::codec::{decode_pixel, read_ascii_pixel, read_header, Format, Header};
use crate::error::PpmError;
use crate::image::{Ppm, Rgb};

/// Read one PPM image, storing its pixels in a grid built by `methods`.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>` or a locked stdin.
///
/// # Errors
///
/// [`PpmError::BadMagic`], [`PpmError::BadHeader`] and
/// [`PpmError::UnsupportedMaxval`] for a malformed header,
/// [`PpmError::Truncated`] if the raster is short,
/// [`PpmError::SampleOutOfRange`] for a sample above maxval, and
/// [`PpmError::Grid`] if the grid cannot be built.
pub fn read<R, M>(mut reader: R, methods: M) -> Result<Ppm<M::Grid>, PpmError>
where
    R: BufRead,
    M: GridMethods<Rgb>,
{
    let header = read_header(&mut reader)?;
    debug!(
        "reading {:?} PPM {}x{} maxval {} into {} grid",
        header.format,
        header.width,
        header.height,
        header.maxval,
        methods.layout()
    );
    let mut pixels = methods.create(header.width, header.height)?;
    match header.format {
        Format::Binary => read_binary_raster(&mut reader, &header, &mut pixels)?,
        Format::Ascii => read_ascii_raster(&mut reader, &header, &mut pixels)?,
    }
    Ppm::new(pixels, header.maxval)
}

fn read_binary_raster<G: Grid<Rgb>>(
    reader: &mut dyn BufRead,
    header: &Header,
    pixels: &mut G,
) -> Result<(), PpmError> {
    let pixel_bytes = 3 * header.sample_bytes();
    let mut line = vec![0u8; header.row_bytes()];
    for row in 0..header.height {
        reader.read_exact(&mut line).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => PpmError::Truncated { row },
            _ => PpmError::Io(e),
        })?;
        for (column, bytes) in line.chunks_exact(pixel_bytes).enumerate() {
            *pixels.at(column as i32, row as i32)? = decode_pixel(bytes, header.maxval)?;
        }
    }
    Ok(())
}

fn read_ascii_raster<G: Grid<Rgb>>(
    reader: &mut dyn BufRead,
    header: &Header,
    pixels: &mut G,
) -> Result<(), PpmError> {
    for row in 0..header.height {
        for column in 0..header.width {
            *pixels.at(column as i32, row as i32)? = read_ascii_pixel(reader, header.maxval, row)?;
        }
    }
    Ok(())
}
