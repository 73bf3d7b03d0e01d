//! PPM writer.

use std::io::Write;

use locality_grid::Grid;
use log::debug;

use crate::codec::{encode_pixel, sample_bytes, write_header};
use crate::error::PpmError;
use crate::image::{Ppm, Rgb};

/// Write `image` as a binary (P6) PPM with the image's maxval.
///
/// Pixels are read through [`Grid::get`] one row at a time. The writer is
/// flushed before returning.
///
/// # Errors
///
/// [`PpmError::SampleOutOfRange`] if a pixel has a sample above the
/// image's maxval; rows before the offending one have been written.
/// [`PpmError::Io`] if the writer fails.
pub fn write<W, G>(mut writer: W, image: &Ppm<G>) -> Result<(), PpmError>
where
    W: Write,
    G: Grid<Rgb>,
{
    let (width, height, maxval) = (image.width(), image.height(), image.maxval());
    debug!("writing P6 PPM {width}x{height} maxval {maxval}");
    write_header(&mut writer, width, height, maxval)?;
    let mut line = Vec::with_capacity(width as usize * 3 * sample_bytes(maxval));
    for row in 0..height as i32 {
        line.clear();
        for column in 0..width as i32 {
            encode_pixel(image.pixels().get(column, row)?, maxval, &mut line)?;
        }
        writer.write_all(&line)?;
    }
    writer.flush()?;
    Ok(())
}
