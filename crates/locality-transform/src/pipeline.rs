//! Read, rotate, write.

use std::io::{BufRead, Write};

use locality_grid::GridMethods;
use locality_ppm::Rgb;
use log::info;

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::rotate::rotate_into;
use crate::timing::{Stopwatch, TimingReport};

/// Run one transformation: read a PPM from `reader` into a grid built by
/// `methods`, rotate it as `config` says, and write the result to `writer`
/// as P6.
///
/// `methods` should be the table for `config.layout`; the order is checked
/// against it before anything is read. Only the rotation traversal is
/// timed, not decoding, allocation or encoding.
pub fn transform<M, R, W>(
    methods: M,
    config: &TransformConfig,
    reader: R,
    writer: W,
) -> Result<TimingReport, TransformError>
where
    M: GridMethods<Rgb>,
    R: BufRead,
    W: Write,
{
    let order = methods.check(config.order)?;
    let mut image = locality_ppm::read(reader, methods)?;
    let pixels = image.pixel_count();
    let (width, height) = config.rotation.output_dims(image.width(), image.height());
    let mut rotated = methods.create(width, height)?;

    let stopwatch = Stopwatch::start();
    rotate_into(image.pixels_mut(), &mut rotated, order, config.rotation)?;
    let elapsed = stopwatch.elapsed();

    info!(
        "rotated {pixels} pixels by {} ({} {order}) in {elapsed:?}",
        config.rotation,
        methods.layout()
    );
    image.replace_pixels(rotated);
    locality_ppm::write(writer, &image)?;
    Ok(TimingReport {
        filename: config.input.as_ref().map(|p| p.display().to_string()),
        rotation: config.rotation,
        pixels,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotate::Rotation;
    use locality_core::{GridError, Layout, MapOrder};
    use locality_grid::{BLOCKED, PLAIN};
    use locality_ppm::PpmError;
    use locality_test_utils::encode_p6;

    fn px(v: u8) -> Rgb {
        Rgb::new(v.into(), v.into(), v.into())
    }

    fn two_by_three() -> Vec<u8> {
        let rows: Vec<Vec<Rgb>> = (0..3u8)
            .map(|r| (0..2u8).map(|c| px(r * 2 + c)).collect())
            .collect();
        encode_p6(&rows, 255)
    }

    fn config(layout: Layout, order: MapOrder, rotation: Rotation) -> TransformConfig {
        TransformConfig {
            layout,
            order,
            rotation,
            ..TransformConfig::default()
        }
    }

    #[test_log::test]
    fn rotates_through_either_layout() {
        let expected = encode_p6(
            &[
                vec![px(4), px(2), px(0)],
                vec![px(5), px(3), px(1)],
            ],
            255,
        );
        let mut plain_out = Vec::new();
        let cfg = config(Layout::Plain, MapOrder::ColumnMajor, Rotation::Ninety);
        let report = transform(PLAIN, &cfg, &two_by_three()[..], &mut plain_out).unwrap();
        assert_eq!(plain_out, expected);
        assert_eq!(report.pixels, 6);
        assert_eq!(report.rotation, Rotation::Ninety);
        assert_eq!(report.filename, None);

        let mut blocked_out = Vec::new();
        let cfg = config(Layout::Blocked, MapOrder::BlockMajor, Rotation::Ninety);
        transform(BLOCKED, &cfg, &two_by_three()[..], &mut blocked_out).unwrap();
        assert_eq!(blocked_out, expected);
    }

    #[test]
    fn identity_copies_the_image() {
        let input = two_by_three();
        let mut out = Vec::new();
        transform(PLAIN, &TransformConfig::default(), &input[..], &mut out).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn unsupported_order_fails_before_reading() {
        let cfg = config(Layout::Blocked, MapOrder::ColumnMajor, Rotation::Zero);
        let err = transform(BLOCKED, &cfg, &b""[..], Vec::new()).unwrap_err();
        assert!(matches!(err, TransformError::Grid(GridError::UnsupportedOrder { .. })));
    }

    #[test]
    fn decode_errors_pass_through() {
        let cfg = TransformConfig::default();
        let err = transform(PLAIN, &cfg, &b"P7"[..], Vec::new()).unwrap_err();
        assert!(matches!(err, TransformError::Ppm(PpmError::BadMagic { .. })));
    }
}
