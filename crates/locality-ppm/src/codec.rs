//! Header tokenizer and sample encode/decode for PPM.
//!
//! Header tokens are separated by ASCII whitespace; `#` starts a comment
//! that runs to the end of its line. The whitespace byte that ends the
//! last header token is consumed and nothing more, so a binary raster
//! may start with a byte that looks like whitespace.

use std::io::{BufRead, Write};

use crate::error::PpmError;
use crate::image::Rgb;

/// Raster encoding named by the magic number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `P3`: decimal samples separated by whitespace.
    Ascii,
    /// `P6`: binary samples.
    Binary,
}

/// A parsed PPM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Raster encoding.
    pub format: Format,
    /// Width in pixels, positive.
    pub width: u32,
    /// Height in pixels, positive.
    pub height: u32,
    /// Full-intensity value, in `1..=65535`.
    pub maxval: u16,
}

impl Header {
    /// Bytes per binary sample: 1 when `maxval < 256`, else 2.
    pub fn sample_bytes(&self) -> usize {
        sample_bytes(self.maxval)
    }

    /// Bytes in one binary raster row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * 3 * self.sample_bytes()
    }
}

/// Bytes per binary sample for `maxval`.
pub fn sample_bytes(maxval: u16) -> usize {
    if maxval < 256 {
        1
    } else {
        2
    }
}

// ── Tokenizer ───────────────────────────────────────────────────

fn peek(r: &mut dyn BufRead) -> Result<Option<u8>, PpmError> {
    Ok(r.fill_buf()?.first().copied())
}

fn skip_comment(r: &mut dyn BufRead) -> Result<(), PpmError> {
    while let Some(b) = peek(r)? {
        r.consume(1);
        if b == b'\n' || b == b'\r' {
            break;
        }
    }
    Ok(())
}

/// Read the next header token, or `None` at end of input.
///
/// Leading whitespace and comments are skipped. The single byte that
/// terminates the token is consumed.
pub fn next_token(r: &mut dyn BufRead) -> Result<Option<Vec<u8>>, PpmError> {
    loop {
        match peek(r)? {
            None => return Ok(None),
            Some(b'#') => skip_comment(r)?,
            Some(b) if b.is_ascii_whitespace() => r.consume(1),
            Some(_) => break,
        }
    }
    let mut token = Vec::new();
    while let Some(b) = peek(r)? {
        r.consume(1);
        if b.is_ascii_whitespace() {
            break;
        }
        if b == b'#' {
            skip_comment(r)?;
            break;
        }
        token.push(b);
    }
    Ok(Some(token))
}

/// Parse a header token as an unsigned decimal number.
fn parse_number(token: Option<Vec<u8>>, field: &str) -> Result<u64, PpmError> {
    let token = token.ok_or_else(|| PpmError::BadHeader {
        detail: format!("missing {field}"),
    })?;
    let bad = || PpmError::BadHeader {
        detail: format!("{field} {:?} is not a number", String::from_utf8_lossy(&token)),
    };
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(bad());
    }
    std::str::from_utf8(&token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(bad)
}

fn parse_dimension(r: &mut dyn BufRead, field: &str) -> Result<u32, PpmError> {
    let n = parse_number(next_token(r)?, field)?;
    if n == 0 {
        return Err(PpmError::BadHeader {
            detail: format!("{field} must be positive"),
        });
    }
    u32::try_from(n).map_err(|_| PpmError::BadHeader {
        detail: format!("{field} {n} is too large"),
    })
}

/// Read the magic number, dimensions and maxval.
pub fn read_header(r: &mut dyn BufRead) -> Result<Header, PpmError> {
    let magic = next_token(r)?.unwrap_or_default();
    let format = match magic.as_slice() {
        b"P3" => Format::Ascii,
        b"P6" => Format::Binary,
        other => {
            return Err(PpmError::BadMagic {
                found: String::from_utf8_lossy(other).into_owned(),
            })
        }
    };
    let width = parse_dimension(r, "width")?;
    let height = parse_dimension(r, "height")?;
    let maxval = parse_number(next_token(r)?, "maxval")?;
    let maxval = match u16::try_from(maxval) {
        Ok(m) if m > 0 => m,
        _ => return Err(PpmError::UnsupportedMaxval { found: maxval }),
    };
    Ok(Header {
        format,
        width,
        height,
        maxval,
    })
}

/// Write a `P6` header. A single newline separates it from the raster.
pub fn write_header(
    w: &mut dyn Write,
    width: u32,
    height: u32,
    maxval: u16,
) -> Result<(), PpmError> {
    write!(w, "P6\n{width} {height}\n{maxval}\n")?;
    Ok(())
}

// ── Samples ─────────────────────────────────────────────────────

fn check_sample(value: u32, maxval: u16) -> Result<u16, PpmError> {
    if value > u32::from(maxval) {
        return Err(PpmError::SampleOutOfRange { value, maxval });
    }
    Ok(value as u16)
}

/// Decode one binary pixel from `bytes` (3 or 6 bytes).
pub fn decode_pixel(bytes: &[u8], maxval: u16) -> Result<Rgb, PpmError> {
    let sample = |i: usize| -> Result<u16, PpmError> {
        let value = if maxval < 256 {
            u32::from(bytes[i])
        } else {
            u32::from(u16::from_be_bytes([bytes[2 * i], bytes[2 * i + 1]]))
        };
        check_sample(value, maxval)
    };
    Ok(Rgb::new(sample(0)?, sample(1)?, sample(2)?))
}

/// Append the binary encoding of `pixel` to `out`.
///
/// Fails with [`PpmError::SampleOutOfRange`], leaving `out` untouched, if
/// any sample exceeds `maxval`.
pub fn encode_pixel(pixel: &Rgb, maxval: u16, out: &mut Vec<u8>) -> Result<(), PpmError> {
    check_sample(u32::from(pixel.max_sample()), maxval)?;
    for s in [pixel.red, pixel.green, pixel.blue] {
        if maxval < 256 {
            out.push(s as u8);
        } else {
            out.extend_from_slice(&s.to_be_bytes());
        }
    }
    Ok(())
}

fn read_ascii_sample(r: &mut dyn BufRead, maxval: u16, row: u32) -> Result<u16, PpmError> {
    let token = next_token(r)?.ok_or(PpmError::Truncated { row })?;
    let value = parse_number(Some(token), "sample")?;
    check_sample(u32::try_from(value).unwrap_or(u32::MAX), maxval)
}

/// Read one ASCII pixel (three decimal tokens).
pub fn read_ascii_pixel(r: &mut dyn BufRead, maxval: u16, row: u32) -> Result<Rgb, PpmError> {
    let red = read_ascii_sample(r, maxval, row)?;
    let green = read_ascii_sample(r, maxval, row)?;
    let blue = read_ascii_sample(r, maxval, row)?;
    Ok(Rgb::new(red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens(input: &[u8]) -> Vec<String> {
        let mut r = Cursor::new(input);
        let mut out = Vec::new();
        while let Some(t) = next_token(&mut r).unwrap() {
            out.push(String::from_utf8(t).unwrap());
        }
        out
    }

    #[test]
    fn tokenizer_skips_comments() {
        assert_eq!(
            tokens(b"P6 # made by hand\n  4\t# w\n2\n255\n"),
            ["P6", "4", "2", "255"]
        );
        assert_eq!(tokens(b"P3\n1#trailing\n1 9"), ["P3", "1", "1", "9"]);
    }

    #[test]
    fn header_consumes_one_separator_byte() {
        let mut r = Cursor::new(&b"P6\n1 1\n255\n\n\x0b\x0c"[..]);
        let h = read_header(&mut r).unwrap();
        assert_eq!(
            h,
            Header {
                format: Format::Binary,
                width: 1,
                height: 1,
                maxval: 255,
            }
        );
        assert_eq!(r.position(), 11);
    }

    #[test]
    fn bad_magic() {
        let err = read_header(&mut Cursor::new(&b"P5 1 1 255\n"[..])).unwrap_err();
        assert!(matches!(err, PpmError::BadMagic { ref found } if found == "P5"));
        let err = read_header(&mut Cursor::new(&b""[..])).unwrap_err();
        assert!(matches!(err, PpmError::BadMagic { ref found } if found.is_empty()));
    }

    #[test]
    fn header_field_errors() {
        for input in [&b"P6 0 1 255 "[..], b"P6 1 x 255 ", b"P6 1 1", b"P6 -1 1 255 "] {
            let err = read_header(&mut Cursor::new(input)).unwrap_err();
            assert!(matches!(err, PpmError::BadHeader { .. }), "{err}");
        }
        for input in [&b"P6 1 1 0 "[..], b"P6 1 1 65536 "] {
            let err = read_header(&mut Cursor::new(input)).unwrap_err();
            assert!(matches!(err, PpmError::UnsupportedMaxval { .. }), "{err}");
        }
    }

    #[test]
    fn wide_samples_are_big_endian() {
        let px = Rgb::new(0x0102, 3, 0xfffe);
        let mut out = Vec::new();
        encode_pixel(&px, 65535, &mut out).unwrap();
        assert_eq!(out, [1, 2, 0, 3, 0xff, 0xfe]);
        assert_eq!(decode_pixel(&out, 65535).unwrap(), px);
        assert_eq!(sample_bytes(255), 1);
        assert_eq!(sample_bytes(256), 2);
    }

    #[test]
    fn samples_above_maxval_rejected() {
        let err = decode_pixel(&[1, 2, 16], 15).unwrap_err();
        assert!(matches!(
            err,
            PpmError::SampleOutOfRange {
                value: 16,
                maxval: 15,
            }
        ));
        let err = read_ascii_pixel(&mut Cursor::new(&b"1 2 300"[..]), 255, 0).unwrap_err();
        assert!(matches!(err, PpmError::SampleOutOfRange { value: 300, .. }));
    }

    #[test]
    fn encoding_rejects_samples_above_maxval() {
        let mut out = vec![9];
        let err = encode_pixel(&Rgb::new(1, 300, 2), 255, &mut out).unwrap_err();
        assert!(matches!(
            err,
            PpmError::SampleOutOfRange {
                value: 300,
                maxval: 255,
            }
        ));
        assert_eq!(out, [9]);
        encode_pixel(&Rgb::new(15, 0, 15), 15, &mut out).unwrap();
        assert_eq!(out, [9, 15, 0, 15]);
    }

    #[test]
    fn ascii_pixel_truncated() {
        let err = read_ascii_pixel(&mut Cursor::new(&b"1 2"[..]), 255, 4).unwrap_err();
        assert!(matches!(err, PpmError::Truncated { row: 4 }));
    }
}
