//! PPM (P6, binary) container codec
//!
//! The header is a sequence of whitespace separated ascii tokens: magic, width, height and
//! the maximum channel value. Exactly one whitespace byte separates it from the pixel data.
//! The whitespace layout of the file is not kept, on write the header is rebuilt from the
//! parsed values.

use std::io::{BufRead, Write};

use log::debug;

use super::{pixel_bytes, read_error, read_pixels, Container};
use crate::error::StegImgError;
use crate::result::Result;

const MAGIC: &str = "P6";
const MAX_TOKEN_LEN: usize = 16;

/// Parses the ascii header and reads `width * height * 3` pixel bytes.
pub fn read<R: BufRead>(mut reader: R) -> Result<Container> {
    let magic = token(&mut reader, "magic number")?;
    if magic != MAGIC {
        return Err(StegImgError::InvalidImageHeader(format!(
            "expected magic number {MAGIC}, got {magic:?}"
        )));
    }
    let width = number(&mut reader, "width")?;
    let height = number(&mut reader, "height")?;
    let max_val = number(&mut reader, "max value")?;

    if width == 0 || height == 0 {
        return Err(StegImgError::InvalidImageHeader(format!(
            "PPM dimensions must be positive, got {width}x{height}"
        )));
    }
    // one byte per channel only
    if !(1..=255).contains(&max_val) {
        return Err(StegImgError::InvalidImageHeader(format!(
            "unsupported PPM max value {max_val}"
        )));
    }

    match peek(&mut reader)? {
        Some(b) if b.is_ascii_whitespace() => reader.consume(1),
        _ => {
            return Err(StegImgError::InvalidImageHeader(
                "missing whitespace between PPM header and pixel data".to_string(),
            ))
        }
    }

    let expected = pixel_bytes(width, height)?;
    debug!("PPM {width}x{height} max value {max_val}, reading {expected} pixel bytes");
    // allow the read to ask for one byte more than there is at the end of the file
    let (pixels, trailer) = read_pixels(&mut reader, expected, 1)?;

    Ok(Container {
        header: header_bytes(width, height, max_val),
        width,
        height,
        max_val: Some(max_val),
        pixels,
        trailer,
    })
}

/// Rebuilds the header as `P6\n<width>\n<height>\n<max value>`, without a trailing separator.
pub fn header_bytes(width: u32, height: u32, max_val: u32) -> Vec<u8> {
    format!("{MAGIC}\n{width}\n{height}\n{max_val}").into_bytes()
}

/// Emits the rebuilt header, one `\n` separator, pixels and trailer.
pub fn write<W: Write>(mut writer: W, container: &Container) -> std::io::Result<()> {
    writer.write_all(&container.header)?;
    writer.write_all(b"\n")?;
    writer.write_all(&container.pixels)?;
    writer.write_all(&container.trailer)?;
    writer.flush()
}

fn peek<R: BufRead>(reader: &mut R) -> Result<Option<u8>> {
    Ok(reader.fill_buf().map_err(read_error)?.first().copied())
}

fn skip_whitespace_and_comments<R: BufRead>(reader: &mut R) -> Result<()> {
    loop {
        match peek(reader)? {
            Some(b) if b.is_ascii_whitespace() => reader.consume(1),
            Some(b'#') => {
                let mut comment = Vec::new();
                reader
                    .read_until(b'\n', &mut comment)
                    .map_err(read_error)?;
            }
            _ => return Ok(()),
        }
    }
}

fn token<R: BufRead>(reader: &mut R, what: &str) -> Result<String> {
    skip_whitespace_and_comments(reader)?;

    let mut buf = Vec::new();
    while let Some(b) = peek(reader)? {
        if b.is_ascii_whitespace() {
            break;
        }
        if buf.len() == MAX_TOKEN_LEN {
            return Err(StegImgError::InvalidImageHeader(format!(
                "PPM {what} is too long"
            )));
        }
        buf.push(b);
        reader.consume(1);
    }

    if buf.is_empty() {
        return Err(StegImgError::InvalidImageHeader(format!(
            "PPM {what} is missing"
        )));
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn number<R: BufRead>(reader: &mut R, what: &str) -> Result<u32> {
    let t = token(reader, what)?;
    t.parse().map_err(|_| {
        StegImgError::InvalidImageHeader(format!("PPM {what} is not a number: {t:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ppm(header: &[u8], pixels: usize) -> Vec<u8> {
        let mut file = header.to_vec();
        file.extend((0..pixels).map(|i| i as u8));
        file
    }

    #[test]
    fn should_parse_header_and_pixels() {
        let file = ppm(b"P6\n2 2\n255\n", 12);

        let c = read(&file[..]).expect("Cannot read PPM");
        assert_eq!((c.width, c.height, c.max_val), (2, 2, Some(255)));
        assert_eq!(c.pixels, (0..12).collect::<Vec<u8>>());
        assert!(c.trailer.is_empty());
    }

    #[test]
    fn should_write_a_header_that_parses_to_the_same_values() {
        let file = ppm(b"P6\n2 2\n255\n", 12);
        let c = read(&file[..]).unwrap();
        assert_eq!(c.header, b"P6\n2\n2\n255".to_vec());

        let mut out = Vec::new();
        write(&mut out, &c).unwrap();
        let again = read(&out[..]).expect("Written PPM is not parseable");
        assert_eq!((again.width, again.height, again.max_val), (2, 2, Some(255)));
        assert_eq!(again.pixels, c.pixels);
    }

    #[test]
    fn should_skip_comments_between_tokens() {
        let file = ppm(b"P6\n# made by hand\n1 1 # tiny\n255\n", 3);

        let c = read(&file[..]).unwrap();
        assert_eq!((c.width, c.height), (1, 1));
        assert_eq!(c.pixels, vec![0, 1, 2]);
    }

    #[test]
    fn should_consume_exactly_one_separator_byte() {
        // the pixel data itself starts with a whitespace value (0x0a)
        let mut file = b"P6 1 1 255\n".to_vec();
        file.extend([0x0a, 0x20, 0x09]);

        let c = read(&file[..]).unwrap();
        assert_eq!(c.pixels, vec![0x0a, 0x20, 0x09]);
    }

    #[test]
    fn should_keep_trailing_bytes() {
        let file = ppm(b"P6\n1 1\n255\n", 5);

        let c = read(&file[..]).unwrap();
        assert_eq!(c.pixels, vec![0, 1, 2]);
        assert_eq!(c.trailer, vec![3, 4]);
    }

    #[test]
    fn should_reject_broken_headers() {
        let headers: [&[u8]; 6] = [
            b"P6\nabc 2\n255\n",
            b"P6\n2 2\n",
            b"P6\n0 2\n255\n",
            b"P6\n2 2\n65535\n",
            b"P3\n2 2\n255\n",
            b"P6\n2 2\n255",
        ];
        for header in headers {
            let result = read(header);
            assert!(
                matches!(result, Err(StegImgError::InvalidImageHeader(_))),
                "{:?} should be rejected, got {result:?}",
                String::from_utf8_lossy(header)
            );
        }
    }

    #[test]
    fn should_report_truncated_pixel_data() {
        let file = ppm(b"P6\n2 2\n255\n", 10);

        match read(&file[..]) {
            Err(StegImgError::TruncatedPixelData { expected, actual }) => {
                assert_eq!((expected, actual), (12, 10))
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
