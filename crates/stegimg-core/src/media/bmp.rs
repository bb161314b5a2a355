//! BMP container codec
//!
//! Only uncompressed 24 bit bitmaps with the plain 54 byte file + DIB header are understood.
//! Any other variant (palette, different DIB header size, bit depth) is parsed as if it was
//! one of those, which lands garbage in the pixel buffer but never touches the header bytes.

use std::io::{Cursor, ErrorKind, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;

use super::{pixel_bytes, read_pixels, Container};
use crate::error::StegImgError;
use crate::result::Result;

/// file header (14 bytes) plus BITMAPINFOHEADER (40 bytes)
pub const HEADER_SIZE: usize = 54;
const WIDTH_OFFSET: u64 = 18;
const HEIGHT_OFFSET: u64 = 22;

/// Reads the 54 header bytes verbatim and the `width * height * 3` pixel bytes that follow.
pub fn read<R: Read>(mut reader: R) -> Result<Container> {
    let mut header = vec![0u8; HEADER_SIZE];
    reader.read_exact(&mut header).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => StegImgError::InvalidImageHeader(format!(
            "BMP header needs {HEADER_SIZE} bytes"
        )),
        _ => StegImgError::ReadError { source: e },
    })?;

    let (width, height) = dimensions(&header)?;
    let expected = pixel_bytes(width, height)?;
    debug!("BMP {width}x{height}, reading {expected} pixel bytes");
    let (pixels, trailer) = read_pixels(&mut reader, expected, 0)?;

    Ok(Container {
        header,
        width,
        height,
        max_val: None,
        pixels,
        trailer,
    })
}

/// Emits header, pixels and trailer as they are. LSB changes never alter the
/// pixel buffer length, so none of the header fields need to be re-derived.
pub fn write<W: Write>(mut writer: W, container: &Container) -> std::io::Result<()> {
    writer.write_all(&container.header)?;
    writer.write_all(&container.pixels)?;
    writer.write_all(&container.trailer)?;
    writer.flush()
}

/// width and height are signed little endian integers at offset 18 and 22
fn dimensions(header: &[u8]) -> Result<(u32, u32)> {
    let mut cursor = Cursor::new(header);
    cursor.set_position(WIDTH_OFFSET);
    let width = cursor.read_i32::<LittleEndian>()?;
    cursor.set_position(HEIGHT_OFFSET);
    let height = cursor.read_i32::<LittleEndian>()?;

    if width <= 0 {
        return Err(StegImgError::InvalidImageHeader(format!(
            "BMP width must be positive, got {width}"
        )));
    }
    if height == 0 {
        return Err(StegImgError::InvalidImageHeader(
            "BMP height must not be 0".to_string(),
        ));
    }

    // a negative height marks a top-down bitmap
    Ok((width.unsigned_abs(), height.unsigned_abs()))
}
