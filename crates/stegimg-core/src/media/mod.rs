pub mod bmp;
pub mod capacity;
pub mod codec_options;
pub mod format;
pub mod lsb_codec;
pub mod ppm;
mod types;

use std::io::Read;
use std::path::Path;

pub use codec_options::{CapacityPolicy, CodecOptions};
pub use format::ImageFormat;
pub use types::*;

use crate::error::StegImgError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}

/// the parsed parts of a container file, as produced by the format specific readers
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Container {
    /// bytes that rebuild everything in front of the pixel data
    pub header: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// PPM only
    pub max_val: Option<u32>,
    /// `width * height * 3` interleaved channel values in file order
    pub pixels: Vec<u8>,
    /// whatever follows the pixel buffer in the file
    pub trailer: Vec<u8>,
}

pub(crate) fn read_error(source: std::io::Error) -> StegImgError {
    StegImgError::ReadError { source }
}

/// number of pixel bytes for 3 channels per pixel
pub(crate) fn pixel_bytes(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| {
            StegImgError::InvalidImageHeader(format!("image of {width}x{height} is too large"))
        })
}

/// Reads `expected` pixel bytes and everything after them as trailer.
///
/// The first read asks for up to `slack` bytes more than needed, hitting the end
/// of the stream within that slack is fine.
pub(crate) fn read_pixels<R: Read>(
    reader: &mut R,
    expected: usize,
    slack: usize,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut pixels = Vec::new();
    reader
        .by_ref()
        .take(expected.saturating_add(slack) as u64)
        .read_to_end(&mut pixels)
        .map_err(read_error)?;

    if pixels.len() < expected {
        return Err(StegImgError::TruncatedPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut trailer = pixels.split_off(expected);
    reader.read_to_end(&mut trailer).map_err(read_error)?;

    Ok((pixels, trailer))
}
