use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::debug;

use crate::error::StegImgError;
use crate::result::Result;

pub const BMP_MAGIC: [u8; 2] = *b"BM";
pub const PPM_MAGIC: [u8; 2] = *b"P6";

/// the container formats an [`Image`](crate::Image) can be read from and written to
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ImageFormat {
    Bmp,
    Ppm,
}

impl ImageFormat {
    /// classifies two leading magic bytes, `None` means the format is not supported
    pub fn from_magic(magic: [u8; 2]) -> Option<Self> {
        match magic {
            BMP_MAGIC => Some(Self::Bmp),
            PPM_MAGIC => Some(Self::Ppm),
            _ => None,
        }
    }

    /// Sniffs the first two bytes of `path`.
    ///
    /// The file is only opened for this one read and closed again,
    /// the container codecs re-open it and parse from offset 0.
    /// A file shorter than two bytes is classified as unsupported.
    pub fn sniff(path: &Path) -> Result<Option<Self>> {
        let mut file = File::open(path).map_err(|source| StegImgError::ReadError { source })?;
        let mut magic = [0u8; 2];
        match file.read_exact(&mut magic) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                debug!("{path:?} is shorter than the magic number");
                return Ok(None);
            }
            Err(source) => return Err(StegImgError::ReadError { source }),
        }

        let format = Self::from_magic(magic);
        debug!("sniffed {path:?}: magic {magic:02x?} -> {format:?}");
        Ok(format)
    }

    /// like [`ImageFormat::sniff`] but turns an unsupported classification into an error
    pub fn detect(path: &Path) -> Result<Self> {
        Self::sniff(path)?.ok_or_else(|| StegImgError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }

    pub fn magic(&self) -> [u8; 2] {
        match self {
            Self::Bmp => BMP_MAGIC,
            Self::Ppm => PPM_MAGIC,
        }
    }
}
