use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::{debug, error};

use super::format::ImageFormat;
use super::{bmp, capacity, lsb_codec, ppm, read_error, CodecOptions, Container, Persist};
use crate::error::StegImgError;
use crate::result::Result;

/// A BMP or PPM carrier image, parsed into a reconstructible header and a flat pixel buffer
#[derive(Debug, Clone)]
pub struct Image {
    filename: PathBuf,
    format: ImageFormat,
    file_size: u64,
    container: Container,
}

/// what `-i` shows about an image
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ImageInfo {
    pub filename: PathBuf,
    pub file_size: u64,
    pub width: u32,
    pub height: u32,
    pub magic: String,
}

impl Image {
    /// Sniffs the format of `path` and parses it.
    ///
    /// Fails with [`StegImgError::UnsupportedFormat`] when the file is neither BMP nor PPM.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ImageFormat::detect(path)?;
        Self::from_file_with_format(path, format)
    }

    /// parses `path` as the given format, without sniffing it again
    pub fn from_file_with_format(path: impl AsRef<Path>, format: ImageFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(read_error)?;
        let file_size = file.metadata().map_err(read_error)?.len();
        let reader = BufReader::new(file);

        let container = match format {
            ImageFormat::Bmp => bmp::read(reader)?,
            ImageFormat::Ppm => ppm::read(reader)?,
        };
        debug!(
            "read {format:?} {path:?}: {}x{}, {} pixel bytes, {} trailing bytes",
            container.width,
            container.height,
            container.pixels.len(),
            container.trailer.len()
        );

        Ok(Self {
            filename: path.to_path_buf(),
            format,
            file_size,
            container,
        })
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// size of the file on disk when it was read
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn width(&self) -> u32 {
        self.container.width
    }

    pub fn height(&self) -> u32 {
        self.container.height
    }

    pub fn ppm_max_val(&self) -> Option<u32> {
        self.container.max_val
    }

    pub fn header(&self) -> &[u8] {
        &self.container.header
    }

    pub fn pixels(&self) -> &[u8] {
        &self.container.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.container.pixels
    }

    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            filename: self.filename.clone(),
            file_size: self.file_size,
            width: self.width(),
            height: self.height(),
            magic: String::from_utf8_lossy(&self.format.magic()).into_owned(),
        }
    }

    /// checks `message_len` against the pixel buffer as configured by `opts`
    pub fn can_hide(&self, message_len: usize, opts: &CodecOptions) -> bool {
        capacity::fits(self.pixels().len(), message_len, opts.capacity)
    }

    /// like [`Image::can_hide`], failing with [`StegImgError::CapacityExceeded`]
    pub fn ensure_can_hide(&self, message_len: usize, opts: &CodecOptions) -> Result<()> {
        capacity::ensure_fits(self.pixels().len(), message_len, opts.capacity)
    }

    /// Hides `message` in the pixel buffer. Only the pixels change, nothing is written to disk.
    pub fn hide_message(&mut self, message: &[u8], opts: &CodecOptions) -> Result<&mut Self> {
        self.ensure_can_hide(message.len(), opts)?;
        lsb_codec::hide(self.pixels_mut(), message)?;
        Ok(self)
    }

    pub fn unveil_message(&self) -> Result<Vec<u8>> {
        lsb_codec::unveil(self.pixels())
    }

    /// writes header, pixels and trailer in the layout of the image format
    pub fn save_to_writer<W: std::io::Write>(&self, writer: W) -> std::io::Result<()> {
        match self.format {
            ImageFormat::Bmp => bmp::write(writer, &self.container),
            ImageFormat::Ppm => ppm::write(writer, &self.container),
        }
    }

    /// overwrites the file the image was read from
    pub fn save(&mut self) -> Result<()> {
        let target = self.filename.clone();
        self.save_as(&target)
    }
}

impl Persist for Image {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegImgError::WriteError { source: e }
        })?;
        self.save_to_writer(BufWriter::new(f)).map_err(|e| {
            error!("Error saving image {file:?}: {e}");
            StegImgError::WriteError { source: e }
        })?;
        if let Ok(meta) = fs::metadata(file) {
            self.file_size = meta.len();
        }
        Ok(())
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "filename:\t{}", self.filename.display())?;
        writeln!(f, "filesize:\t{} bytes", self.file_size)?;
        writeln!(f, "width:\t\t{} pixels", self.width)?;
        writeln!(f, "height:\t\t{} pixels", self.height)?;
        writeln!(f, "magic num:\t{}", self.magic)
    }
}
