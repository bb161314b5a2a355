use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegImgError {
    /// Represents a carrier whose magic bytes are neither `BM` nor `P6`
    #[error("Invalid file format: {}!", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Represents a header that could not be understood, for example a PPM with a non numeric width
    #[error("Image header is invalid: {0}")]
    InvalidImageHeader(String),

    /// Represents a carrier that ends before all announced pixel bytes were read
    #[error("Pixel data is truncated: expected {expected} bytes, but only {actual} are present")]
    TruncatedPixelData { expected: usize, actual: usize },

    /// Represents a message that does not fit into the LSB slots of a carrier.
    /// `required` is the smallest pixel buffer that would have been accepted.
    #[error("Message too long: needs {required} pixel bytes, {available} available")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a length prefix that points past the end of the pixel data.
    /// Usually the carrier simply contains no message.
    #[error(
        "Decoded message length {length} needs {required} pixel bytes, but only {available} are available"
    )]
    DecodeOutOfRange {
        length: u32,
        required: u64,
        available: usize,
    },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
