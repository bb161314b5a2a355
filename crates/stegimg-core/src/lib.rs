//! # stegimg core API
//!
//! Hides a text message in the least significant bits of uncompressed 24 bit BMP
//! and binary PPM (P6) images.
//!
//! - [`ImageFormat`] sniffs the two magic bytes of a file
//! - [`Image`] parses a file into a reconstructible header and a flat pixel buffer and writes it back
//! - [`media::capacity`] tells whether a message fits
//! - [`media::lsb_codec`] hides and unveils the length prefixed message
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust,no_run
//! stegimg_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier.bmp")
//!     .with_output("carrier-with-secret.bmp") // leave this out to overwrite the carrier
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust,no_run
//! let secret = stegimg_core::api::unveil::prepare()
//!     .from_secret_file("carrier-with-secret.bmp")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(secret, b"Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::StegImgError;
pub use crate::media::{CapacityPolicy, CodecOptions, Image, ImageFormat, ImageInfo, Persist};
pub use crate::result::Result;
