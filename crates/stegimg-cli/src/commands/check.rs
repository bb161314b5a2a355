use std::path::Path;
use std::process::ExitCode;

use log::warn;
use stegimg_core::media::capacity::required_pixel_bytes;
use stegimg_core::{CodecOptions, Image, StegImgError};

use crate::CliResult;

pub fn run(media: &Path, message: &str, options: CodecOptions) -> CliResult<ExitCode> {
    let image = Image::from_file(media)?;

    match image.ensure_can_hide(message.len(), &options) {
        Ok(()) => {
            if let Some(required) = encode_shortfall(&image, message.len()) {
                warn!(
                    "{media:?} passes the check, but encoding needs {required} pixel bytes and only {} are available",
                    image.pixels().len()
                );
            }
            println!("Message: \"{message}\" can be encoded!");
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ StegImgError::CapacityExceeded { .. }) => {
            eprintln!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

/// pixel bytes `-e` would need when the image has fewer than that
fn encode_shortfall(image: &Image, message_len: usize) -> Option<usize> {
    let required = required_pixel_bytes(message_len);
    (image.pixels().len() < required).then_some(required)
}
