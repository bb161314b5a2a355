use std::path::Path;
use std::process::ExitCode;

use log::info;
use stegimg_core::CodecOptions;

use crate::CliResult;

pub fn run(media: &Path, message: &str, options: CodecOptions) -> CliResult<ExitCode> {
    info!("hiding {} bytes in {media:?} with {options:?}", message.len());
    stegimg_core::commands::hide(media, message.as_bytes(), options)?;

    println!("message: \"{message}\" was encoded successfully!");
    Ok(ExitCode::SUCCESS)
}
