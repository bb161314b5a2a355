use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use stegimg_core::StegImgError;

use crate::CliResult;

/// writes the message bytes as they are, no charset is assumed
pub fn run(media: &Path) -> CliResult<ExitCode> {
    let message = stegimg_core::commands::unveil(media)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&message)
        .and_then(|_| stdout.flush())
        .map_err(|source| StegImgError::WriteError { source })?;

    Ok(ExitCode::SUCCESS)
}
