use std::path::Path;
use std::process::ExitCode;

use crate::CliResult;

pub fn run(media: &Path) -> CliResult<ExitCode> {
    let info = stegimg_core::commands::info(media)?;
    print!("{info}");
    Ok(ExitCode::SUCCESS)
}
