use std::process::ExitCode;

use stegimg_core::CodecOptions;

use crate::cli::Mode;
use crate::CliResult;

pub mod check;
pub mod hide;
pub mod info;
pub mod unveil;

pub fn run(mode: Mode, options: CodecOptions) -> CliResult<ExitCode> {
    match mode {
        Mode::Help => {
            crate::print_help()?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Info(media) => info::run(&media),
        Mode::Decode(media) => unveil::run(&media),
        Mode::Check { media, message } => check::run(&media, &message, options),
        Mode::Encode { media, message } => hide::run(&media, &message, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stegimg_core::StegImgError;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn ppm_carrier(dir: &Path, side: usize) -> PathBuf {
        let media = dir.join("carrier.ppm");
        let mut file = format!("P6\n{side} {side}\n255\n").into_bytes();
        file.resize(file.len() + side * side * 3, 0x33);
        fs::write(&media, file).unwrap();
        media
    }

    fn check(media: &Path, message: &str) -> ExitCode {
        let mode = Mode::Check {
            media: media.to_path_buf(),
            message: message.to_string(),
        };
        run(mode, CodecOptions::default()).expect("Check failed")
    }

    #[test]
    fn check_exits_with_failure_when_the_message_does_not_fit() {
        let dir = TempDir::new().unwrap();
        // 12 pixel bytes, "a" needs more than 4 + 8
        let media = ppm_carrier(dir.path(), 2);
        let before = fs::read(&media).unwrap();

        assert_eq!(check(&media, "a"), ExitCode::FAILURE);
        assert_eq!(fs::read(&media).unwrap(), before);
    }

    #[test]
    fn check_exits_with_success_when_the_message_fits() {
        let dir = TempDir::new().unwrap();
        // 48 pixel bytes, "ab" needs more than 4 + 16
        let media = ppm_carrier(dir.path(), 4);

        assert_eq!(check(&media, "ab"), ExitCode::SUCCESS);
    }

    #[test]
    fn encode_then_decode_through_the_cli_modes() {
        let dir = TempDir::new().unwrap();
        let media = dir.path().join("carrier.ppm");
        let mut file = b"P6\n12 12\n255\n".to_vec();
        file.resize(file.len() + 12 * 12 * 3, 0x33);
        fs::write(&media, file).unwrap();

        let encode = Mode::Encode {
            media: media.clone(),
            message: "cli".to_string(),
        };
        run(encode, CodecOptions::default()).expect("Encoding failed");

        assert_eq!(stegimg_core::commands::unveil(&media).unwrap(), b"cli");
        run(Mode::Decode(media.clone()), CodecOptions::default()).expect("Decoding failed");
        run(Mode::Info(media), CodecOptions::default()).expect("Info failed");
    }

    #[test]
    fn unsupported_files_are_errors() {
        let dir = TempDir::new().unwrap();
        let media = dir.path().join("carrier.txt");
        fs::write(&media, "hello").unwrap();

        let result = run(
            Mode::Check {
                media,
                message: "x".to_string(),
            },
            CodecOptions::default(),
        );
        assert!(matches!(result, Err(StegImgError::UnsupportedFormat { .. })));
    }
}
