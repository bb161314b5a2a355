use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use stegimg_core::{CapacityPolicy, CodecOptions};

const AFTER_HELP: &str = "Valid file formats: .ppm .bmp
Remember to put the message in \"quotation marks\" for proper handling";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
#[command(disable_help_flag = true)]
#[command(group(ArgGroup::new("mode").args(["help", "info", "decode", "check", "encode"])))]
pub struct CliArgs {
    /// Display this help message
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Display information about file
    #[arg(short = 'i', value_name = "filepath")]
    pub info: Option<PathBuf>,

    /// Decode message from file
    #[arg(short = 'd', value_name = "filepath")]
    pub decode: Option<PathBuf>,

    /// Check if message can be encoded
    #[arg(
        short = 'c',
        num_args = 2,
        value_names = ["filepath", "message"],
        allow_hyphen_values = true
    )]
    pub check: Option<Vec<String>>,

    /// Encode message into file, the file is overwritten
    #[arg(
        short = 'e',
        num_args = 2,
        value_names = ["filepath", "message"],
        allow_hyphen_values = true
    )]
    pub encode: Option<Vec<String>>,

    /// Only accept messages when every pixel byte they need is available
    #[arg(long = "strict-capacity")]
    pub strict_capacity: bool,
}

/// the one thing a single invocation does
#[derive(Debug, Eq, PartialEq)]
pub enum Mode {
    Help,
    Info(PathBuf),
    Decode(PathBuf),
    Check { media: PathBuf, message: String },
    Encode { media: PathBuf, message: String },
}

impl CliArgs {
    pub fn options(&self) -> CodecOptions {
        let policy = if self.strict_capacity {
            CapacityPolicy::Strict
        } else {
            CapacityPolicy::Compatible
        };
        CodecOptions::default().with_capacity_policy(policy)
    }

    pub fn mode(self) -> Mode {
        if self.help {
            Mode::Help
        } else if let Some(media) = self.info {
            Mode::Info(media)
        } else if let Some(media) = self.decode {
            Mode::Decode(media)
        } else if let Some(values) = self.check {
            let (media, message) = media_and_message(values);
            Mode::Check { media, message }
        } else if let Some(values) = self.encode {
            let (media, message) = media_and_message(values);
            Mode::Encode { media, message }
        } else {
            Mode::Help
        }
    }
}

/// clap makes sure there are exactly two values
fn media_and_message(mut values: Vec<String>) -> (PathBuf, String) {
    let message = values.pop().unwrap_or_default();
    let media = values.pop().unwrap_or_default();
    (PathBuf::from(media), message)
}
