use std::error::Error;
use std::process::ExitCode;

use clap::{error::ErrorKind, CommandFactory, Parser};
use stegimg_core::StegImgError;

mod cli;
mod commands;

use crate::cli::CliArgs;

pub type CliResult<T> = Result<T, StegImgError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let options = args.options();
    match commands::run(args.mode(), options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

pub fn print_help() -> CliResult<()> {
    CliArgs::command().print_help()?;
    Ok(())
}
