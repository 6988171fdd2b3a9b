//! Logger setup.

use std::fs::File;

use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::cli::CliArgs;
use crate::error::CliError;

/// Install the global logger: a file logger with `--log-file`, stderr otherwise.
pub fn init(args: &CliArgs) -> Result<(), CliError> {
    let level = args.log_level();

    match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::io(path, source))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }

    Ok(())
}
