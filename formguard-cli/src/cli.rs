//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Validate form field values against their rules.
#[derive(Debug, Parser)]
#[command(name = "formguard", version)]
pub struct CliArgs {
    /// Form descriptor (JSON)
    pub descriptor: PathBuf,

    /// Set a field value before submitting, as NAME=VALUE
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Evaluate unknown rule names with the `required` rule instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Print the resulting form state as JSON
    #[arg(long)]
    pub json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Parse a `NAME=VALUE` pair. The value may be empty or contain `=`.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("email=a@b.co"),
            Ok(("email".to_string(), "a@b.co".to_string()))
        );
        assert_eq!(
            parse_assignment("name="),
            Ok(("name".to_string(), String::new()))
        );
        assert_eq!(
            parse_assignment("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_parse_args() {
        let args = CliArgs::try_parse_from([
            "formguard",
            "form.json",
            "--set",
            "name=Ann",
            "-s",
            "email=",
            "-vv",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.set.len(), 2);
        assert_eq!(args.set[1], ("email".to_string(), String::new()));
        assert_eq!(args.log_level(), LevelFilter::Debug);
        assert!(args.json);
        assert!(!args.lenient);
    }
}
