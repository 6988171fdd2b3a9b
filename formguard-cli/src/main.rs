mod cli;
mod error;
mod logging;
mod output;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use formguard::{EventKind, Form, FormDescriptor, FormEvent, UnknownRulePolicy};
use log::debug;

use crate::cli::CliArgs;
use crate::error::CliError;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(&args) {
        eprintln!("error: {e}");
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Load the form, apply `--set` values, submit. Returns form validity.
fn run(args: &CliArgs) -> Result<bool, CliError> {
    let text = fs::read_to_string(&args.descriptor)
        .map_err(|source| CliError::io(&args.descriptor, source))?;
    let mut descriptor = FormDescriptor::from_json(&text)?;
    if args.lenient {
        descriptor.config.unknown_rules = UnknownRulePolicy::FallbackRequired;
    }

    let mut form = Form::from_descriptor(descriptor)?;
    form.subscribe(EventKind::ValidationFailed, |event| {
        if let FormEvent::ValidationFailed { field, message } = event {
            debug!("[{}] {}", field, message);
        }
    });

    for (field, value) in &args.set {
        form.change(field, value.as_str())?;
    }
    let report = form.submit()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(form.state())?);
    } else {
        print!("{}", output::render(form.state()));
    }

    Ok(report.valid)
}
