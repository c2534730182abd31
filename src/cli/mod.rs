//! Command-line bootstrap
//!
//! Parses flags into a [`Config`], builds the application from it, runs it
//! once and hands the outcome back to `main`. Nothing here exits the process.

use crate::app::{Application, QuantumForge};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use tracing::debug;

/// Quantum forge command-line runner
#[derive(Parser, Debug)]
#[command(name = "quantumforge")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Enable verbose logging (also accepted as `-verbose`)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,
}

impl Cli {
    /// Resolved configuration for this invocation
    pub fn config(&self) -> Config {
        Config::new(self.verbose)
    }
}

/// Parse command-line arguments into a [`Config`]
///
/// The first item is the program name, as with `std::env::args_os()`.
/// A repeated flag keeps its last value.
pub fn parse_config<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = args.into_iter().enumerate().map(|(i, arg)| {
        let arg: OsString = arg.into();
        if i == 0 {
            arg
        } else {
            single_dash_verbose(arg)
        }
    });
    let cli = Cli::try_parse_from(args)?;
    Ok(cli.config())
}

/// Rewrite `-verbose[=<bool>]` to `--verbose[=<bool>]`
fn single_dash_verbose(arg: OsString) -> OsString {
    match arg.to_str() {
        Some(s) if s == "-verbose" || s.starts_with("-verbose=") => OsString::from(format!("-{}", s)),
        _ => arg,
    }
}

/// Construct the application once and run it once
pub fn launch<A, F>(config: Config, construct: F) -> Result<()>
where
    A: Application,
    F: FnOnce(Config) -> A,
{
    let app = construct(config);
    debug!(app = app.name(), verbose = config.verbose, "Application constructed");
    app.run()
}

/// Parse `args`, set up logging, then construct and run the application
///
/// A parse failure returns [`Error::Usage`] before `construct` is called.
pub fn run_from<I, T, A, F>(args: I, construct: F) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    A: Application,
    F: FnOnce(Config) -> A,
{
    let config = parse_config(args)?;
    logging::init(&config);
    launch(config, construct)
}

/// Run the CLI with the process arguments and the default application
pub fn run() -> Result<()> {
    run_from(std::env::args_os(), QuantumForge::new)
}

/// Diagnostic line `main` prints for a fatal run error
pub fn fatal_message(err: &Error) -> String {
    format!("Error: {}", err)
}
