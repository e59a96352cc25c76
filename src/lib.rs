//! Core library entry for the `clickup-lookup` CLI.
//!
//! The engine resolves lookup values against the options of ClickUp custom
//! fields and maps configured rules to custom field values. The ClickUp API
//! is reached only through [`ports::ClickUpApi`], so every operation can run
//! live, record to a cassette, or replay from one.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod field;
pub mod lookup;
pub mod mapping;
pub mod options;
pub mod pipeline;
pub mod ports;
pub mod record;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version are normal output on stdout.
            return err.print().map_err(|e| e.to_string());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
