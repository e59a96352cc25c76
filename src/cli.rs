//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `clickup-lookup`.
#[derive(Debug, Parser)]
#[command(
    name = "clickup-lookup",
    version,
    about = "Resolve and map ClickUp custom field options"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run pipeline items from a JSON file (an array of item parameters).
    Run {
        /// Path to the items file.
        #[arg(long)]
        params: PathBuf,
        /// Turn failing items into error records instead of stopping.
        #[arg(long)]
        continue_on_fail: bool,
    },
    /// List the choice fields of a list as reference tokens.
    Fields {
        /// List id.
        #[arg(long)]
        list: String,
    },
    /// List the options of one field.
    Options {
        /// List id.
        #[arg(long)]
        list: String,
        /// Field reference token (`fieldId|fieldType`).
        #[arg(long)]
        field: String,
    },
    /// List a team's custom task types.
    TaskTypes {
        /// Team id.
        #[arg(long)]
        team: String,
    },
    /// Check that the configured credentials are accepted.
    CheckAuth,
}
