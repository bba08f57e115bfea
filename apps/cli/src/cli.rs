//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::logging::LogFormat;

/// Validate values against named rules: latitude, longitude, phone, zipcode,
/// routing, countrycode and uuid.
#[derive(Parser, Debug)]
#[command(name = "commonval", version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log output format; overrides the configuration file.
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a value against a `|`-separated rule string.
    Check(CheckArgs),

    /// List registered rule names and aliases.
    Rules,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Rules to apply, e.g. `zipcode` or `routing|countrycode:iso3`.
    pub rules: String,

    /// Value to check. Taken as text unless `--json` is given.
    pub value: String,

    /// Parse VALUE as a JSON literal (`122100024`, `null`, `"text"`).
    #[arg(long)]
    pub json: bool,
}
