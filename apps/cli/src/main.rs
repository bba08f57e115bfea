//! # commonval CLI entry point
//!
//! Parses arguments, loads layered configuration, installs logging and
//! dispatches to the subcommand handlers.

mod cli;
mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use commonval_validator::registry::RuleSet;

use crate::cli::{Cli, Command};
use crate::commands::EXIT_CONFIG;
use crate::config::CliConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = CliConfig::load(cli.config.as_deref())?;
    logging::init(cli.verbose, cli.log_format.unwrap_or(config.log_format))?;
    tracing::debug!(config = ?cli.config, "configuration loaded");

    let rules = RuleSet::from_config(&config.rules).context("invalid [rules] configuration")?;

    match &cli.command {
        Command::Check(args) => commands::check(&rules, args),
        Command::Rules => Ok(commands::list(&rules)),
    }
}
