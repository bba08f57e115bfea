//! Subcommand handlers.
//!
//! Handlers write results to stdout and return the process exit code.
//! Configuration problems are returned as errors.

use std::process::ExitCode;

use anyhow::Context;
use commonval_validator::registry::RuleSet;
use serde_json::Value;
use tracing::info;

use crate::cli::CheckArgs;

/// Every rule passed.
pub const EXIT_PASS: u8 = 0;
/// At least one rule failed.
pub const EXIT_FAIL: u8 = 1;
/// The rules or configuration could not be applied.
pub const EXIT_CONFIG: u8 = 2;

/// `commonval check`.
pub fn check(rules: &RuleSet, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let value = if args.json {
        serde_json::from_str(&args.value)
            .with_context(|| format!("VALUE is not a JSON literal: {}", args.value))?
    } else {
        Value::String(args.value.clone())
    };

    let results = rules.evaluate(&args.rules, &value)?;

    let mut failed = 0_usize;
    for result in &results {
        match &result.outcome {
            Ok(()) => println!("{}: pass", result.spec),
            Err(e) => {
                failed += 1;
                println!("{}: fail ({}) {}", result.spec, e.code, e.message);
            }
        }
    }
    info!(rules = results.len(), failed, "check finished");

    Ok(ExitCode::from(if failed == 0 { EXIT_PASS } else { EXIT_FAIL }))
}

/// `commonval rules`.
pub fn list(rules: &RuleSet) -> ExitCode {
    for (name, rule) in rules.entries() {
        if name == rule.name() {
            println!("{name}");
        } else {
            println!("{name} -> {rule}");
        }
    }
    ExitCode::from(EXIT_PASS)
}
