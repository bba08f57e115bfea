//! Layered configuration: defaults, then an optional TOML file, then
//! `COMMONVAL_*` environment variables.
//!
//! ```toml
//! log_format = "json"
//!
//! [rules]
//! disabled = ["phone"]
//!
//! [rules.aliases]
//! aba = "routing"
//! ```
//!
//! Nested keys use `__` in the environment: `COMMONVAL_RULES__DISABLED=[phone]`.
//! Other `COMMONVAL_*` variables are ignored.

use std::path::Path;

use anyhow::{Context, ensure};
use commonval_validator::config::RuleSetConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COMMONVAL_";

/// Top-level keys read from the environment.
const ENV_KEYS: [&str; 2] = ["log_format", "rules"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub rules: RuleSetConfig,
}

impl CliConfig {
    /// The provider stack, lowest precedence first.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__").filter(|key| {
            let top = key.as_str().split('.').next().unwrap_or_default();
            ENV_KEYS.iter().any(|k| top.eq_ignore_ascii_case(k))
        }))
    }

    /// Loads and extracts the configuration.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            ensure!(path.is_file(), "config file not found: {}", path.display());
        }
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonval_validator::rule::Rule;
    use figment::Jail;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_| {
            assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "commonval.toml",
                r#"
                    log_format = "text"

                    [rules]
                    disabled = ["phone"]

                    [rules.aliases]
                    aba = "routing"
                "#,
            )?;
            jail.set_env("COMMONVAL_LOG_FORMAT", "json");

            let config = CliConfig::load(Some(Path::new("commonval.toml"))).unwrap();
            assert_eq!(config.log_format, LogFormat::Json);
            assert!(config.rules.disabled.contains(&Rule::Phone));
            assert_eq!(config.rules.aliases.get("aba"), Some(&Rule::Routing));
            Ok(())
        });
    }

    #[test]
    fn unrelated_env_vars_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("COMMONVAL_UNRELATED", "1");
            jail.set_env("COMMONVAL_HOME", "/tmp");
            jail.set_env("COMMONVAL_RULES__DISABLED", "[phone]");
            jail.set_env("COMMONVAL_LOG_FORMAT", "json");

            let config = CliConfig::load(None).unwrap();
            assert_eq!(config.log_format, LogFormat::Json);
            assert!(config.rules.disabled.contains(&Rule::Phone));
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("commonval.toml", "colour = true")?;
            assert!(CliConfig::load(Some(Path::new("commonval.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn missing_file_rejected() {
        Jail::expect_with(|_| {
            assert!(CliConfig::load(Some(Path::new("absent.toml"))).is_err());
            Ok(())
        });
    }
}
