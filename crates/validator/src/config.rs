//! Rule set configuration.
//!
//! Deserializes from any serde format. The CLI loads it from the `[rules]`
//! table of its TOML config:
//!
//! ```toml
//! [rules]
//! disabled = ["phone"]
//!
//! [rules.aliases]
//! zip = "zipcode"
//! aba = "routing"
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rule::{Rule, is_rule_name};

/// Which rules a [`RuleSet`](crate::registry::RuleSet) registers, and under
/// which extra names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSetConfig {
    /// Extra names for builtin rules.
    pub aliases: BTreeMap<String, Rule>,
    /// Builtin rules left out of the rule set.
    pub disabled: BTreeSet<Rule>,
}

impl RuleSetConfig {
    /// Adds an alias.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_alias(mut self, alias: impl Into<String>, rule: Rule) -> Self {
        self.aliases.insert(alias.into(), rule);
        self
    }

    /// Disables a builtin rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_disabled(mut self, rule: Rule) -> Self {
        self.disabled.insert(rule);
        self
    }

    /// Checks the aliases against the builtin names and the disabled set.
    ///
    /// An alias may reuse the name of a disabled builtin, but not of an
    /// enabled one.
    ///
    /// # Errors
    ///
    /// The first offending alias, as [`ConfigError::InvalidAliasName`],
    /// [`ConfigError::AliasShadowsRule`] or [`ConfigError::AliasTargetDisabled`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (alias, rule) in &self.aliases {
            if !is_rule_name(alias) {
                return Err(ConfigError::InvalidAliasName {
                    alias: alias.clone(),
                });
            }
            if alias
                .parse::<Rule>()
                .is_ok_and(|builtin| !self.disabled.contains(&builtin))
            {
                return Err(ConfigError::AliasShadowsRule {
                    alias: alias.clone(),
                });
            }
            if self.disabled.contains(rule) {
                return Err(ConfigError::AliasTargetDisabled {
                    alias: alias.clone(),
                    rule: rule.name().to_owned(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty_and_valid() {
        let config = RuleSetConfig::default();
        assert!(config.aliases.is_empty());
        assert!(config.disabled.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize() {
        let config: RuleSetConfig = serde_json::from_value(json!({
            "aliases": { "zip": "zipcode" },
            "disabled": ["phone"]
        }))
        .unwrap();
        assert_eq!(
            config,
            RuleSetConfig::default()
                .with_alias("zip", Rule::ZipCode)
                .with_disabled(Rule::Phone)
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields_and_rules() {
        assert!(serde_json::from_value::<RuleSetConfig>(json!({ "alias": {} })).is_err());
        assert!(serde_json::from_value::<RuleSetConfig>(json!({ "disabled": ["iban"] })).is_err());
    }

    #[test]
    fn test_alias_shadowing() {
        let config = RuleSetConfig::default().with_alias("phone", Rule::Uuid);
        assert_eq!(
            config.validate(),
            Err(ConfigError::AliasShadowsRule {
                alias: "phone".into()
            })
        );

        let config = config.with_disabled(Rule::Phone);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alias_names() {
        for bad in ["", "zip code", "zip|code", "zip:code"] {
            let config = RuleSetConfig::default().with_alias(bad, Rule::ZipCode);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidAliasName { .. })
            ));
        }
    }

    #[test]
    fn test_alias_to_disabled_rule() {
        let config = RuleSetConfig::default()
            .with_alias("aba", Rule::Routing)
            .with_disabled(Rule::Routing);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AliasTargetDisabled { .. })
        ));
    }
}
