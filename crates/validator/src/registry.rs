//! Name-to-rule registry.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::RuleSetConfig;
use crate::error::{ConfigError, RuleError};
use crate::foundation::ValidationError;
use crate::rule::{Rule, RuleSpec};

/// Result of applying one entry of a rule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The entry as written.
    pub spec: RuleSpec,
    /// The builtin rule it resolved to.
    pub rule: Rule,
    /// `Ok` on pass, the failure otherwise.
    pub outcome: Result<(), ValidationError>,
}

impl Evaluation {
    /// Whether the value passed this rule.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Registry mapping rule names and aliases to builtin [`Rule`]s.
///
/// Immutable once built, so it can be shared freely between threads.
///
/// ```
/// use commonval_validator::config::RuleSetConfig;
/// use commonval_validator::registry::RuleSet;
/// use commonval_validator::rule::Rule;
/// use serde_json::json;
///
/// let config = RuleSetConfig::default().with_alias("aba", Rule::Routing);
/// let rules = RuleSet::from_config(&config).unwrap();
///
/// assert_eq!(rules.check("aba", &json!("122100024"), &[]), Ok(true));
/// assert_eq!(rules.check_spec("zipcode|countrycode", &json!("12345")), Ok(false));
/// assert!(rules.check("iban", &json!("x"), &[]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    /// Every builtin rule under its own name, no aliases.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: Rule::ALL
                .into_iter()
                .map(|rule| (rule.name().to_owned(), rule))
                .collect(),
        }
    }

    /// Builds a rule set from configuration.
    ///
    /// # Errors
    ///
    /// Any error from [`RuleSetConfig::validate`].
    pub fn from_config(config: &RuleSetConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected rule set configuration");
            return Err(e);
        }

        let mut rules: BTreeMap<String, Rule> = Rule::ALL
            .into_iter()
            .filter(|rule| !config.disabled.contains(rule))
            .map(|rule| (rule.name().to_owned(), rule))
            .collect();
        for (alias, rule) in &config.aliases {
            rules.insert(alias.clone(), *rule);
        }

        info!(
            rules = rules.len(),
            aliases = config.aliases.len(),
            disabled = config.disabled.len(),
            "rule set built"
        );
        Ok(Self { rules })
    }

    /// Looks up a rule by name or alias.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownRule`] if nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Rule, ConfigError> {
        if let Some(&rule) = self.rules.get(name) {
            debug!(rule_name = name, rule = rule.name(), "resolved rule");
            Ok(rule)
        } else {
            warn!(rule_name = name, "unknown rule");
            Err(ConfigError::UnknownRule {
                name: name.to_owned(),
            })
        }
    }

    /// Registered names, builtins and aliases, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Registered names with the rule each resolves to.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), *rule))
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies the named rule to a value.
    ///
    /// # Errors
    ///
    /// As [`Rule::validate`], plus [`ConfigError::UnknownRule`].
    pub fn validate(&self, name: &str, value: &Value, params: &[String]) -> Result<(), RuleError> {
        self.resolve(name)?.validate(value, params)
    }

    /// Applies the named rule and reports pass or fail.
    ///
    /// # Errors
    ///
    /// Configuration errors only.
    pub fn check(&self, name: &str, value: &Value, params: &[String]) -> Result<bool, ConfigError> {
        self.resolve(name)?.check(value, params)
    }

    /// Applies a `|`-separated rule string; passes only if every rule passes.
    ///
    /// # Errors
    ///
    /// Configuration errors only. See [`RuleSet::evaluate`].
    pub fn check_spec(&self, rules: &str, value: &Value) -> Result<bool, ConfigError> {
        Ok(self.evaluate(rules, value)?.iter().all(Evaluation::passed))
    }

    /// Applies every rule in a `|`-separated rule string, in order.
    ///
    /// The whole string is parsed and every name and parameter list checked
    /// before any rule sees the value, so a configuration error is reported
    /// whatever the value.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedRuleSpec`], [`ConfigError::UnknownRule`] or
    /// [`ConfigError::UnknownCountryCodeType`].
    pub fn evaluate(&self, rules: &str, value: &Value) -> Result<Vec<Evaluation>, ConfigError> {
        let specs = RuleSpec::parse_list(rules).inspect_err(|e| {
            warn!(error = %e, "malformed rule string");
        })?;

        let resolved = specs
            .into_iter()
            .map(|spec| {
                let rule = self.resolve(&spec.name)?;
                rule.check_params(&spec.params).inspect_err(|e| {
                    warn!(rule = rule.name(), error = %e, "bad rule parameters");
                })?;
                Ok((spec, rule))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        resolved
            .into_iter()
            .map(|(spec, rule)| {
                let outcome = match rule.validate(value, &spec.params) {
                    Ok(()) => Ok(()),
                    Err(RuleError::Invalid(e)) => Err(e),
                    Err(RuleError::Config(e)) => return Err(e),
                };
                debug!(rule = rule.name(), passed = outcome.is_ok(), "evaluated rule");
                Ok(Evaluation {
                    spec,
                    rule,
                    outcome,
                })
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("count", &self.rules.len())
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
