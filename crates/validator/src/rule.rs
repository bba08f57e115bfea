//! Named rules and the host rule-string syntax.
//!
//! Hosts refer to validators by name, optionally with parameters:
//! `countrycode:iso3`. Several rules are joined with `|`:
//! `zipcode|countrycode:iso2`. [`Rule`] is the closed set of builtin rules
//! and [`RuleSpec`] is one parsed `name:param,...` entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, RuleError};
use crate::foundation::Validate;
use crate::validators::{
    CodeKind, country_code, latitude, longitude, phone, routing_number, uuid, zip_code,
};

// ============================================================================
// RULE
// ============================================================================

/// A builtin validation rule, addressable by name.
///
/// # Examples
///
/// ```
/// use commonval_validator::rule::Rule;
/// use serde_json::json;
///
/// let rule: Rule = "countrycode".parse().unwrap();
/// assert_eq!(rule.check(&json!("USA"), &["iso3".to_owned()]), Ok(true));
/// assert_eq!(rule.check(&json!("USA"), &[]), Ok(false));
/// assert!(rule.check(&json!("USA"), &["iso4".to_owned()]).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Numeric, within `[-90, 90]`.
    Latitude,
    /// Numeric, within `[-180, 180]`.
    Longitude,
    /// Ten-digit 3-3-4 phone number.
    Phone,
    /// ZIP or ZIP+4.
    ZipCode,
    /// ABA routing number with valid check digit.
    Routing,
    /// ISO 3166-1 code; parameter `iso2` (default) or `iso3`.
    CountryCode,
    /// Canonical hyphenated UUID.
    Uuid,
}

impl Rule {
    /// Every builtin rule, in registration order.
    pub const ALL: [Self; 7] = [
        Self::Latitude,
        Self::Longitude,
        Self::Phone,
        Self::ZipCode,
        Self::Routing,
        Self::CountryCode,
        Self::Uuid,
    ];

    /// The name hosts use to request this rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Phone => "phone",
            Self::ZipCode => "zipcode",
            Self::Routing => "routing",
            Self::CountryCode => "countrycode",
            Self::Uuid => "uuid",
        }
    }

    /// Checks that `params` are acceptable for this rule without looking at
    /// a value.
    ///
    /// Rules that take no parameters accept and ignore any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCountryCodeType`] for a country-code
    /// rule whose first parameter is not a known code type.
    pub fn check_params(self, params: &[String]) -> Result<(), ConfigError> {
        match self {
            Self::CountryCode => CodeKind::from_params(params).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Applies the rule to a host value.
    ///
    /// # Errors
    ///
    /// [`RuleError::Invalid`] when the value fails the rule, and
    /// [`RuleError::Config`] when the parameters are unusable. Parameters are
    /// checked before the value.
    pub fn validate(self, value: &Value, params: &[String]) -> Result<(), RuleError> {
        match self {
            Self::Latitude => latitude().validate_any(value)?,
            Self::Longitude => longitude().validate_any(value)?,
            Self::Phone => phone().validate_any(value)?,
            Self::ZipCode => zip_code().validate_any(value)?,
            Self::Routing => routing_number().validate_any(value)?,
            Self::CountryCode => {
                let kind = CodeKind::from_params(params)?;
                country_code(kind).validate_any(value)?;
            }
            Self::Uuid => uuid().validate_any(value)?,
        }
        Ok(())
    }

    /// Applies the rule and reports pass or fail as a boolean.
    ///
    /// # Errors
    ///
    /// Only configuration errors are returned as `Err`; a failing value is
    /// `Ok(false)`.
    pub fn check(self, value: &Value, params: &[String]) -> Result<bool, ConfigError> {
        match self.validate(value, params) {
            Ok(()) => Ok(true),
            Err(RuleError::Invalid(_)) => Ok(false),
            Err(RuleError::Config(e)) => Err(e),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| ConfigError::UnknownRule { name: s.to_owned() })
    }
}

/// Rule and alias names: non-empty, ASCII alphanumerics, `_` and `-`.
pub(crate) fn is_rule_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

// ============================================================================
// RULE SPEC
// ============================================================================

/// One entry of a rule string: a rule name and its parameters.
///
/// The name is not resolved here; a [`RuleSet`](crate::registry::RuleSet)
/// decides whether it names a registered rule or alias.
///
/// # Examples
///
/// ```
/// use commonval_validator::rule::RuleSpec;
///
/// let spec: RuleSpec = "countrycode:iso3".parse().unwrap();
/// assert_eq!(spec.name, "countrycode");
/// assert_eq!(spec.params, ["iso3"]);
///
/// let list = RuleSpec::parse_list("zipcode|countrycode").unwrap();
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule or alias name.
    pub name: String,
    /// Parameters after the `:`, split on `,`.
    pub params: Vec<String>,
}

impl RuleSpec {
    /// Creates a spec with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Parses a `|`-separated list of rule specs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedRuleSpec`] if the list or any entry
    /// is empty, or an entry's name is not a valid rule name.
    pub fn parse_list(rules: &str) -> Result<Vec<Self>, ConfigError> {
        rules.split('|').map(str::parse).collect()
    }
}

impl FromStr for RuleSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| ConfigError::MalformedRuleSpec {
            spec: s.to_owned(),
            reason: reason.to_owned(),
        };

        let (name, params): (&str, Vec<String>) = match s.split_once(':') {
            Some((name, params)) => (name.trim(), params.split(',').map(str::to_owned).collect()),
            None => (s.trim(), Vec::new()),
        };

        if name.is_empty() {
            return Err(malformed("empty rule name"));
        }
        if !is_rule_name(name) {
            return Err(malformed("rule name may only contain letters, digits, `_` and `-`"));
        }

        Ok(Self {
            name: name.to_owned(),
            params,
        })
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            write!(f, ":{}", self.params.join(","))?;
        }
        Ok(())
    }
}

impl From<Rule> for RuleSpec {
    fn from(rule: Rule) -> Self {
        Self::new(rule.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
