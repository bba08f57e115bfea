//! Rule-level error types.

use crate::foundation::ValidationError;

/// A problem with how a rule was requested or configured.
///
/// Distinct from a validation failure: the value was never judged, because
/// the rule itself could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The country-code rule was given a type other than `iso2` or `iso3`.
    #[error("invalid country code type `{value}`: expected `iso2` or `iso3`")]
    UnknownCountryCodeType { value: String },

    /// No rule or alias is registered under this name.
    #[error("unknown rule `{name}`")]
    UnknownRule { name: String },

    /// A rule string could not be parsed.
    #[error("malformed rule string `{spec}`: {reason}")]
    MalformedRuleSpec { spec: String, reason: String },

    /// An alias reuses the name of an enabled builtin rule.
    #[error("alias `{alias}` shadows a builtin rule")]
    AliasShadowsRule { alias: String },

    /// An alias name is empty or contains characters not allowed in rule names.
    #[error("invalid alias name `{alias}`")]
    InvalidAliasName { alias: String },

    /// An alias points at a rule that is disabled.
    #[error("alias `{alias}` targets disabled rule `{rule}`")]
    AliasTargetDisabled { alias: String, rule: String },
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownCountryCodeType { .. } => "CONFIG_COUNTRY_CODE_TYPE",
            Self::UnknownRule { .. } => "CONFIG_UNKNOWN_RULE",
            Self::MalformedRuleSpec { .. } => "CONFIG_MALFORMED_RULE",
            Self::AliasShadowsRule { .. } => "CONFIG_ALIAS_SHADOWS",
            Self::InvalidAliasName { .. } => "CONFIG_ALIAS_NAME",
            Self::AliasTargetDisabled { .. } => "CONFIG_ALIAS_DISABLED",
        }
    }
}

/// Detailed outcome of applying a rule to a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The value does not satisfy the rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The rule could not be applied.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RuleError {
    /// Returns `true` for configuration errors, `false` for plain failures.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// The validation failure, if this is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}
