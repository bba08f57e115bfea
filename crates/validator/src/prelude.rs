//! Prelude module for convenient imports.
//!
//! ```
//! use commonval_validator::prelude::*;
//!
//! assert!(latitude().validate(&45.0).is_ok());
//! assert_eq!("uuid".parse::<Rule>(), Ok(Rule::Uuid));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{AsValidatable, Validate, ValidationError};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// RULES: Named rules, registry and configuration
// ============================================================================

pub use crate::config::RuleSetConfig;
pub use crate::error::{ConfigError, RuleError};
pub use crate::registry::{Evaluation, RuleSet};
pub use crate::rule::{Rule, RuleSpec};
