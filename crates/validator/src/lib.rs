//! # commonval-validator
//!
//! Validation rules for common real-world identifiers and coordinates:
//! latitude, longitude, North American phone numbers, US ZIP codes, ABA
//! routing numbers, ISO 3166-1 country codes and UUIDs.
//!
//! ## Quick Start
//!
//! ```
//! use commonval_validator::prelude::*;
//! use serde_json::json;
//!
//! // Typed validators
//! assert!(routing_number().validate("122100024").is_ok());
//! assert!(zip_code().validate("12345-").is_err());
//!
//! // Named rules over host values
//! let rules = RuleSet::builtin();
//! assert_eq!(rules.check_spec("countrycode:iso3", &json!("usa")), Ok(true));
//! assert!(rules.check_spec("countrycode:iso4", &json!("usa")).is_err());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, structured
//!   [`ValidationError`](foundation::ValidationError)s and host value coercion.
//! - [`validators`]: one typed validator per rule.
//! - [`rule`]: the [`Rule`](rule::Rule) enum and `name:param,...` rule strings.
//! - [`registry`]: [`RuleSet`](registry::RuleSet), the name table hosts
//!   consult, built from [`RuleSetConfig`](config::RuleSetConfig).
//!
//! Validation failures and configuration errors are kept apart: the boolean
//! API reports a failing value as `Ok(false)` and reserves `Err` for
//! [`ConfigError`](error::ConfigError).

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod validators;
