//! Core validation types and traits
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`]
//! - **Coercion**: [`is_numeric`], [`parse_numeric`]
//!
//! Validators are generic over their input type. A coordinate check takes an
//! `f64`, a ZIP check takes a `str`. Host values (form text, JSON numbers,
//! nulls) reach them through [`Validate::validate_any`]:
//!
//! ```
//! use commonval_validator::foundation::Validate;
//! use commonval_validator::validators::{longitude, zip_code};
//! use serde_json::json;
//!
//! assert!(longitude().validate_any(&json!("-157.123523")).is_ok());
//! assert!(longitude().validate_any(&json!("0asdfaf")).is_err());
//! assert!(zip_code().validate_any(&json!(12345)).is_ok());
//! ```

pub mod error;
pub mod numeric;
pub mod traits;
pub mod validatable;

pub use error::ValidationError;
pub use numeric::{is_numeric, parse_numeric};
pub use traits::Validate;
pub use validatable::AsValidatable;
