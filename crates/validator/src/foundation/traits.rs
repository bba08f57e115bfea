//! Core traits for the validation system

use crate::foundation::validatable::AsValidatable;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators are generic over their input type, so a range check takes an
/// `f64` and a pattern check takes a `str`. Host values reach them through
/// [`Validate::validate_any`], which coerces via [`AsValidatable`].
///
/// # Examples
///
/// ```
/// use commonval_validator::foundation::{Validate, ValidationError};
///
/// struct NineChars;
///
/// impl Validate for NineChars {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.len() == 9 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("length", "need 9 characters"))
///         }
///     }
/// }
///
/// assert!(NineChars.validate("122100024").is_ok());
/// assert!(NineChars.validate("1221").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// A failed conversion (a null where a number is expected, a string that
    /// is not numeric) is reported as the validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonval_validator::foundation::Validate;
    /// use commonval_validator::validators::latitude;
    /// use serde_json::json;
    ///
    /// let v = latitude();
    /// assert!(v.validate_any("87.112301031").is_ok());
    /// assert!(v.validate_any(&json!(-7)).is_ok());
    /// assert!(v.validate_any(&json!(null)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

// ============================================================================
// TESTS
// ============================================================================
