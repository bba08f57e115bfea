//! Structured validation failures
//!
//! A [`ValidationError`] is the routine outcome of a value not satisfying a
//! rule. It carries a stable machine code, an English message and ordered
//! parameters. All string fields use `Cow<'static, str>` so the common case
//! of static codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use commonval_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("routing_length", "Routing number must be 9 digits")
///     .with_param("expected", "9")
///     .with_param("actual", "8");
///
/// assert_eq!(error.param("actual"), Some("8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "zipcode", "routing_checksum", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, set by hosts that validate records.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the message, in insertion order.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates an "invalid_format" error naming the expected format.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("Invalid {expected} format"))
            .with_param("expected", expected)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new("type_mismatch", format!("Expected {expected}, got {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates an "out_of_range" error for a closed interval.
    pub fn out_of_range<T: fmt::Display>(
        code: impl Into<Cow<'static, str>>,
        min: T,
        max: T,
        actual: T,
    ) -> Self {
        Self::new(code, format!("Value must be between {min} and {max}"))
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("zipcode", "Invalid ZIP code");
        assert_eq!(error.code, "zipcode");
        assert_eq!(error.message, "Invalid ZIP code");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("routing_length", "Wrong length")
            .with_param("expected", "9")
            .with_param("actual", "8");

        assert_eq!(error.param("expected"), Some("9"));
        assert_eq!(error.param("actual"), Some("8"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_display_with_field_and_params() {
        let error = ValidationError::out_of_range("latitude", -90, 90, 120).with_field("lat");
        assert_eq!(
            error.to_string(),
            "[lat] latitude: Value must be between -90 and 90 (params: [min=-90, max=90, actual=120])"
        );
    }

    #[test]
    fn test_type_mismatch() {
        let error = ValidationError::type_mismatch("number", "null");
        assert_eq!(error.code, "type_mismatch");
        assert_eq!(error.message, "Expected number, got null");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("uuid", "Invalid UUID");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
