//! AsValidatable trait with GAT for host value coercion
//!
//! Validators take a typed input (`str`, `f64`). Hosts hold loosely typed
//! values: form text, JSON numbers, nulls. `AsValidatable` bridges the two,
//! either borrowing (`&str` out of a `String`) or producing an owned value
//! (an `f64` parsed out of a numeric string), unified through `Borrow`.

use crate::foundation::ValidationError;
use crate::foundation::numeric::parse_numeric;
use std::borrow::{Borrow, Cow};

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

pub(crate) const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn not_numeric() -> ValidationError {
    ValidationError::new("not_numeric", "Value must be numeric")
}

// ============================================================================
// TEXT VIEW
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_ref())
    }
}

/// Renders a JSON number as text. Integral floats drop the fractional part,
/// so `122100024.0` reads as `"122100024"`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn render_number(n: &serde_json::Number) -> String {
    // Below 1e15 every integral f64 fits in i64 and prints without exponent.
    const MAX_INTEGRAL: f64 = 1e15;
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_INTEGRAL => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// Strings pass through; numbers render in decimal form.
impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = Cow<'a, str>
    where
        Self: 'a;

    fn as_validatable(&self) -> Result<Cow<'_, str>, ValidationError> {
        match self {
            Self::String(s) => Ok(Cow::Borrowed(s.as_str())),
            Self::Number(n) => Ok(Cow::Owned(render_number(n))),
            other => Err(ValidationError::type_mismatch(
                "string",
                json_type_name(other),
            )),
        }
    }
}

// ============================================================================
// NUMERIC VIEW
// ============================================================================

impl AsValidatable<f64> for f64 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<f64> for f32 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(f64::from(*self))
    }
}

impl AsValidatable<f64> for i32 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(f64::from(*self))
    }
}

impl AsValidatable<f64> for u32 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(f64::from(*self))
    }
}

/// Rejects integers outside ±2^53, which `f64` cannot represent exactly.
impl AsValidatable<f64> for i64 {
    type Output<'a> = f64;

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        const MAX_EXACT: i64 = 1 << 53;
        if (-MAX_EXACT..=MAX_EXACT).contains(self) {
            Ok(*self as f64)
        } else {
            Err(ValidationError::new(
                "precision_loss",
                format!("Integer {self} cannot be represented exactly as f64"),
            ))
        }
    }
}

impl AsValidatable<f64> for str {
    type Output<'a> = f64;

    fn as_validatable(&self) -> Result<f64, ValidationError> {
        parse_numeric(self).ok_or_else(not_numeric)
    }
}

impl AsValidatable<f64> for String {
    type Output<'a> = f64;

    fn as_validatable(&self) -> Result<f64, ValidationError> {
        parse_numeric(self).ok_or_else(not_numeric)
    }
}

/// Numbers pass through; strings must be numeric strings.
impl AsValidatable<f64> for serde_json::Value {
    type Output<'a> = f64;

    fn as_validatable(&self) -> Result<f64, ValidationError> {
        match self {
            Self::Number(n) => n.as_f64().ok_or_else(not_numeric),
            Self::String(s) => parse_numeric(s).ok_or_else(not_numeric),
            other => Err(ValidationError::type_mismatch(
                "number",
                json_type_name(other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_string_borrows() {
        let value = json!("12345");
        let text = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert!(matches!(text, Cow::Borrowed("12345")));
    }

    #[test]
    fn test_json_number_renders_decimal() {
        let value = json!(122_100_024);
        let text = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(text, "122100024");
    }

    #[test]
    fn test_json_integral_float_drops_fraction() {
        let value = json!(12345.0);
        let text = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(text, "12345");
        let value = json!(-7.0);
        let text = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(text, "-7");
        let value = json!(1234.5);
        let text = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(text, "1234.5");
    }

    #[test]
    fn test_cow_text_view() {
        let borrowed: Cow<'_, str> = Cow::Borrowed("12345");
        assert_eq!(AsValidatable::<str>::as_validatable(&borrowed), Ok("12345"));
        let owned: Cow<'_, str> = Cow::Owned("12345-6789".to_owned());
        assert_eq!(AsValidatable::<str>::as_validatable(&owned), Ok("12345-6789"));
    }

    #[test]
    fn test_small_numbers_widen_to_f64() {
        assert_eq!(AsValidatable::<f64>::as_validatable(&-90.5_f32), Ok(-90.5));
        assert_eq!(AsValidatable::<f64>::as_validatable(&-180_i32), Ok(-180.0));
        assert_eq!(AsValidatable::<f64>::as_validatable(&u32::MAX), Ok(4_294_967_295.0));
    }

    #[test]
    fn test_json_null_has_no_text() {
        let err = AsValidatable::<str>::as_validatable(&json!(null)).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.param("actual"), Some("null"));
    }

    #[test]
    fn test_json_bool_has_no_text() {
        let err = AsValidatable::<str>::as_validatable(&json!(true)).unwrap_err();
        assert_eq!(err.param("actual"), Some("boolean"));
    }

    #[test]
    fn test_numeric_string_to_f64() {
        let n: f64 = AsValidatable::<f64>::as_validatable(&json!("-157.123523")).unwrap();
        assert_eq!(n, -157.123_523);
    }

    #[test]
    fn test_non_numeric_string_to_f64() {
        let err = AsValidatable::<f64>::as_validatable(&json!("0asdfaf")).unwrap_err();
        assert_eq!(err.code, "not_numeric");
    }

    #[test]
    fn test_array_to_f64() {
        let err = AsValidatable::<f64>::as_validatable(&json!([1, 2])).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.param("actual"), Some("array"));
    }

    #[test]
    fn test_i64_exact_range() {
        assert!(AsValidatable::<f64>::as_validatable(&(1_i64 << 53)).is_ok());
        assert!(AsValidatable::<f64>::as_validatable(&i64::MAX).is_err());
    }
}
