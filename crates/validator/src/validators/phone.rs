//! North American phone number validator.
//!
//! Accepts ten digits grouped 3-3-4, for example:
//!
//! - `(201) 234 1234`
//! - `201-234-1234`
//! - `201.234.1234`
//! - `2012341234`
//!
//! The area-code parentheses are each optional on their own, so
//! `(201 234 1234` is accepted too. Country codes and extensions are not.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

/// One optional separator between digit groups: ASCII whitespace, `-` or `.`.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[0-9]{3}\)?[\t\n\x0B\x0C\r .\-]?[0-9]{3}[\t\n\x0B\x0C\r .\-]?[0-9]{4}$")
        .unwrap()
});

crate::validator! {
    /// Validates a ten-digit phone number in 3-3-4 grouping.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonval_validator::validators::phone;
    /// use commonval_validator::foundation::Validate;
    ///
    /// assert!(phone().validate("(201) 234 1234").is_ok());
    /// assert!(phone().validate("201-234-1234").is_ok());
    /// assert!(phone().validate("2012341234").is_ok());
    /// assert!(phone().validate("+1 201 234 1234").is_err());
    /// ```
    pub Phone for str;
    rule(input) { PHONE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("phone") }
    fn phone();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_documented_formats() {
        let v = phone();
        assert!(v.validate("(201) 234 1234").is_ok());
        assert!(v.validate("201-234-1234").is_ok());
        assert!(v.validate("201.234.1234").is_ok());
        assert!(v.validate("2012341234").is_ok());
    }

    #[test]
    fn test_mixed_and_partial_punctuation() {
        let v = phone();
        assert!(v.validate("(201)234-1234").is_ok());
        assert!(v.validate("201 234.1234").is_ok());
        assert!(v.validate("(201 234 1234").is_ok());
        assert!(v.validate("201) 234 1234").is_ok());
        assert!(v.validate("201\t234\t1234").is_ok());
    }

    #[test]
    fn test_wrong_digit_counts() {
        let v = phone();
        assert!(v.validate("201234123").is_err());
        assert!(v.validate("20123412345").is_err());
        assert!(v.validate("20-234-1234").is_err());
        assert!(v.validate("201-23-41234").is_err());
    }

    #[test]
    fn test_rejects_extra_separators() {
        let v = phone();
        assert!(v.validate("201--234-1234").is_err());
        assert!(v.validate("201 - 234 - 1234").is_err());
        assert!(v.validate(" 2012341234").is_err());
        assert!(v.validate("2012341234\n").is_err());
    }

    #[test]
    fn test_rejects_country_code_and_extension() {
        let v = phone();
        assert!(v.validate("+1 201 234 1234").is_err());
        assert!(v.validate("1-201-234-1234").is_err());
        assert!(v.validate("201-234-1234 x12").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(phone().validate("٢٠١٢٣٤١٢٣٤").is_err());
    }

    #[test]
    fn test_error_names_format() {
        let err = phone().validate("nope").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("phone"));
    }
}
