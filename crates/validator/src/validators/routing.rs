//! ABA routing transit number validator.
//!
//! A routing number is nine decimal digits whose weighted sum, using the
//! repeating weights `3, 7, 1`, is a multiple of ten. Checks run in order and
//! stop at the first failure:
//!
//! 1. the text is numeric (`routing_not_numeric`)
//! 2. the text is exactly nine characters (`routing_length`)
//! 3. every character is an ASCII digit (`routing_digits`)
//! 4. the weighted sum is divisible by ten (`routing_checksum`)
//!
//! Digits are read from the text, so leading zeros are significant.

use crate::foundation::{Validate, ValidationError, is_numeric};

/// Number of digits in a routing number.
pub const ROUTING_NUMBER_LEN: usize = 9;

const WEIGHTS: [u32; ROUTING_NUMBER_LEN] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

/// Weighted digit sum of a routing number.
///
/// `digits` holds digit values `0..=9`, most significant first. The number
/// is valid when the sum is a multiple of ten.
///
/// ```
/// use commonval_validator::validators::routing_checksum;
///
/// assert_eq!(routing_checksum(&[1, 2, 2, 1, 0, 0, 0, 2, 4]), 40);
/// ```
#[must_use]
pub fn routing_checksum(digits: &[u8; ROUTING_NUMBER_LEN]) -> u32 {
    digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum()
}

// ============================================================================
// ROUTING NUMBER VALIDATOR
// ============================================================================

/// Validates a nine-digit ABA routing number with its mod-10 check digit.
///
/// # Examples
///
/// ```
/// use commonval_validator::validators::RoutingNumber;
/// use commonval_validator::foundation::Validate;
///
/// assert!(RoutingNumber.validate("122100024").is_ok());
/// assert!(RoutingNumber.validate("123123124").is_err());
/// assert!(RoutingNumber.validate("12210002").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoutingNumber;

impl Validate for RoutingNumber {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !is_numeric(input) {
            return Err(ValidationError::new(
                "routing_not_numeric",
                "Routing number must be numeric",
            ));
        }

        let Ok(bytes) = <&[u8; ROUTING_NUMBER_LEN]>::try_from(input.as_bytes()) else {
            return Err(ValidationError::new(
                "routing_length",
                format!("Routing number must be {ROUTING_NUMBER_LEN} digits"),
            )
            .with_param("expected", ROUTING_NUMBER_LEN.to_string())
            .with_param("actual", input.len().to_string()));
        };

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ValidationError::new(
                "routing_digits",
                "Routing number must contain only digits 0-9",
            ));
        }

        let digits = bytes.map(|b| b - b'0');
        let sum = routing_checksum(&digits);
        if sum % 10 != 0 {
            return Err(ValidationError::new(
                "routing_checksum",
                "Routing number check digit does not match",
            )
            .with_param("checksum", sum.to_string()));
        }

        Ok(())
    }
}

/// Creates a new [`RoutingNumber`] validator.
#[must_use]
pub const fn routing_number() -> RoutingNumber {
    RoutingNumber
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code(input: &str) -> String {
        routing_number()
            .validate(input)
            .map_or_else(|e| e.code.into_owned(), |()| "ok".to_owned())
    }

    #[test]
    fn test_known_numbers() {
        assert_eq!(code("122100024"), "ok");
        assert_eq!(code("011000015"), "ok");
        assert_eq!(code("123123124"), "routing_checksum");
    }

    #[test]
    fn test_checksum_values() {
        assert_eq!(routing_checksum(&[1, 2, 2, 1, 0, 0, 0, 2, 4]), 40);
        assert_eq!(routing_checksum(&[1, 2, 3, 1, 2, 3, 1, 2, 4]), 61);
        assert_eq!(routing_checksum(&[0; 9]), 0);
        assert_eq!(routing_checksum(&[9; 9]), 297);
    }

    #[test]
    fn test_all_zeros_passes_checksum() {
        assert_eq!(code("000000000"), "ok");
    }

    #[test]
    fn test_length_checked_before_checksum() {
        assert_eq!(code("12210002"), "routing_length");
        assert_eq!(code("1221000240"), "routing_length");
        assert_eq!(code(""), "routing_not_numeric");
    }

    #[test]
    fn test_non_numeric_fails_first() {
        assert_eq!(code("12210002a"), "routing_not_numeric");
        assert_eq!(code("routing!!"), "routing_not_numeric");
    }

    #[test]
    fn test_numeric_but_not_all_digits() {
        assert_eq!(code("+12345678"), "routing_digits");
        assert_eq!(code("1.2345678"), "routing_digits");
        assert_eq!(code("1221000e4"), "routing_digits");
        assert_eq!(code(" 12210002"), "routing_digits");
    }

    #[test]
    fn test_checksum_param() {
        let err = routing_number().validate("123123124").unwrap_err();
        assert_eq!(err.param("checksum"), Some("61"));
    }

    #[test]
    fn test_json_values() {
        let v = routing_number();
        assert!(v.validate_any(&json!(122_100_024)).is_ok());
        assert!(v.validate_any(&json!("122100024")).is_ok());
        assert!(v.validate_any(&json!(null)).is_err());
        assert!(v.validate_any(&json!(122_100_024.0)).is_ok());
        assert!(v.validate_any(&json!(123_123_124.0)).is_err());
        assert!(v.validate_any(&json!(1_221_000.24)).is_err());
    }
}
