//! Property-based tests for commonval-validator.

use commonval_validator::prelude::*;
use proptest::prelude::*;
use serde_json::json;

/// Routing checksum computed from the integer value, independent of the
/// string-based digit extraction.
fn checksum_by_division(n: u32) -> u32 {
    const WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];
    (0..9)
        .map(|i| (n / 10_u32.pow(8 - i)) % 10 * WEIGHTS[i as usize])
        .sum()
}

// ============================================================================
// RANGE LAWS
// ============================================================================

proptest! {
    #[test]
    fn latitude_matches_interval(x in any::<f64>()) {
        let expected = (-90.0..=90.0).contains(&x);
        prop_assert_eq!(latitude().validate(&x).is_ok(), expected);
    }

    #[test]
    fn longitude_matches_interval(x in any::<f64>()) {
        let expected = (-180.0..=180.0).contains(&x);
        prop_assert_eq!(longitude().validate(&x).is_ok(), expected);
    }

    #[test]
    fn latitude_from_text_matches_number(x in -200.0f64..200.0) {
        let text = x.to_string();
        prop_assert_eq!(
            Rule::Latitude.check(&json!(text), &[]),
            Ok((-90.0..=90.0).contains(&x))
        );
    }

    #[test]
    fn non_numeric_text_fails(s in "[a-zA-Z_!@#]{1,12}") {
        prop_assert_eq!(Rule::Latitude.check(&json!(s), &[]), Ok(false));
        prop_assert_eq!(Rule::Longitude.check(&json!(s), &[]), Ok(false));
    }
}

// ============================================================================
// ROUTING CHECKSUM
// ============================================================================

proptest! {
    #[test]
    fn routing_agrees_with_integer_checksum(n in 0u32..1_000_000_000) {
        let text = format!("{n:09}");
        let expected = checksum_by_division(n) % 10 == 0;
        prop_assert_eq!(routing_number().validate(&text).is_ok(), expected);
    }

    #[test]
    fn routing_rejects_wrong_lengths(digits in "[0-9]{1,8}|[0-9]{10,15}") {
        let err = routing_number().validate(&digits).unwrap_err();
        prop_assert_eq!(&*err.code, "routing_length");
    }

    #[test]
    fn routing_check_digit_is_unique(prefix in "[0-9]{8}") {
        let passing = (0..10)
            .filter(|d| routing_number().validate(&format!("{prefix}{d}")).is_ok())
            .count();
        prop_assert_eq!(passing, 1);
    }
}

// ============================================================================
// CASE INSENSITIVITY
// ============================================================================

proptest! {
    #[test]
    fn country_codes_ignore_case(code in "[a-zA-Z]{2,3}") {
        let upper = code.to_ascii_uppercase();
        let lower = code.to_ascii_lowercase();
        prop_assert_eq!(is_iso2_code(&upper), is_iso2_code(&lower));
        prop_assert_eq!(is_iso3_code(&upper), is_iso3_code(&code));
    }

    #[test]
    fn uuid_ignores_case(hex in "[0-9a-f]{32}") {
        let canonical = format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..32]
        );
        prop_assert!(uuid().validate(&canonical).is_ok());
        prop_assert!(uuid().validate(&canonical.to_ascii_uppercase()).is_ok());
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn every_rule_idempotent(s in ".{0,16}") {
        let value = json!(s);
        for rule in Rule::ALL {
            let r1 = rule.validate(&value, &[]);
            let r2 = rule.validate(&value, &[]);
            prop_assert_eq!(r1, r2);
        }
    }

    #[test]
    fn phone_digits_only_is_ten(digits in "[0-9]{5,15}") {
        prop_assert_eq!(phone().validate(&digits).is_ok(), digits.len() == 10);
    }

    #[test]
    fn zip_digits_only_is_five(digits in "[0-9]{1,12}") {
        prop_assert_eq!(zip_code().validate(&digits).is_ok(), digits.len() == 5);
    }
}
