//! UUID validator.
//!
//! Accepts the canonical hyphenated form `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
//! in either case. Version and variant nibbles are not inspected, and braces,
//! URNs and the unhyphenated form are rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

crate::validator! {
    /// Validates a canonical 8-4-4-4-12 hexadecimal UUID string.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonval_validator::validators::uuid;
    /// use commonval_validator::foundation::Validate;
    ///
    /// assert!(uuid().validate("ec85e9ec-cc86-11e7-bd2f-080027a8df8b").is_ok());
    /// assert!(uuid().validate("EC85E9EC-CC86-11E7-BD2F-080027A8DF8B").is_ok());
    /// assert!(uuid().validate("ec85e9eccc8611e7bd2f080027a8df8b").is_err());
    /// ```
    pub Uuid for str;
    rule(input) { UUID_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("uuid") }
    fn uuid();
}
