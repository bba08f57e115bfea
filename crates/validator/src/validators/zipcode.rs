//! US ZIP and ZIP+4 code validator.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static ZIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").unwrap());

crate::validator! {
    /// Validates a five-digit ZIP code with an optional `-NNNN` extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonval_validator::validators::zip_code;
    /// use commonval_validator::foundation::Validate;
    ///
    /// assert!(zip_code().validate("12345").is_ok());
    /// assert!(zip_code().validate("12312-1234").is_ok());
    /// assert!(zip_code().validate("12345-").is_err());
    /// ```
    pub ZipCode for str;
    rule(input) { ZIP_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("zipcode") }
    fn zip_code();
}
