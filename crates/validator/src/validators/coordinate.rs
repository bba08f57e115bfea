//! Geographic coordinate validators
//!
//! Both bounds are inclusive. NaN and infinities fail.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a latitude in decimal degrees, within `[-90, 90]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonval_validator::validators::latitude;
    /// use commonval_validator::foundation::Validate;
    ///
    /// assert!(latitude().validate(&87.112_301_031).is_ok());
    /// assert!(latitude().validate(&-90.0).is_ok());
    /// assert!(latitude().validate(&-157.123_523).is_err());
    /// assert!(latitude().validate_any("-7").is_ok());
    /// ```
    pub Latitude for f64;
    rule(input) { (-90.0..=90.0).contains(input) }
    error(input) { ValidationError::out_of_range("latitude", -90.0, 90.0, *input) }
    fn latitude();
}

crate::validator! {
    /// Validates a longitude in decimal degrees, within `[-180, 180]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonval_validator::validators::longitude;
    /// use commonval_validator::foundation::Validate;
    ///
    /// assert!(longitude().validate(&-157.123_523).is_ok());
    /// assert!(longitude().validate(&180.0).is_ok());
    /// assert!(longitude().validate(&-200.0).is_err());
    /// ```
    pub Longitude for f64;
    rule(input) { (-180.0..=180.0).contains(input) }
    error(input) { ValidationError::out_of_range("longitude", -180.0, 180.0, *input) }
    fn longitude();
}

// ============================================================================
// TESTS
// ============================================================================
