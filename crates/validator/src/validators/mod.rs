//! Built-in validators
//!
//! # Categories
//!
//! - **Geographic**: latitude, longitude
//! - **Pattern**: phone, ZIP code, UUID
//! - **Identifier**: ABA routing number, ISO 3166-1 country code
//!
//! # Examples
//!
//! ```
//! use commonval_validator::foundation::Validate;
//! use commonval_validator::validators::{CodeKind, country_code, routing_number, zip_code};
//!
//! assert!(zip_code().validate("12312-1234").is_ok());
//! assert!(routing_number().validate("122100024").is_ok());
//! assert!(country_code(CodeKind::Iso3).validate("usa").is_ok());
//! ```

// Geographic validators
pub mod coordinate;

// Pattern validators
pub mod phone;
pub mod uuid;
pub mod zipcode;

// Identifier validators
pub mod country;
pub mod routing;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use coordinate::{Latitude, Longitude, latitude, longitude};
pub use country::{CodeKind, CountryCode, country_code, is_iso2_code, is_iso3_code};
pub use phone::{Phone, phone};
pub use routing::{ROUTING_NUMBER_LEN, RoutingNumber, routing_checksum, routing_number};
pub use uuid::{Uuid, uuid};
pub use zipcode::{ZipCode, zip_code};
