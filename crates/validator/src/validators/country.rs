//! ISO 3166-1 country code validator.
//!
//! Two modes, selected by [`CodeKind`]: alpha-2 (`US`) and alpha-3 (`USA`).
//! Membership is checked against fixed code tables, ignoring ASCII case.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::foundation::ValidationError;

// ============================================================================
// CODE KIND
// ============================================================================

/// Which ISO 3166-1 code table a [`CountryCode`] validator checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// Two-letter codes, e.g. `US`.
    #[default]
    Iso2,
    /// Three-letter codes, e.g. `USA`.
    Iso3,
}

impl CodeKind {
    /// The parameter spelling of this kind: `"iso2"` or `"iso3"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso2 => "iso2",
            Self::Iso3 => "iso3",
        }
    }

    /// Resolves the kind from a rule's parameter list.
    ///
    /// Only the first parameter is consulted; an empty list selects
    /// [`CodeKind::Iso2`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCountryCodeType`] when the first
    /// parameter is neither `"iso2"` nor `"iso3"`.
    pub fn from_params<S: AsRef<str>>(params: &[S]) -> Result<Self, ConfigError> {
        params
            .first()
            .map_or(Ok(Self::default()), |p| p.as_ref().parse())
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iso2" => Ok(Self::Iso2),
            "iso3" => Ok(Self::Iso3),
            other => Err(ConfigError::UnknownCountryCodeType {
                value: other.to_owned(),
            }),
        }
    }
}

// ============================================================================
// CODE TABLES
// ============================================================================

const ISO2_CODES: [&str; 247] = [
    "AF", "AX", "AL", "DZ", "AS", "AD", "AO", "AI", "AQ", "AG", "AR", "AM",
    "AW", "AU", "AT", "AZ", "BS", "BH", "BD", "BB", "BY", "BE", "BZ", "BJ",
    "BM", "BT", "BO", "BA", "BW", "BV", "BR", "VG", "IO", "BN", "BG", "BF",
    "BI", "KH", "CM", "CA", "CV", "KY", "CF", "TD", "CL", "CN", "HK", "MO",
    "CX", "CC", "CO", "KM", "CG", "CD", "CK", "CR", "CI", "HR", "CU", "CY",
    "CZ", "DK", "DJ", "DM", "DO", "EC", "EG", "SV", "GQ", "ER", "EE", "ET",
    "FK", "FO", "FJ", "FI", "FR", "GF", "PF", "TF", "GA", "GM", "GE", "DE",
    "GH", "GI", "GR", "GL", "GD", "GP", "GU", "GT", "GG", "GN", "GW", "GY",
    "HT", "HM", "VA", "HN", "HU", "IS", "IN", "ID", "IR", "IQ", "IE", "IM",
    "IL", "IT", "JM", "JP", "JE", "JO", "KZ", "KE", "KI", "KP", "KR", "KW",
    "KG", "LA", "LV", "LB", "LS", "LR", "LY", "LI", "LT", "LU", "MK", "MG",
    "MW", "MY", "MV", "ML", "MT", "MH", "MQ", "MR", "MU", "YT", "MX", "FM",
    "MD", "MC", "MN", "ME", "MS", "MA", "MZ", "MM", "NA", "NR", "NP", "NL",
    "AN", "NC", "NZ", "NI", "NE", "NG", "NU", "NF", "MP", "NO", "OM", "PK",
    "PW", "PS", "PA", "PG", "PY", "PE", "PH", "PN", "PL", "PT", "PR", "QA",
    "RE", "RO", "RU", "RW", "BL", "SH", "KN", "LC", "MF", "PM", "VC", "WS",
    "SM", "ST", "SA", "SN", "RS", "SC", "SL", "SG", "SK", "SI", "SB", "SO",
    "ZA", "GS", "SS", "ES", "LK", "SD", "SR", "SJ", "SZ", "SE", "CH", "SY",
    "TW", "TJ", "TZ", "TH", "TL", "TG", "TK", "TO", "TT", "TN", "TR", "TM",
    "TC", "TV", "UG", "UA", "AE", "GB", "US", "UM", "UY", "UZ", "VU", "VE",
    "VN", "VI", "WF", "EH", "YE", "ZM", "ZW",
];

const ISO3_CODES: [&str; 247] = [
    "AFG", "ALA", "ALB", "DZA", "ASM", "AND", "AGO", "AIA", "ATA", "ATG",
    "ARG", "ARM", "ABW", "AUS", "AUT", "AZE", "BHS", "BHR", "BGD", "BRB",
    "BLR", "BEL", "BLZ", "BEN", "BMU", "BTN", "BOL", "BIH", "BWA", "BVT",
    "BRA", "VGB", "IOT", "BRN", "BGR", "BFA", "BDI", "KHM", "CMR", "CAN",
    "CPV", "CYM", "CAF", "TCD", "CHL", "CHN", "HKG", "MAC", "CXR", "CCK",
    "COL", "COM", "COG", "COD", "COK", "CRI", "CIV", "HRV", "CUB", "CYP",
    "CZE", "DNK", "DJI", "DMA", "DOM", "ECU", "EGY", "SLV", "GNQ", "ERI",
    "EST", "ETH", "FLK", "FRO", "FJI", "FIN", "FRA", "GUF", "PYF", "ATF",
    "GAB", "GMB", "GEO", "DEU", "GHA", "GIB", "GRC", "GRL", "GRD", "GLP",
    "GUM", "GTM", "GGY", "GIN", "GNB", "GUY", "HTI", "HMD", "VAT", "HND",
    "HUN", "ISL", "IND", "IDN", "IRN", "IRQ", "IRL", "IMN", "ISR", "ITA",
    "JAM", "JPN", "JEY", "JOR", "KAZ", "KEN", "KIR", "PRK", "KOR", "KWT",
    "KGZ", "LAO", "LVA", "LBN", "LSO", "LBR", "LBY", "LIE", "LTU", "LUX",
    "MKD", "MDG", "MWI", "MYS", "MDV", "MLI", "MLT", "MHL", "MTQ", "MRT",
    "MUS", "MYT", "MEX", "FSM", "MDA", "MCO", "MNG", "MNE", "MSR", "MAR",
    "MOZ", "MMR", "NAM", "NRU", "NPL", "NLD", "ANT", "NCL", "NZL", "NIC",
    "NER", "NGA", "NIU", "NFK", "MNP", "NOR", "OMN", "PAK", "PLW", "PSE",
    "PAN", "PNG", "PRY", "PER", "PHL", "PCN", "POL", "PRT", "PRI", "QAT",
    "REU", "ROU", "RUS", "RWA", "BLM", "SHN", "KNA", "LCA", "MAF", "SPM",
    "VCT", "WSM", "SMR", "STP", "SAU", "SEN", "SRB", "SYC", "SLE", "SGP",
    "SVK", "SVN", "SLB", "SOM", "ZAF", "SGS", "SSD", "ESP", "LKA", "SDN",
    "SUR", "SJM", "SWZ", "SWE", "CHE", "SYR", "TWN", "TJK", "TZA", "THA",
    "TLS", "TGO", "TKL", "TON", "TTO", "TUN", "TUR", "TKM", "TCA", "TUV",
    "UGA", "UKR", "ARE", "GBR", "USA", "UMI", "URY", "UZB", "VUT", "VEN",
    "VNM", "VIR", "WLF", "ESH", "YEM", "ZMB", "ZWE",
];

static ISO2: LazyLock<HashSet<&'static str>> = LazyLock::new(|| ISO2_CODES.into_iter().collect());
static ISO3: LazyLock<HashSet<&'static str>> = LazyLock::new(|| ISO3_CODES.into_iter().collect());

fn lookup(table: &HashSet<&'static str>, width: usize, input: &str) -> bool {
    input.len() == width && table.contains(input.to_ascii_uppercase().as_str())
}

/// Returns `true` if `input` is an ISO 3166-1 alpha-2 code, in any ASCII case.
#[must_use]
pub fn is_iso2_code(input: &str) -> bool {
    lookup(&ISO2, 2, input)
}

/// Returns `true` if `input` is an ISO 3166-1 alpha-3 code, in any ASCII case.
#[must_use]
pub fn is_iso3_code(input: &str) -> bool {
    lookup(&ISO3, 3, input)
}

// ============================================================================
// COUNTRY CODE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates an ISO 3166-1 country code of the configured kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonval_validator::validators::{CodeKind, country_code};
    /// use commonval_validator::foundation::Validate;
    ///
    /// assert!(country_code(CodeKind::Iso2).validate("us").is_ok());
    /// assert!(country_code(CodeKind::Iso2).validate("USA").is_err());
    /// assert!(country_code(CodeKind::Iso3).validate("USA").is_ok());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub CountryCode { kind: CodeKind } for str;
    rule(self, input) {
        match self.kind {
            CodeKind::Iso2 => is_iso2_code(input),
            CodeKind::Iso3 => is_iso3_code(input),
        }
    }
    error(self, input) {
        ValidationError::new("countrycode", format!("Invalid {} country code", self.kind))
            .with_param("kind", self.kind.as_str())
    }
    fn country_code(kind: CodeKind);
}

// ============================================================================
// TESTS
// ============================================================================
