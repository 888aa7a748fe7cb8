use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("'{0}' is not an ISO 3166-1 alpha-2 region code")]
pub struct InvalidRegionCodeError(pub String);

/// An ISO 3166-1 alpha-2 region code, validated at construction.
///
/// All lookup tables are keyed by this type rather than by loose strings,
/// so an unknown shape is rejected once, at the edge, instead of at some
/// arbitrary later lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(code: impl AsRef<str>) -> Result<Self, InvalidRegionCodeError> {
        let code = code.as_ref().trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidRegionCodeError(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves this region to the parser's country identifier, when the
    /// numbering plan knows the region at all.
    pub fn to_country_id(&self) -> Option<phonenumber::country::Id> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn uppercases_on_construction() {
        assert_eq!(RegionCode::new("us").unwrap().as_str(), "US");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(RegionCode::new("USA").is_err());
        assert!(RegionCode::new("4U").is_err());
        assert!(RegionCode::new("").is_err());
    }

    #[test]
    fn known_regions_resolve_to_country_ids() {
        assert!(RegionCode::new("GB").unwrap().to_country_id().is_some());
        assert!(RegionCode::new("ZQ").unwrap().to_country_id().is_none());
    }
}
