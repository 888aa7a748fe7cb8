use log::warn;

use crate::data::{CarrierTable, TypePattern, TYPE_PATTERNS};
use crate::number::{NumberType, ParsedNumber};
use crate::regex_cache::PatternCache;

use super::errors::{LookupError, LookupOutcome};
use super::report::CarrierInfo;

/// Line-type descriptors plus the carrier prefix table, compiled lazily
/// through a shared pattern cache.
pub struct MetadataRegistry {
    patterns: &'static [TypePattern],
    carriers: CarrierTable,
    cache: PatternCache,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::with_tables(TYPE_PATTERNS, CarrierTable::new())
    }

    pub fn with_tables(patterns: &'static [TypePattern], carriers: CarrierTable) -> Self {
        Self {
            patterns,
            carriers,
            cache: PatternCache::with_capacity(patterns.len()),
        }
    }

    /// Carrier and line-type lookup. A number the bundled data knows
    /// nothing about yields `Unavailable`, never a hard failure; many
    /// VoIP and ported numbers simply have no stable mapping.
    pub fn lookup(&self, number: &ParsedNumber) -> LookupOutcome<CarrierInfo> {
        let number_type = self.classify(number);
        let name = match number_type {
            NumberType::Mobile | NumberType::FixedLineOrMobile | NumberType::Pager => {
                let full_digits = format!("{}{}", number.country_code, number.national_number);
                self.carriers.name_for(&full_digits).map(str::to_owned)
            }
            _ => None,
        };
        if name.is_none() && number_type == NumberType::Unknown {
            return Err(LookupError::Unavailable(
                "no carrier or line-type record for this numbering range".to_string(),
            ));
        }
        Ok(CarrierInfo { name, number_type })
    }

    fn classify(&self, number: &ParsedNumber) -> NumberType {
        let Some(region) = &number.region else {
            return NumberType::Unknown;
        };
        for descriptor in self
            .patterns
            .iter()
            .filter(|descriptor| descriptor.region == region.as_str())
        {
            match self
                .cache
                .full_match(descriptor.pattern, &number.national_number)
            {
                Ok(true) => return descriptor.number_type,
                Ok(false) => {}
                Err(err) => warn!("bad line-type pattern for {}: {}", region, err),
            }
        }
        NumberType::Unknown
    }
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MetadataRegistry;
    use crate::enrich::errors::LookupError;
    use crate::number::{parse, NumberType, RawInput};

    fn lookup(number: &str) -> Result<super::CarrierInfo, LookupError> {
        let registry = MetadataRegistry::new();
        let parsed = parse(&RawInput::new(number)).unwrap();
        registry.lookup(&parsed)
    }

    #[test]
    fn nanpa_numbers_are_fixed_line_or_mobile() {
        let info = lookup("+14155552671").unwrap();
        assert_eq!(info.number_type, NumberType::FixedLineOrMobile);
        assert_eq!(info.name, None);
    }

    #[test]
    fn uk_mobile_resolves_type_and_carrier() {
        let info = lookup("+447700900123").unwrap();
        assert_eq!(info.number_type, NumberType::Mobile);
        assert_eq!(info.name.as_deref(), Some("O2"));
    }

    #[test]
    fn toll_free_ranges_are_classified_before_the_broad_rules() {
        let info = lookup("+18002345678").unwrap();
        assert_eq!(info.number_type, NumberType::TollFree);
    }

    #[test]
    fn uncovered_regions_report_unavailable() {
        // Switzerland is valid but carries no bundled descriptors.
        let result = lookup("+41791234567");
        assert!(matches!(result, Err(LookupError::Unavailable(_))));
    }
}
