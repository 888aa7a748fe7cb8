/// Area-code localities: (region, national-number prefix, place name).
///
/// Feeds the geocoding query so the coordinate lands on the numbering
/// area instead of the whole country. Sparse by design; regions or
/// prefixes without an entry fall back to the capital city.
pub const LOCALITIES: &[(&str, &str, &str)] = &[
    ("US", "202", "Washington, D.C."),
    ("US", "206", "Seattle, Washington"),
    ("US", "212", "New York, New York"),
    ("US", "213", "Los Angeles, California"),
    ("US", "305", "Miami, Florida"),
    ("US", "312", "Chicago, Illinois"),
    ("US", "415", "San Francisco, California"),
    ("US", "617", "Boston, Massachusetts"),
    ("US", "702", "Las Vegas, Nevada"),
    ("US", "713", "Houston, Texas"),
    ("CA", "416", "Toronto, Ontario"),
    ("CA", "514", "Montreal, Quebec"),
    ("CA", "604", "Vancouver, British Columbia"),
    ("GB", "20", "London"),
    ("GB", "121", "Birmingham"),
    ("GB", "131", "Edinburgh"),
    ("GB", "161", "Manchester"),
    ("DE", "30", "Berlin"),
    ("DE", "40", "Hamburg"),
    ("DE", "69", "Frankfurt am Main"),
    ("DE", "89", "Munich"),
    ("DE", "221", "Cologne"),
    ("FR", "1", "Paris"),
    ("JP", "3", "Tokyo"),
    ("JP", "6", "Osaka"),
    ("IN", "11", "New Delhi"),
    ("IN", "22", "Mumbai"),
    ("IN", "33", "Kolkata"),
    ("IN", "44", "Chennai"),
    ("RU", "495", "Moscow"),
    ("RU", "812", "Saint Petersburg"),
    ("BR", "11", "Sao Paulo"),
    ("BR", "21", "Rio de Janeiro"),
    ("CN", "10", "Beijing"),
    ("CN", "21", "Shanghai"),
    ("AU", "2", "Sydney, New South Wales"),
    ("AU", "3", "Melbourne, Victoria"),
    ("AU", "7", "Brisbane, Queensland"),
];

/// Longest-prefix locality lookup within a region.
pub struct LocalityTable {
    entries: Vec<(&'static str, &'static str, &'static str)>,
}

impl LocalityTable {
    pub fn new() -> Self {
        Self::from_entries(LOCALITIES)
    }

    pub fn from_entries(entries: &'static [(&'static str, &'static str, &'static str)]) -> Self {
        let mut entries: Vec<_> = entries.to_vec();
        entries.sort_by_key(|(_, prefix, _)| std::cmp::Reverse(prefix.len()));
        Self { entries }
    }

    pub fn locality_for(&self, region: &str, national_number: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry_region, prefix, _)| {
                *entry_region == region && national_number.starts_with(prefix)
            })
            .map(|(_, _, place)| *place)
    }
}

impl Default for LocalityTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::LocalityTable;

    #[test]
    fn resolves_area_codes_to_places() {
        let table = LocalityTable::new();
        assert_eq!(
            table.locality_for("US", "4155552671"),
            Some("San Francisco, California")
        );
    }

    #[test]
    fn region_scoping_prevents_cross_plan_hits() {
        let table = LocalityTable::new();
        // The Sao Paulo prefix must not claim Delhi numbers.
        assert_eq!(table.locality_for("IN", "1123456789"), Some("New Delhi"));
        assert_eq!(table.locality_for("BR", "1123456789"), Some("Sao Paulo"));
    }

    #[test]
    fn unknown_prefixes_fall_through() {
        let table = LocalityTable::new();
        assert_eq!(table.locality_for("US", "9075551234"), None);
    }
}
