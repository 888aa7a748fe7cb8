/// Carrier names keyed by full-number digit prefixes (country code plus
/// the leading national digits, no `+`).
///
/// This is best-effort bundled data: number portability means a prefix
/// only identifies the original assignee, and NANPA regions are omitted
/// entirely because portability makes any mapping there meaningless.
pub const CARRIER_PREFIXES: &[(&str, &str)] = &[
    // United Kingdom
    ("44740", "Three"),
    ("44750", "Vodafone"),
    ("44770", "O2"),
    ("44780", "EE"),
    ("44790", "EE"),
    // Germany
    ("49151", "Telekom"),
    ("49152", "Vodafone"),
    ("49157", "E-Plus"),
    ("49159", "O2"),
    ("49160", "Telekom"),
    ("49162", "Vodafone"),
    ("49163", "E-Plus"),
    ("49170", "Telekom"),
    ("49171", "Telekom"),
    ("49172", "Vodafone"),
    ("49173", "Vodafone"),
    ("49175", "Telekom"),
    ("49176", "O2"),
    ("49177", "E-Plus"),
    ("49178", "E-Plus"),
    ("49179", "O2"),
    // Russia
    ("7903", "Beeline"),
    ("7905", "Beeline"),
    ("7906", "Beeline"),
    ("7910", "MTS"),
    ("7915", "MTS"),
    ("7916", "MTS"),
    ("7920", "MegaFon"),
    ("7921", "MegaFon"),
    ("7926", "MegaFon"),
    // India
    ("9194", "BSNL"),
    ("9196", "Jio"),
    ("9198", "Airtel"),
    ("9199", "Vodafone Idea"),
    // Indonesia
    ("62811", "Telkomsel"),
    ("62812", "Telkomsel"),
    ("62813", "Telkomsel"),
    ("62814", "Indosat Ooredoo"),
    ("62815", "Indosat Ooredoo"),
    ("62816", "Indosat Ooredoo"),
    ("62817", "XL Axiata"),
    ("62818", "XL Axiata"),
    ("62819", "XL Axiata"),
    ("62821", "Telkomsel"),
    ("62822", "Telkomsel"),
    ("62881", "Smartfren"),
    ("62895", "3 Indonesia"),
    // Nigeria
    ("234703", "MTN"),
    ("234802", "Airtel"),
    ("234803", "MTN"),
    ("234805", "Glo"),
    ("234806", "MTN"),
    ("234807", "Glo"),
    ("234808", "Airtel"),
    ("234809", "9mobile"),
    ("234817", "9mobile"),
    // Kenya
    ("25470", "Safaricom"),
    ("25471", "Safaricom"),
    ("25472", "Safaricom"),
    ("25473", "Airtel"),
    ("25478", "Airtel"),
    // Pakistan
    ("9230", "Jazz"),
    ("9231", "Zong"),
    ("9233", "Ufone"),
    ("9234", "Telenor"),
    // Bangladesh
    ("88017", "Grameenphone"),
    ("88018", "Robi"),
    ("88019", "Banglalink"),
];

/// Longest-prefix carrier lookup. Entries are re-sorted by prefix length
/// at construction so the most specific prefix always wins.
pub struct CarrierTable {
    entries: Vec<(&'static str, &'static str)>,
}

impl CarrierTable {
    pub fn new() -> Self {
        Self::from_entries(CARRIER_PREFIXES)
    }

    pub fn from_entries(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut entries: Vec<_> = entries.to_vec();
        entries.sort_by_key(|(prefix, _)| std::cmp::Reverse(prefix.len()));
        Self { entries }
    }

    /// Looks up the carrier for a full digit string (country code followed
    /// by the national number).
    pub fn name_for(&self, full_digits: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(prefix, _)| full_digits.starts_with(prefix))
            .map(|(_, name)| *name)
    }
}

impl Default for CarrierTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::CarrierTable;

    #[test]
    fn longest_prefix_wins() {
        let table = CarrierTable::from_entries(&[("62", "wrong"), ("62811", "Telkomsel")]);
        assert_eq!(table.name_for("628111234567"), Some("Telkomsel"));
    }

    #[test]
    fn ported_regions_have_no_entry() {
        let table = CarrierTable::new();
        assert_eq!(table.name_for("14155552671"), None);
    }

    #[test]
    fn bundled_data_resolves_known_ranges() {
        let table = CarrierTable::new();
        assert_eq!(table.name_for("447700900123"), Some("O2"));
        assert_eq!(table.name_for("4915212345678"), Some("Vodafone"));
    }
}
