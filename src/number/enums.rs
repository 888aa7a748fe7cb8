use strum::EnumIter;

/// Categorizes phone numbers based on their primary use.
///
/// The classification follows the numbering-plan descriptors: each region
/// defines digit patterns per category, and a national number is assigned
/// the first category whose pattern it matches in full.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// Traditional landline numbers tied to a specific geographic area.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used in regions (e.g., the USA) where fixed-line and mobile numbers
    /// cannot be distinguished by looking at the number itself.
    FixedLineOrMobile,
    /// Calls are free for the caller; the recipient pays.
    TollFree,
    /// Numbers charged at a higher rate than normal calls.
    PremiumRate,
    /// The call cost is split between caller and recipient.
    SharedCost,
    /// Numbers for services that carry voice calls over the internet.
    VoIP,
    /// A number associated with a person rather than a line or device.
    PersonalNumber,
    /// Numbers for paging devices.
    Pager,
    /// Universal Access Numbers, routed by the receiving company.
    Uan,
    /// Direct voicemail access numbers.
    Voicemail,
    /// The number does not match any known pattern for its region.
    Unknown,
}

impl NumberType {
    /// Human-readable label used by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            NumberType::FixedLine => "Fixed Line",
            NumberType::Mobile => "Mobile",
            NumberType::FixedLineOrMobile => "Fixed Line or Mobile",
            NumberType::TollFree => "Toll-Free",
            NumberType::PremiumRate => "Premium Rate",
            NumberType::SharedCost => "Shared Cost",
            NumberType::VoIP => "VoIP",
            NumberType::PersonalNumber => "Personal Number",
            NumberType::Pager => "Pager",
            NumberType::Uan => "Company Number (UAN)",
            NumberType::Voicemail => "Voicemail",
            NumberType::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::NumberType;

    #[test]
    fn every_type_has_a_label() {
        for number_type in NumberType::iter() {
            assert!(!number_type.label().is_empty());
        }
    }
}
