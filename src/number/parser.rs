use std::borrow::Cow;

use log::{debug, trace};
use phonenumber::Mode;

use crate::number::errors::{FormatErrorReason, InputFormatError, InvalidNumberError, ParseFailure};
use crate::number::region::RegionCode;
use crate::string_util;

/// The shortest full number (country code included) in any numbering plan
/// has seven digits; anything below six cannot be a dialable number.
pub const MIN_PLAUSIBLE_DIGITS: usize = 6;

/// The user-supplied string, untouched, plus an optional default region
/// used to resolve numbers written without a country code.
#[derive(Debug, Clone)]
pub struct RawInput {
    pub number: String,
    pub default_region: Option<RegionCode>,
}

impl RawInput {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            default_region: None,
        }
    }

    pub fn with_default_region(number: impl Into<String>, region: RegionCode) -> Self {
        Self {
            number: number.into(),
            default_region: Some(region),
        }
    }
}

/// The structured, validated number every lookup operates on. Immutable
/// once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub country_code: u16,
    pub national_number: String,
    pub region: Option<RegionCode>,
    pub is_valid: bool,
    pub e164: String,
    pub international: String,
    pub national: String,
}

/// Parses and validates a raw input string.
///
/// Parseability and validity are distinct steps: a string can have a
/// plausible number shape yet carry the wrong digit count for its region.
/// The two outcomes map to different [`ParseFailure`] variants so callers
/// can print a format-help message for one and a validity message for the
/// other.
pub fn parse(raw: &RawInput) -> Result<ParsedNumber, ParseFailure> {
    let trimmed = raw.number.trim();
    let digits = string_util::significant_digits(trimmed);
    if digits.is_empty() {
        return Err(InputFormatError::new(trimmed, FormatErrorReason::NotANumber).into());
    }
    if digits.len() < MIN_PLAUSIBLE_DIGITS {
        return Err(InputFormatError::new(trimmed, FormatErrorReason::TooShort).into());
    }

    let hint = raw.default_region.as_ref().and_then(RegionCode::to_country_id);
    if hint.is_none() && !string_util::has_country_code_marker(trimmed) {
        return Err(InputFormatError::new(trimmed, FormatErrorReason::NoCountryCode).into());
    }

    // The parsing engine needs a default region to interpret the `00`
    // international dialing prefix, so rewrite it to `+` up front.
    let candidate: Cow<'_, str> = if !trimmed.contains('+') && digits.starts_with("00") {
        Cow::Owned(format!("+{}", &digits[2..]))
    } else {
        Cow::Borrowed(trimmed)
    };

    let number = phonenumber::parse(hint, candidate.as_ref()).map_err(|err| {
        debug!("parser rejected '{}': {}", trimmed, err);
        InputFormatError::new(trimmed, FormatErrorReason::NotANumber)
    })?;

    let region = number
        .country()
        .id()
        .and_then(|id| RegionCode::new(format!("{id:?}")).ok());
    if !phonenumber::is_valid(&number) {
        return Err(InvalidNumberError::new(trimmed, region).into());
    }

    let parsed = ParsedNumber {
        country_code: number.country().code(),
        national_number: number.national().value().to_string(),
        region,
        is_valid: true,
        e164: number.format().mode(Mode::E164).to_string(),
        international: number.format().mode(Mode::International).to_string(),
        national: number.format().mode(Mode::National).to_string(),
    };
    trace!("parsed '{}' as {}", trimmed, parsed.e164);
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::{parse, ParseFailure, RawInput};
    use crate::number::errors::FormatErrorReason;
    use crate::number::region::RegionCode;

    fn format_reason(result: Result<super::ParsedNumber, ParseFailure>) -> FormatErrorReason {
        match result {
            Err(ParseFailure::Format(err)) => err.reason,
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    #[test]
    fn parses_well_formed_e164() {
        let parsed = parse(&RawInput::new("+14155552671")).unwrap();
        assert!(parsed.is_valid);
        assert_eq!(parsed.e164, "+14155552671");
        assert_eq!(parsed.country_code, 1);
        assert_eq!(parsed.region, Some(RegionCode::new("US").unwrap()));
    }

    #[test]
    fn tolerates_formatting_noise() {
        let parsed = parse(&RawInput::new(" +1 (415) 555-2671 ")).unwrap();
        assert_eq!(parsed.e164, "+14155552671");
    }

    #[test]
    fn accepts_international_dialing_prefix() {
        let parsed = parse(&RawInput::new("0044 20 7946 0958")).unwrap();
        assert_eq!(parsed.region, Some(RegionCode::new("GB").unwrap()));
    }

    #[test]
    fn reparsing_e164_output_is_stable() {
        let first = parse(&RawInput::new("+44 20 7946 0958")).unwrap();
        let second = parse(&RawInput::new(first.e164.as_str())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn resolves_against_default_region() {
        let raw = RawInput::with_default_region("(415) 555-2671", RegionCode::new("US").unwrap());
        let parsed = parse(&raw).unwrap();
        assert_eq!(parsed.e164, "+14155552671");
    }

    #[test]
    fn too_few_digits_is_a_format_error() {
        let reason = format_reason(parse(&RawInput::new("12345")));
        assert_eq!(reason, FormatErrorReason::TooShort);
    }

    #[test]
    fn letters_are_not_a_number() {
        let reason = format_reason(parse(&RawInput::new("call me maybe")));
        assert_eq!(reason, FormatErrorReason::NotANumber);
    }

    #[test]
    fn missing_country_code_without_hint_is_rejected() {
        let reason = format_reason(parse(&RawInput::new("415 555 2671")));
        assert_eq!(reason, FormatErrorReason::NoCountryCode);
    }

    #[test]
    fn wrong_digit_count_for_region_is_invalid_not_unparseable() {
        let result = parse(&RawInput::new("+11234567890"));
        assert!(matches!(result, Err(ParseFailure::Invalid(_))));
    }
}
