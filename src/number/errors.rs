use std::fmt;

use thiserror::Error;

use crate::number::region::RegionCode;

/// Why a raw string never made it into a structured number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatErrorReason {
    /// Fewer digits than the shortest dialable number in any region.
    TooShort,
    /// No leading `+` or `00` and no default region to resolve against.
    NoCountryCode,
    /// The string does not look like a phone number at all.
    NotANumber,
}

impl fmt::Display for FormatErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FormatErrorReason::TooShort => "too short",
            FormatErrorReason::NoCountryCode => "no plausible country code",
            FormatErrorReason::NotANumber => "not a number",
        };
        f.write_str(reason)
    }
}

/// The input could not be parsed into a structured number. Fatal: the
/// pipeline aborts before any lookup runs.
#[derive(Debug, Error, PartialEq)]
#[error("could not parse '{input}': {reason}")]
pub struct InputFormatError {
    pub input: String,
    pub reason: FormatErrorReason,
}

impl InputFormatError {
    pub fn new(input: impl Into<String>, reason: FormatErrorReason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}

/// The input parsed into a structured shape but fails the validity rules
/// of its region (wrong digit count or pattern). Fatal: enrichment is
/// skipped entirely, but callers can tell this apart from unparseable
/// input and phrase their message accordingly.
#[derive(Debug, Error, PartialEq)]
pub struct InvalidNumberError {
    pub input: String,
    pub region: Option<RegionCode>,
}

impl InvalidNumberError {
    pub fn new(input: impl Into<String>, region: Option<RegionCode>) -> Self {
        Self {
            input: input.into(),
            region,
        }
    }
}

impl fmt::Display for InvalidNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid number", self.input)?;
        if let Some(region) = &self.region {
            write!(f, " for region {region}")?;
        }
        Ok(())
    }
}

/// Either of the two fatal parsing outcomes.
#[derive(Debug, Error, PartialEq)]
pub enum ParseFailure {
    #[error("{0}")]
    Format(#[from] InputFormatError),
    #[error("{0}")]
    Invalid(#[from] InvalidNumberError),
}
