use std::time::Duration;

use thiserror::Error;

use crate::number::{InputFormatError, InvalidNumberError, ParseFailure, RegionCode};

/// Soft lookup failures. These never abort the pipeline; the assembler
/// absorbs them into the report's per-field status map.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    /// The data source has no record; an expected outcome, not a fault.
    #[error("{0}")]
    Unavailable(String),
    /// The lookup exceeded its deadline; treated like a provider miss.
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
    /// Network or provider-side failure during the lookup.
    #[error("provider error: {0}")]
    Provider(String),
}

pub type LookupOutcome<T> = Result<T, LookupError>;

/// Our bundled data is broken. Kept apart from [`LookupError`] because a
/// corrupt table is a defect in this program, not a gap at a provider.
#[derive(Debug, Error, PartialEq)]
pub enum InternalFault {
    #[error("world table has no entry for region {0}; bundled data is corrupt")]
    WorldTableMissing(RegionCode),
}

/// The fatal pipeline outcomes. Everything else degrades into a report
/// field marked unavailable.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{0}")]
    Format(#[from] InputFormatError),
    #[error("{0}")]
    Invalid(#[from] InvalidNumberError),
    #[error("{0}")]
    Internal(#[from] InternalFault),
}

impl From<ParseFailure> for InspectError {
    fn from(value: ParseFailure) -> Self {
        match value {
            ParseFailure::Format(err) => err.into(),
            ParseFailure::Invalid(err) => err.into(),
        }
    }
}
