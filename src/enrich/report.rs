use chrono::DateTime;
use chrono_tz::Tz;

use crate::number::{NumberType, ParsedNumber};
use crate::providers::Coordinate;

use super::errors::{LookupError, LookupOutcome};

/// Carrier name and line type. The name is frequently absent even for
/// valid mobile numbers; portability broke most prefix-to-carrier maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierInfo {
    pub name: Option<String>,
    pub number_type: NumberType,
}

/// Country-level facts for the number's region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldContext {
    pub country: String,
    pub capital: String,
    pub currency: String,
    pub region_label: String,
    pub borders: Vec<String>,
}

/// An estimated coordinate for the numbering area.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoEstimate {
    pub latitude: f64,
    pub longitude: f64,
    /// The place name that was geocoded.
    pub query: String,
    pub precision_note: &'static str,
}

impl GeoEstimate {
    pub const PRECISION_NOTE: &'static str = "area-level estimate";

    pub fn new(coordinate: Coordinate, query: impl Into<String>) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            query: query.into(),
            precision_note: Self::PRECISION_NOTE,
        }
    }

    pub fn maps_link(&self) -> String {
        format!(
            "https://maps.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

/// The current wall-clock time in the number's primary zone, computed at
/// report assembly and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTime {
    pub zone: String,
    pub now: DateTime<Tz>,
    pub utc_offset: String,
}

impl LocalTime {
    pub fn formatted(&self) -> String {
        self.now.format("%A, %Y-%m-%d, %H:%M:%S %Z%z").to_string()
    }
}

/// Outcome of one optional report field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Success,
    Unavailable(String),
    Error(String),
}

impl FieldStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, FieldStatus::Success)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            FieldStatus::Success => None,
            FieldStatus::Unavailable(reason) | FieldStatus::Error(reason) => Some(reason),
        }
    }
}

impl From<&LookupError> for FieldStatus {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::Unavailable(reason) => FieldStatus::Unavailable(reason.clone()),
            // A timed-out provider and a provider with no record look the
            // same to the reader: the data is unavailable.
            LookupError::TimedOut(_) => FieldStatus::Unavailable(err.to_string()),
            LookupError::Provider(reason) => FieldStatus::Error(reason.clone()),
        }
    }
}

/// Exactly one status per optional field; the assembler never drops a
/// failure silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStatus {
    pub carrier: FieldStatus,
    pub world: FieldStatus,
    pub geo: FieldStatus,
    pub time: FieldStatus,
}

/// The merged, immutable result of one pipeline run. The sole entity the
/// presentation layer and artifact generators consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub number: ParsedNumber,
    pub carrier: Option<CarrierInfo>,
    pub world: Option<WorldContext>,
    pub geo: Option<GeoEstimate>,
    pub time: Option<LocalTime>,
    pub status: ReportStatus,
}

impl Report {
    /// Merges lookup outcomes into a report. Pure bookkeeping: each
    /// failure becomes that field's status, nothing is recomputed.
    pub fn assemble(
        number: ParsedNumber,
        carrier: LookupOutcome<CarrierInfo>,
        world: LookupOutcome<WorldContext>,
        geo: LookupOutcome<GeoEstimate>,
        time: LookupOutcome<LocalTime>,
    ) -> Self {
        let (carrier, carrier_status) = absorb(carrier);
        let (world, world_status) = absorb(world);
        let (geo, geo_status) = absorb(geo);
        let (time, time_status) = absorb(time);
        Self {
            number,
            carrier,
            world,
            geo,
            time,
            status: ReportStatus {
                carrier: carrier_status,
                world: world_status,
                geo: geo_status,
                time: time_status,
            },
        }
    }

    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.number.e164.trim_start_matches('+'))
    }
}

fn absorb<T>(outcome: LookupOutcome<T>) -> (Option<T>, FieldStatus) {
    match outcome {
        Ok(value) => (Some(value), FieldStatus::Success),
        Err(err) => (None, FieldStatus::from(&err)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{CarrierInfo, FieldStatus, GeoEstimate, Report, WorldContext};
    use crate::enrich::errors::LookupError;
    use crate::number::{parse, NumberType, RawInput};
    use crate::providers::Coordinate;

    fn sample_number() -> crate::number::ParsedNumber {
        parse(&RawInput::new("+14155552671")).unwrap()
    }

    fn sample_world() -> WorldContext {
        WorldContext {
            country: "United States".into(),
            capital: "Washington, D.C.".into(),
            currency: "USD".into(),
            region_label: "Americas".into(),
            borders: vec!["Canada".into(), "Mexico".into()],
        }
    }

    #[test]
    fn assemble_records_one_status_per_field() {
        let report = Report::assemble(
            sample_number(),
            Ok(CarrierInfo {
                name: None,
                number_type: NumberType::FixedLineOrMobile,
            }),
            Ok(sample_world()),
            Err(LookupError::TimedOut(Duration::from_secs(8))),
            Err(LookupError::Unavailable("no timezone mapping".into())),
        );
        assert!(report.status.carrier.is_success());
        assert!(report.status.world.is_success());
        assert!(matches!(report.status.geo, FieldStatus::Unavailable(_)));
        assert!(matches!(report.status.time, FieldStatus::Unavailable(_)));
        assert!(report.geo.is_none());
        assert!(report.time.is_none());
    }

    #[test]
    fn provider_failures_are_recorded_as_errors() {
        let report = Report::assemble(
            sample_number(),
            Err(LookupError::Unavailable("no record".into())),
            Ok(sample_world()),
            Err(LookupError::Provider("connection refused".into())),
            Err(LookupError::Unavailable("no mapping".into())),
        );
        assert_eq!(
            report.status.geo,
            FieldStatus::Error("connection refused".into())
        );
        assert_eq!(report.status.geo.reason(), Some("connection refused"));
    }

    #[test]
    fn links_derive_from_the_merged_fields() {
        let report = Report::assemble(
            sample_number(),
            Err(LookupError::Unavailable("no record".into())),
            Ok(sample_world()),
            Ok(GeoEstimate::new(
                Coordinate {
                    latitude: 37.7792,
                    longitude: -122.4193,
                },
                "San Francisco, California",
            )),
            Err(LookupError::Unavailable("no mapping".into())),
        );
        assert_eq!(report.whatsapp_link(), "https://wa.me/14155552671");
        assert_eq!(
            report.geo.unwrap().maps_link(),
            "https://maps.google.com/maps?q=37.7792,-122.4193"
        );
    }
}
