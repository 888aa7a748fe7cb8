use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::data::{LocalityTable, TimezoneTable, WorldTable};
use crate::enrich::carrier::MetadataRegistry;
use crate::enrich::errors::{InspectError, InternalFault};
use crate::enrich::pipeline::{Inspector, InspectorConfig};
use crate::enrich::report::FieldStatus;
use crate::number::{NumberType, RawInput, RegionCode};
use crate::providers::{Coordinate, GeocodeError, Geocoder};

const SAN_FRANCISCO: Coordinate = Coordinate {
    latitude: 37.7792,
    longitude: -122.4193,
};

struct FixedGeocoder;

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn resolve(&self, _query: &str) -> Result<Coordinate, GeocodeError> {
        Ok(SAN_FRANCISCO)
    }
}

struct FailingGeocoder;

#[async_trait]
impl Geocoder for FailingGeocoder {
    async fn resolve(&self, _query: &str) -> Result<Coordinate, GeocodeError> {
        Err(GeocodeError::Transport("connection refused".to_string()))
    }
}

struct SilentGeocoder;

#[async_trait]
impl Geocoder for SilentGeocoder {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        Err(GeocodeError::NoMatch(query.to_string()))
    }
}

struct SlowGeocoder;

#[async_trait]
impl Geocoder for SlowGeocoder {
    async fn resolve(&self, _query: &str) -> Result<Coordinate, GeocodeError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(SAN_FRANCISCO)
    }
}

struct CountingGeocoder(Arc<AtomicUsize>);

#[async_trait]
impl Geocoder for CountingGeocoder {
    async fn resolve(&self, _query: &str) -> Result<Coordinate, GeocodeError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(SAN_FRANCISCO)
    }
}

fn inspector(geocoder: Box<dyn Geocoder>) -> Inspector {
    Inspector::new(geocoder, InspectorConfig::default())
}

#[tokio::test]
async fn valid_number_produces_a_full_report() {
    let report = inspector(Box::new(FixedGeocoder))
        .inspect(&RawInput::new("+14155552671"))
        .await
        .unwrap();

    assert_eq!(report.number.e164, "+14155552671");
    assert_eq!(report.number.region, Some(RegionCode::new("US").unwrap()));

    let carrier = report.carrier.as_ref().unwrap();
    assert_eq!(carrier.number_type, NumberType::FixedLineOrMobile);

    let world = report.world.as_ref().unwrap();
    assert_eq!(world.country, "United States");
    assert_eq!(world.capital, "Washington, D.C.");

    let geo = report.geo.as_ref().unwrap();
    assert_eq!(geo.latitude, SAN_FRANCISCO.latitude);
    assert_eq!(geo.precision_note, "area-level estimate");
    assert!(geo.query.starts_with("San Francisco"));

    let time = report.time.as_ref().unwrap();
    assert_eq!(time.zone, "America/New_York");

    assert!(report.status.carrier.is_success());
    assert!(report.status.world.is_success());
    assert!(report.status.geo.is_success());
    assert!(report.status.time.is_success());
}

#[tokio::test]
async fn provider_outage_degrades_only_the_coordinate() {
    let report = inspector(Box::new(FailingGeocoder))
        .inspect(&RawInput::new("+14155552671"))
        .await
        .unwrap();

    assert!(report.geo.is_none());
    assert!(matches!(report.status.geo, FieldStatus::Error(_)));
    // Everything else still came through.
    assert!(report.carrier.is_some());
    assert!(report.world.is_some());
    assert!(report.time.is_some());
}

#[tokio::test]
async fn provider_miss_is_unavailable_not_an_error() {
    let report = inspector(Box::new(SilentGeocoder))
        .inspect(&RawInput::new("+14155552671"))
        .await
        .unwrap();
    assert!(matches!(report.status.geo, FieldStatus::Unavailable(_)));
}

#[tokio::test]
async fn slow_geocoder_times_out_to_unavailable() {
    let config = InspectorConfig {
        geocode_timeout: Duration::from_millis(10),
        offline: false,
    };
    let report = Inspector::new(Box::new(SlowGeocoder), config)
        .inspect(&RawInput::new("+14155552671"))
        .await
        .unwrap();

    match &report.status.geo {
        FieldStatus::Unavailable(reason) => assert!(reason.contains("timed out")),
        other => panic!("expected unavailable, got {:?}", other),
    }
    assert!(report.world.is_some());
    assert!(report.time.is_some());
}

#[tokio::test]
async fn offline_mode_skips_the_network_lookup() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = InspectorConfig {
        geocode_timeout: Duration::from_secs(8),
        offline: true,
    };
    let report = Inspector::new(Box::new(CountingGeocoder(calls.clone())), config)
        .inspect(&RawInput::new("+14155552671"))
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(matches!(report.status.geo, FieldStatus::Unavailable(_)));
}

#[tokio::test]
async fn unparseable_input_aborts_before_any_lookup() {
    let calls = Arc::new(AtomicUsize::new(0));
    let result = inspector(Box::new(CountingGeocoder(calls.clone())))
        .inspect(&RawInput::new("12345"))
        .await;

    assert!(matches!(result, Err(InspectError::Format(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_number_aborts_before_any_lookup() {
    let calls = Arc::new(AtomicUsize::new(0));
    let result = inspector(Box::new(CountingGeocoder(calls.clone())))
        .inspect(&RawInput::new("+11234567890"))
        .await;

    assert!(matches!(result, Err(InspectError::Invalid(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_world_entry_is_a_fatal_internal_fault() {
    static EMPTY_WORLD: &[crate::data::CountryRecord] = &[];
    let inspector = Inspector::with_tables(
        Box::new(FixedGeocoder),
        InspectorConfig::default(),
        MetadataRegistry::new(),
        WorldTable::from_records(EMPTY_WORLD),
        TimezoneTable::new(),
        LocalityTable::new(),
    );

    let result = inspector.inspect(&RawInput::new("+14155552671")).await;
    match result {
        Err(InspectError::Internal(InternalFault::WorldTableMissing(region))) => {
            assert_eq!(region, RegionCode::new("US").unwrap());
        }
        other => panic!("expected an internal fault, got {:?}", other),
    }
}

#[tokio::test]
async fn repeated_runs_differ_only_in_local_time() {
    let first = inspector(Box::new(FixedGeocoder))
        .inspect(&RawInput::new("+447700900123"))
        .await
        .unwrap();
    let second = inspector(Box::new(FixedGeocoder))
        .inspect(&RawInput::new("+447700900123"))
        .await
        .unwrap();

    assert_eq!(first.number, second.number);
    assert_eq!(first.carrier, second.carrier);
    assert_eq!(first.world, second.world);
    assert_eq!(first.geo, second.geo);
    assert_eq!(first.status, second.status);
    // Local time reflects the wall clock; only the zone is stable.
    assert_eq!(
        first.time.as_ref().unwrap().zone,
        second.time.as_ref().unwrap().zone
    );
}
