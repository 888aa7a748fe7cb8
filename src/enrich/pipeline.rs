use std::time::Duration;

use log::{debug, warn};

use crate::data::{CarrierTable, LocalityTable, TimezoneTable, WorldTable, TYPE_PATTERNS};
use crate::number::{parse, ParsedNumber, RawInput};
use crate::providers::{GeocodeError, Geocoder};

use super::carrier::MetadataRegistry;
use super::errors::{InspectError, InternalFault, LookupError, LookupOutcome};
use super::geo;
use super::report::{CarrierInfo, GeoEstimate, LocalTime, Report, WorldContext};
use super::time;

const NO_REGION_REASON: &str = "number has no geographic region";

#[derive(Debug, Clone)]
pub struct InspectorConfig {
    /// Deadline for the network-backed coordinate lookup. Elapsing it
    /// downgrades the field to unavailable, never aborts the report.
    pub geocode_timeout: Duration,
    /// Skip the network lookup entirely and record it as unavailable.
    pub offline: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            geocode_timeout: Duration::from_secs(8),
            offline: false,
        }
    }
}

/// The enrichment pipeline: parse, fan out the independent lookups, and
/// merge whatever came back into one report.
///
/// All tables live in this explicitly constructed context object so tests
/// can substitute their own data and geocoder.
pub struct Inspector {
    metadata: MetadataRegistry,
    world: WorldTable,
    timezones: TimezoneTable,
    localities: LocalityTable,
    geocoder: Box<dyn Geocoder>,
    config: InspectorConfig,
}

impl Inspector {
    pub fn new(geocoder: Box<dyn Geocoder>, config: InspectorConfig) -> Self {
        Self {
            metadata: MetadataRegistry::with_tables(TYPE_PATTERNS, CarrierTable::new()),
            world: WorldTable::new(),
            timezones: TimezoneTable::new(),
            localities: LocalityTable::new(),
            geocoder,
            config,
        }
    }

    /// Test seam: run the pipeline against substitute tables.
    pub fn with_tables(
        geocoder: Box<dyn Geocoder>,
        config: InspectorConfig,
        metadata: MetadataRegistry,
        world: WorldTable,
        timezones: TimezoneTable,
        localities: LocalityTable,
    ) -> Self {
        Self {
            metadata,
            world,
            timezones,
            localities,
            geocoder,
            config,
        }
    }

    /// Runs the whole pipeline for one raw input.
    ///
    /// Unparseable or invalid input aborts before any lookup. Given a
    /// valid number, the three lookups run concurrently and each writes
    /// only its own result slot; total latency is bounded by the slowest
    /// lookup, not their sum. Only a corrupt bundled table aborts after
    /// that point.
    pub async fn inspect(&self, raw: &RawInput) -> Result<Report, InspectError> {
        let number = parse(raw)?;
        debug!("enriching {}", number.e164);
        let (carrier, world_and_geo, time) = tokio::join!(
            self.lookup_metadata(&number),
            self.resolve_geo(&number),
            self.resolve_time(&number),
        );
        let (world, geo) = world_and_geo?;
        Ok(Report::assemble(number, carrier, world, geo, time))
    }

    async fn lookup_metadata(&self, number: &ParsedNumber) -> LookupOutcome<CarrierInfo> {
        self.metadata.lookup(number)
    }

    async fn resolve_time(&self, number: &ParsedNumber) -> LookupOutcome<LocalTime> {
        match &number.region {
            Some(region) => time::resolve_local_time(&self.timezones, region),
            None => Err(LookupError::Unavailable(NO_REGION_REASON.to_string())),
        }
    }

    async fn resolve_geo(
        &self,
        number: &ParsedNumber,
    ) -> Result<(LookupOutcome<WorldContext>, LookupOutcome<GeoEstimate>), InternalFault> {
        let Some(region) = &number.region else {
            let reason = LookupError::Unavailable(NO_REGION_REASON.to_string());
            return Ok((Err(reason.clone()), Err(reason)));
        };
        let (record, context) = geo::world_context(&self.world, region)?;
        let estimate = self.estimate_coordinate(record, number).await;
        Ok((Ok(context), estimate))
    }

    async fn estimate_coordinate(
        &self,
        record: &'static crate::data::CountryRecord,
        number: &ParsedNumber,
    ) -> LookupOutcome<GeoEstimate> {
        if self.config.offline {
            return Err(LookupError::Unavailable(
                "offline mode: geocoding skipped".to_string(),
            ));
        }
        let query = geo::geocode_query(&self.localities, record, number);
        match tokio::time::timeout(self.config.geocode_timeout, self.geocoder.resolve(&query)).await
        {
            Ok(Ok(coordinate)) => Ok(GeoEstimate::new(coordinate, query)),
            Ok(Err(GeocodeError::NoMatch(query))) => Err(LookupError::Unavailable(format!(
                "no geocoding match for '{}'",
                query
            ))),
            Ok(Err(GeocodeError::Transport(reason))) => {
                warn!("geocoding failed for '{}': {}", query, reason);
                Err(LookupError::Provider(reason))
            }
            Err(_) => {
                warn!(
                    "geocoding '{}' timed out after {:?}",
                    query, self.config.geocode_timeout
                );
                Err(LookupError::TimedOut(self.config.geocode_timeout))
            }
        }
    }
}
