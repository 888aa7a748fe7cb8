pub mod nominatim;

use async_trait::async_trait;
use thiserror::Error;

pub use nominatim::NominatimClient;

/// An area-level coordinate, precise to the scale of a city or numbering
/// area at best.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The provider answered but had no coordinate for the query.
    #[error("no geocoding match for '{0}'")]
    NoMatch(String),
    /// Network or provider-side failure.
    #[error("geocoding provider error: {0}")]
    Transport(String),
}

/// Capability interface for resolving a place name to a coordinate, so
/// the pipeline can run against deterministic fakes in tests instead of a
/// live provider.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError>;
}
