use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use super::{Coordinate, GeocodeError, Geocoder};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = concat!("numlens/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Geocoder backed by the OpenStreetMap Nominatim search API.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        debug!("geocoding '{}' via {}", query, url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "1"),
                ("accept-language", "en"),
            ])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;
        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;
        let place = places
            .first()
            .ok_or_else(|| GeocodeError::NoMatch(query.to_string()))?;
        let latitude = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::Transport(format!("bad latitude '{}'", place.lat)))?;
        let longitude = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::Transport(format!("bad longitude '{}'", place.lon)))?;
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }
}
