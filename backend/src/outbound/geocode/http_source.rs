//! Reqwest-backed Google Geocoding adapter.
//!
//! Owns transport details only: request construction, timeout and HTTP error
//! mapping, and JSON decoding into the domain [`GeoResult`]. One upstream
//! call per lookup; no caching, no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::GeocodeResponseDto;
use crate::domain::GeoResult;
use crate::domain::ports::{Geocoder, GeocoderError};

/// Public Google Geocoding API endpoint.
pub const GOOGLE_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Upstream lookups are cheap; anything slower than this is treated as down.
const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Geocoder adapter performing HTTP GET requests against one endpoint.
pub struct GoogleGeocoder {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    /// Build an adapter with the default lookup timeout.
    ///
    /// The API key may be absent; lookups then fail with a configuration
    /// error without sending a request.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, api_key: Option<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, api_key, DEFAULT_LOOKUP_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(
        endpoint: Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn locate_zip(&self, zip: &str) -> Result<GeoResult, GeocoderError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(GeocoderError::configuration(
                "GEOCODING_API_KEY is not set",
            ));
        };

        let components = format!("postal_code:{zip}|country:USA");
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("components", components.as_str()), ("key", key)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(GeocoderError::transport(format!(
                "upstream returned HTTP {}",
                status.as_u16()
            )));
        }

        parse_geo_result(body.as_ref())
    }
}

fn parse_geo_result(body: &[u8]) -> Result<GeoResult, GeocoderError> {
    let decoded: GeocodeResponseDto = serde_json::from_slice(body)
        .map_err(|error| GeocoderError::data(format!("invalid geocode JSON payload: {error}")))?;
    decoded.into_geo_result()
}

fn map_transport_error(error: reqwest::Error) -> GeocoderError {
    if error.is_timeout() {
        GeocoderError::transport(format!("lookup timed out: {error}"))
    } else {
        GeocoderError::transport(error.to_string())
    }
}
