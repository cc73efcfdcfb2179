//! Driven port for ZIP-code geocoding.
//!
//! The domain owns the result contract so the pipeline stays adapter
//! agnostic; the HTTP adapter lives in `outbound::geocode`.

use async_trait::async_trait;

use crate::domain::GeoResult;

/// Errors surfaced by geocoder adapters.
///
/// Every failure mode is distinct so callers can log the real cause; none of
/// them may be silently collapsed into a default coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocoderError {
    /// The adapter has no usable credential; no request was sent.
    #[error("geocoder not configured: {message}")]
    Configuration {
        /// What is missing.
        message: String,
    },
    /// Transport or non-success HTTP failure.
    #[error("geocode transport failed: {message}")]
    Transport {
        /// Transport detail, including the HTTP status when one was received.
        message: String,
    },
    /// Upstream answered but reported a non-OK status or zero results.
    #[error("geocode lookup failed with upstream status {status}")]
    Lookup {
        /// Upstream status string, e.g. `ZERO_RESULTS`.
        status: String,
    },
    /// Upstream result could not be decoded into finite coordinates.
    #[error("geocode response unusable: {message}")]
    Data {
        /// Decode detail.
        message: String,
    },
}

impl GeocoderError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a lookup error carrying the upstream status string.
    pub fn lookup(status: impl Into<String>) -> Self {
        Self::Lookup {
            status: status.into(),
        }
    }

    /// Create a data error.
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }
}

/// Port for resolving a five-digit ZIP code to coordinates and locality
/// names, scoped to country USA. Exactly one upstream call per invocation;
/// adapters do not cache or retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up one ZIP code.
    ///
    /// # Errors
    ///
    /// Returns a [`GeocoderError`] variant for configuration, transport,
    /// lookup, and decode failures respectively.
    async fn locate_zip(&self, zip: &str) -> Result<GeoResult, GeocoderError>;
}

/// Fixture geocoder answering every lookup with fixed Hartford-area
/// coordinates. Use it in tests where geocoding is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGeocoder;

#[async_trait]
impl Geocoder for FixtureGeocoder {
    async fn locate_zip(&self, _zip: &str) -> Result<GeoResult, GeocoderError> {
        Ok(GeoResult {
            latitude: 41.7621,
            longitude: -72.742,
            town: "West Hartford".to_owned(),
            state: "CT".to_owned(),
        })
    }
}
