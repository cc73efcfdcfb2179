//! DTOs for decoding Google Geocoding API responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain [`GeoResult`] in one pass.

use serde::Deserialize;

use crate::domain::GeoResult;
use crate::domain::ports::GeocoderError;

const LOCALITY: &str = "locality";
const POSTAL_TOWN: &str = "postal_town";
const ADMIN_AREA_LEVEL_1: &str = "administrative_area_level_1";

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeResponseDto {
    pub(super) status: String,
    #[serde(default)]
    pub(super) results: Vec<GeocodeResultDto>,
    pub(super) error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeResultDto {
    pub(super) geometry: GeometryDto,
    #[serde(default)]
    pub(super) address_components: Vec<AddressComponentDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeometryDto {
    pub(super) location: LocationDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationDto {
    pub(super) lat: Option<f64>,
    pub(super) lng: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddressComponentDto {
    #[serde(default)]
    pub(super) long_name: String,
    #[serde(default)]
    pub(super) short_name: String,
    #[serde(default)]
    pub(super) types: Vec<String>,
}

impl GeocodeResponseDto {
    /// Map the decoded payload into a domain result.
    ///
    /// Non-OK upstream status and an empty result list are lookup failures
    /// carrying the upstream status string; missing or non-finite
    /// coordinates are data failures. Locality names may be absent without
    /// being an error.
    pub(super) fn into_geo_result(self) -> Result<GeoResult, GeocoderError> {
        if self.status != "OK" {
            let status = match self.error_message {
                Some(detail) => format!("{}: {detail}", self.status),
                None => self.status,
            };
            return Err(GeocoderError::lookup(status));
        }
        let Some(first) = self.results.into_iter().next() else {
            return Err(GeocoderError::lookup("OK with zero results"));
        };
        first.into_geo_result()
    }
}

impl GeocodeResultDto {
    fn into_geo_result(self) -> Result<GeoResult, GeocoderError> {
        let (Some(latitude), Some(longitude)) =
            (self.geometry.location.lat, self.geometry.location.lng)
        else {
            return Err(GeocoderError::data(
                "result geometry is missing numeric coordinates",
            ));
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeocoderError::data(
                "result geometry includes non-finite coordinates",
            ));
        }

        let town = find_component(&self.address_components, LOCALITY)
            .or_else(|| find_component(&self.address_components, POSTAL_TOWN))
            .map(|component| component.long_name.clone())
            .unwrap_or_default();
        let state = find_component(&self.address_components, ADMIN_AREA_LEVEL_1)
            .map(|component| component.short_name.clone())
            .unwrap_or_default();

        Ok(GeoResult {
            latitude,
            longitude,
            town,
            state,
        })
    }
}

fn find_component<'a>(
    components: &'a [AddressComponentDto],
    wanted: &str,
) -> Option<&'a AddressComponentDto> {
    components
        .iter()
        .find(|component| component.types.iter().any(|t| t == wanted))
}
