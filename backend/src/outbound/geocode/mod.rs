//! Outbound geocoding adapter.

mod dto;
mod http_source;

pub use http_source::{GOOGLE_GEOCODE_ENDPOINT, GoogleGeocoder};
