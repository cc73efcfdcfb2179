//! Geocoding result record.

/// Coordinates and locality names resolved for a ZIP code.
///
/// ## Invariants
/// - `latitude` and `longitude` are finite; an upstream result without
///   numeric coordinates is a lookup failure, never defaulted to zero.
/// - `town` and `state` may be empty: locality naming conventions vary and a
///   missing component is not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResult {
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Town or locality name, possibly empty.
    pub town: String,
    /// State or region short code, possibly empty.
    pub state: String,
}
