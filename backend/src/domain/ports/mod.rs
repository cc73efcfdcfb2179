//! Domain ports: trait seams between the pure core and its adapters.
//!
//! Driven ports ([`Geocoder`], [`LeadRepository`]) are implemented under
//! `outbound`; the driving port ([`LeadIntake`]) is implemented by the
//! domain pipeline service and consumed by the HTTP adapter. Each port ships
//! a fixture implementation for tests that do not exercise it.

mod geocoder;
mod lead_intake;
mod lead_repository;

pub use geocoder::{FixtureGeocoder, Geocoder, GeocoderError};
pub use lead_intake::{FixtureLeadIntake, LeadIntake, LeadIntakeError, LeadReceipt};
pub use lead_repository::{FixtureLeadRepository, LeadRepository, LeadRepositoryError};

#[cfg(test)]
pub use geocoder::MockGeocoder;
#[cfg(test)]
pub use lead_intake::MockLeadIntake;
#[cfg(test)]
pub use lead_repository::MockLeadRepository;
