//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **geocode**: reqwest-backed Google Geocoding client
//! - **persistence**: PostgreSQL-backed lead repository using Diesel ORM
//!
//! Adapters are thin translators between domain types and wire or storage
//! representations; they contain no business logic.

pub mod geocode;
pub mod persistence;
