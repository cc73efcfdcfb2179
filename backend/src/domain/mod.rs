//! Transport-agnostic core of the lead-capture service.
//!
//! Holds the submission data model, the ordered validator, the redirect
//! resolver, the pipeline service, and the port traits. Nothing in this
//! module performs I/O; adapters live under `inbound` and `outbound`.

pub mod geo;
pub mod lead;
pub mod lead_service;
pub mod ports;
pub mod redirect;
pub mod validation;

pub use self::geo::GeoResult;
pub use self::lead::{LeadCandidate, LeadForm, LeadSubmission};
pub use self::lead_service::LeadIntakeService;
pub use self::validation::{ValidationError, validate};
