//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::LeadIntake;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Lead-submission pipeline entry point.
    pub leads: Arc<dyn LeadIntake>,
}

impl HttpState {
    /// Construct state over a lead-intake port implementation.
    pub fn new(leads: Arc<dyn LeadIntake>) -> Self {
        Self { leads }
    }
}
