//! Driving port for the lead-submission pipeline.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::lead::LeadForm;
use crate::domain::ports::{GeocoderError, LeadRepositoryError};
use crate::domain::validation::ValidationError;

/// Receipt for a stored lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReceipt {
    /// Identifier shared by the profile and location records.
    pub lead_id: Uuid,
    /// ZIP code the lead was filed under.
    pub zip: String,
}

/// Pipeline failure families.
///
/// Validation failures are user-recoverable and carry an actionable message;
/// geocode and persistence failures are logged server-side and rendered to
/// the user as a generic retry prompt. No family is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadIntakeError {
    /// The submission failed a validation rule; nothing was looked up or
    /// written.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The geocode lookup failed; nothing was written.
    #[error(transparent)]
    Geocode(#[from] GeocoderError),
    /// The dual-write failed; the store rolled back, nothing is visible.
    #[error(transparent)]
    Persistence(#[from] LeadRepositoryError),
}

/// Port for running the full submission pipeline:
/// normalize → validate → geocode → persist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadIntake: Send + Sync {
    /// Process one raw form submission.
    ///
    /// # Errors
    ///
    /// Returns [`LeadIntakeError`] naming the stage that failed; every
    /// failure is terminal for the request.
    async fn submit(&self, form: LeadForm) -> Result<LeadReceipt, LeadIntakeError>;
}

/// Fixture intake that runs the real normalizer and validator but fabricates
/// the receipt instead of touching the network or a store. Handler tests get
/// genuine validation behavior without I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLeadIntake;

#[async_trait]
impl LeadIntake for FixtureLeadIntake {
    async fn submit(&self, form: LeadForm) -> Result<LeadReceipt, LeadIntakeError> {
        let submission = crate::domain::validation::validate(form.normalize())?;
        Ok(LeadReceipt {
            lead_id: Uuid::new_v4(),
            zip: submission.zip,
        })
    }
}
