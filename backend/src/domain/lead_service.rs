//! Lead-intake pipeline service.
//!
//! Implements the driving [`LeadIntake`] port over the two driven ports.
//! Processing is strictly sequential per submission: normalize → validate →
//! geocode → persist. There is no shared mutable state between submissions
//! and no retry; persistence only starts once a geocode result is in hand,
//! so a failed lookup can never leave documents behind.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::lead::LeadForm;
use crate::domain::ports::{
    Geocoder, LeadIntake, LeadIntakeError, LeadReceipt, LeadRepository,
};
use crate::domain::validation::validate;

/// Pipeline service wiring a geocoder and a lead repository.
#[derive(Clone)]
pub struct LeadIntakeService<G, R> {
    geocoder: Arc<G>,
    leads: Arc<R>,
}

impl<G, R> LeadIntakeService<G, R> {
    /// Create a new service over the given port implementations.
    pub fn new(geocoder: Arc<G>, leads: Arc<R>) -> Self {
        Self { geocoder, leads }
    }
}

#[async_trait]
impl<G, R> LeadIntake for LeadIntakeService<G, R>
where
    G: Geocoder,
    R: LeadRepository,
{
    async fn submit(&self, form: LeadForm) -> Result<LeadReceipt, LeadIntakeError> {
        let submission = validate(form.normalize())?;
        let location = self.geocoder.locate_zip(&submission.zip).await?;
        let lead_id = self.leads.create_lead(&submission, &location).await?;
        info!(%lead_id, zip = %submission.zip, "lead submission stored");
        Ok(LeadReceipt {
            lead_id,
            zip: submission.zip,
        })
    }
}
