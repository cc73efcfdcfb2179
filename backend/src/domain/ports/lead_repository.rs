//! Driven port for lead persistence.
//!
//! One operation: write the profile and location records for a validated
//! submission as a single atomic batch. Atomicity is the store's job — the
//! adapter must delegate to the store's transactional primitive, never
//! sequence two independent writes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{GeoResult, LeadSubmission};

/// Errors raised by lead repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadRepositoryError {
    /// A store connection could not be established or was lost.
    #[error("lead store connection failed: {message}")]
    Connection {
        /// Connection detail.
        message: String,
    },
    /// The write itself failed; the transaction rolled back.
    #[error("lead store write failed: {message}")]
    Query {
        /// Store error detail.
        message: String,
    },
}

impl LeadRepositoryError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for the atomic dual-write of one lead.
///
/// Implementations allocate one fresh identifier, build the profile and
/// location records from the submission and geocode result, and commit both
/// in one transaction. On any failure nothing is written and the error is
/// returned; subsequent reads never observe a half-written pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Persist one submission and its resolved location; returns the shared
    /// identifier of the new record pair.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError`] when the connection or the
    /// transactional write fails.
    async fn create_lead(
        &self,
        submission: &LeadSubmission,
        location: &GeoResult,
    ) -> Result<Uuid, LeadRepositoryError>;
}

/// Fixture repository that discards the records and returns a fresh id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLeadRepository;

#[async_trait]
impl LeadRepository for FixtureLeadRepository {
    async fn create_lead(
        &self,
        _submission: &LeadSubmission,
        _location: &GeoResult,
    ) -> Result<Uuid, LeadRepositoryError> {
        Ok(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::LeadForm;
    use crate::domain::validation::validate;

    fn submission() -> LeadSubmission {
        validate(
            LeadForm {
                name: Some("Dana Frey".to_owned()),
                email: Some("dana@example.com".to_owned()),
                project: Some("Fence repair".to_owned()),
                zip: Some("06119".to_owned()),
                consent: Some("yes".to_owned()),
                ..LeadForm::default()
            }
            .normalize(),
        )
        .expect("fixture submission is valid")
    }

    #[tokio::test]
    async fn fixture_repository_returns_distinct_ids() {
        let location = GeoResult {
            latitude: 41.76,
            longitude: -72.74,
            town: String::new(),
            state: String::new(),
        };
        let first = FixtureLeadRepository
            .create_lead(&submission(), &location)
            .await
            .expect("fixture write should succeed");
        let second = FixtureLeadRepository
            .create_lead(&submission(), &location)
            .await
            .expect("fixture write should succeed");
        assert_ne!(first, second);
    }
}
