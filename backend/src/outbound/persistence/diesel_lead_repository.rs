//! PostgreSQL-backed `LeadRepository` implementation using Diesel ORM.
//!
//! Performs the dual-write for one lead: both rows are inserted inside a
//! single database transaction so a failure on either insert rolls the pair
//! back. Identifier allocation happens here, at the store boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::result::DatabaseErrorKind;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{LeadRepository, LeadRepositoryError};
use crate::domain::{GeoResult, LeadSubmission};

use super::models::{NewPublicUserRow, NewUserLocationRow};
use super::pool::{DbPool, PoolError};
use super::schema::{public_user_info, user_location};

/// Altitude stored for every lead; the geocoder does not resolve elevation.
const FIXED_ALTITUDE: f64 = 0.0;

/// Diesel-backed implementation of the lead repository port.
#[derive(Clone)]
pub struct DieselLeadRepository {
    pool: DbPool,
}

impl DieselLeadRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Build both insertable rows for one lead.
///
/// The profile and location rows share the identifier and creation
/// timestamp; the location row denormalizes the name and fixes the
/// contractor flag false for this entry point.
fn build_rows(
    id: Uuid,
    created_at: DateTime<Utc>,
    submission: &LeadSubmission,
    location: &GeoResult,
) -> (NewPublicUserRow, NewUserLocationRow) {
    let profile = NewPublicUserRow {
        id,
        name: submission.name.clone(),
        email: submission.email.clone(),
        phone: submission.phone.clone(),
        project: submission.project.clone(),
        budget: submission.budget,
        ready_to_hire: submission.ready_to_hire,
        urgent: submission.urgent,
        consent: submission.consent,
        created_at,
    };
    let place = NewUserLocationRow {
        id,
        name: submission.name.clone(),
        contractor: false,
        latitude: location.latitude,
        longitude: location.longitude,
        altitude: FIXED_ALTITUDE,
        state: location.state.clone(),
        town: location.town.clone(),
        zip: submission.zip.clone(),
        created_at,
    };
    (profile, place)
}

fn map_pool_error(error: PoolError) -> LeadRepositoryError {
    match error {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            LeadRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> LeadRepositoryError {
    match &error {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            LeadRepositoryError::connection(info.message().to_owned())
        }
        _ => LeadRepositoryError::query(error.to_string()),
    }
}

#[async_trait]
impl LeadRepository for DieselLeadRepository {
    async fn create_lead(
        &self,
        submission: &LeadSubmission,
        location: &GeoResult,
    ) -> Result<Uuid, LeadRepositoryError> {
        let lead_id = Uuid::new_v4();
        let (profile, place) = build_rows(lead_id, Utc::now(), submission, location);

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                diesel::insert_into(public_user_info::table)
                    .values(&profile)
                    .execute(conn)
                    .await?;
                diesel::insert_into(user_location::table)
                    .values(&place)
                    .execute(conn)
                    .await?;
                Ok::<_, diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)?;

        Ok(lead_id)
    }
}
