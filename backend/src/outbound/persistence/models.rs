//! Internal Diesel row structs for the lead tables.
//!
//! Implementation details of the persistence adapter; never exposed to the
//! domain. Rows are owned so they can move into the write transaction.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{public_user_info, user_location};

/// Insertable lead profile row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = public_user_info)]
pub(crate) struct NewPublicUserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project: String,
    pub budget: Option<i64>,
    pub ready_to_hire: bool,
    pub urgent: bool,
    pub consent: bool,
    pub created_at: DateTime<Utc>,
}

/// Insertable lead location row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_location)]
pub(crate) struct NewUserLocationRow {
    pub id: Uuid,
    pub name: String,
    pub contractor: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub state: String,
    pub town: String,
    pub zip: String,
    pub created_at: DateTime<Utc>,
}
