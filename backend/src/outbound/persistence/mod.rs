//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters only: row structs (`models.rs`) and table definitions
//! (`schema.rs`) are internal, connections come from a `bb8` pool via
//! `diesel-async`, and every database error is mapped into the domain's
//! repository error type. Migrations are embedded and applied at startup.

mod diesel_lead_repository;
mod models;
mod pool;
mod schema;

pub use diesel_lead_repository::DieselLeadRepository;
pub use pool::{DbPool, PoolError};

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations shipped with the binary, applied before the server binds.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while applying startup migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("migration connection failed: {message}")]
    Connect {
        /// Connection failure detail.
        message: String,
    },
    /// A migration failed to apply.
    #[error("migration failed to apply: {message}")]
    Apply {
        /// Harness failure detail.
        message: String,
    },
}

/// Apply pending migrations over a short-lived blocking connection.
///
/// The migration harness is synchronous, so the run is pushed onto the
/// blocking pool rather than stalling the async runtime.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection or the harness fails.
pub async fn run_startup_migrations(database_url: &str) -> Result<(), MigrationError> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url).map_err(|err| {
            MigrationError::Connect {
                message: err.to_string(),
            }
        })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })
    })
    .await
    .map_err(|err| MigrationError::Apply {
        message: format!("migration task panicked: {err}"),
    })?
}
