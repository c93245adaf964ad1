//! Database migration runner.
//!
//! Migrations live in the workspace-level `migrations/` directory as
//! plain SQL files named `NNNN_description.sql` and are embedded into
//! the binary at compile time, so a deployed server carries its own
//! schema history.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use stayhub_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(
        count = MIGRATOR.migrations.len(),
        "Running database migrations..."
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database migrations completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_migrations_are_present_and_ordered() {
        let versions: Vec<i64> = MIGRATOR.migrations.iter().map(|m| m.version).collect();
        assert!(!versions.is_empty());
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }
}
