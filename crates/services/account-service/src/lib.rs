//! Account Service Library
//!
//! Storage mapping for learning-platform accounts: the SeaORM row entity,
//! the domain <-> row mapper, the account repository and the schema
//! migrations. Application code builds `domain::Account` values and hands
//! them to an [`AccountRepository`].

pub mod config;
pub mod infra;
pub mod repository;

use tracing::info;

pub use crate::config::AccountServiceConfig;
pub use crate::infra::Database;
pub use crate::repository::{AccountRepository, AccountStore};

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &AccountServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Check that the configured database is reachable.
pub async fn check_connection(config: &AccountServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database is reachable");
    Ok(())
}
