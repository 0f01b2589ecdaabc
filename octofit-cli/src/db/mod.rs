//! Database module for OctoFit storage
//!
//! Uses SQLite for storing the served collections:
//! - Users
//! - Teams and their members
//! - Activities
//! - Workouts

pub mod migrations;
pub mod models;
pub mod repository;
pub mod seed;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection
    ///
    /// If the database file doesn't exist, it will be created.
    /// Migrations are run automatically on startup.
    pub async fn new(db_path: &Path) -> Result<Self, sqlx::Error> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                sqlx::Error::Configuration(
                    format!("Failed to create database directory: {}", e).into(),
                )
            })?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
        info!("Connecting to database: {}", db_path.display());

        let options = SqliteConnectOptions::from_str(&db_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };

        info!("Running database migrations...");
        migrations::run_migrations(&db.pool).await?;

        info!("Database initialized successfully");
        Ok(db)
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check whether every collection is empty
    pub async fn is_empty(&self) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT (SELECT COUNT(*) FROM users)
                 + (SELECT COUNT(*) FROM teams)
                 + (SELECT COUNT(*) FROM activities)
                 + (SELECT COUNT(*) FROM workouts)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0 == 0)
    }

    /// Close the database connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
