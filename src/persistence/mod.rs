//! Persistence layer: SQLite storage for venues, artists and shows.
//!
//! [`Database`] owns the `sqlx::SqlitePool`. Reads borrow a pooled
//! connection; every mutation runs inside a [`UnitOfWork`] that commits on
//! success and rolls back on failure. The per-table query functions in
//! [`venues`], [`artists`], [`shows`] and [`search`] all take a
//! `&mut SqliteConnection`, so the same function works on a pooled
//! connection or inside a transaction.

pub mod artists;
pub mod models;
pub mod search;
pub mod shows;
pub mod venues;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Handle to the relational store.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database named by `config.database_url`, creating the file
    /// if needed. Foreign keys are enforced on every connection.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if the URL is invalid or the
    /// database cannot be opened.
    pub async fn connect(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(url = %config.database_url, "database connected");
        Ok(Self::new(pool))
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// The pool holds exactly one connection that never expires, since
    /// every SQLite in-memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if opening or migrating fails.
    pub async fn in_memory() -> Result<Self, DirectoryError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self::new(pool);
        db.migrate().await?;
        Ok(db)
    }

    /// Applies the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), DirectoryError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::debug!("migrations applied");
        Ok(())
    }

    /// Borrows a pooled connection for read-only work.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if no connection can be
    /// acquired.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, DirectoryError> {
        Ok(self.pool.acquire().await?)
    }

    /// Starts a unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if the transaction cannot be
    /// opened.
    pub async fn begin(&self) -> Result<UnitOfWork, DirectoryError> {
        Ok(UnitOfWork {
            tx: self.pool.begin().await?,
        })
    }

    /// Round-trips a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if the store is unreachable.
    pub async fn ping(&self) -> Result<(), DirectoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// One transaction scoped to one mutation.
///
/// Dropping a unit of work without calling [`UnitOfWork::commit`] rolls
/// it back.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    /// Connection to run queries inside the transaction.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commits the transaction.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if the commit fails.
    pub async fn commit(self) -> Result<(), DirectoryError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Rolls the transaction back.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] if the rollback fails.
    pub async fn rollback(self) -> Result<(), DirectoryError> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Commits if `result` is `Ok`, rolls back otherwise, and hands the
    /// result through.
    ///
    /// # Errors
    ///
    /// Returns the error in `result`, or [`DirectoryError::Persistence`] if
    /// the commit fails.
    pub async fn finish<T>(self, result: Result<T, DirectoryError>) -> Result<T, DirectoryError> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

impl fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitOfWork").finish_non_exhaustive()
    }
}
