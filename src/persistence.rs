pub mod db_todo_driven_ports;

use crate::external_connections;
use crate::external_connections::ConnectionHandle;
use anyhow::Context;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use std::str::FromStr;

/// Idempotent schema statement for the one table the application owns
const CREATE_TODOS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        completed BOOLEAN DEFAULT 0,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
";

/// Opens the SQLite store at [db_url] and makes sure the todo table exists.
///
/// The pool holds exactly one connection which is never closed for idleness or age. SQLite
/// serializes work on a connection, so every request effectively queues on that one connection.
/// Keeping it alive also matters for `sqlite::memory:` URLs, where closing the connection
/// would throw the database away.
pub async fn connect_sqlite(db_url: &str) -> Result<SqlitePool, anyhow::Error> {
    let connect_options = SqliteConnectOptions::from_str(db_url)
        .with_context(|| format!("parsing database URL {db_url}"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_options)
        .await
        .context("opening the todo database")?;

    sqlx::query(CREATE_TODOS_TABLE)
        .execute(&pool)
        .await
        .context("creating the todos table")?;

    Ok(pool)
}

/// Data structure which owns clients for connecting to external systems.
/// Allows business logic to be agnostic of the external systems it communicates with
/// so driven adapters can easily be swapped out for other implementations
#[derive(Clone)]
pub struct ExternalConnectivity {
    db: SqlitePool,
}

impl ExternalConnectivity {
    /// Wraps an already opened store, see [connect_sqlite]
    pub fn new(db: SqlitePool) -> Self {
        ExternalConnectivity { db }
    }
}

/// A handle from ExternalConnectivity which holds the store's connection until dropped
pub struct PoolConnectionHandle {
    active_connection: PoolConnection<Sqlite>,
}

impl ConnectionHandle for PoolConnectionHandle {
    fn borrow_connection(&mut self) -> &mut SqliteConnection {
        &mut self.active_connection
    }
}

impl external_connections::ExternalConnectivity for ExternalConnectivity {
    type DbHandle<'cxn_borrow> = PoolConnectionHandle;

    async fn database_cxn(&mut self) -> Result<Self::DbHandle<'_>, anyhow::Error> {
        let handle = PoolConnectionHandle {
            active_connection: self
                .db
                .acquire()
                .await
                .context("acquiring the store connection")?,
        };

        Ok(handle)
    }
}

/// Utility DTO for retrieving the ID of a newly inserted record
#[derive(sqlx::FromRow)]
struct NewId {
    id: i64,
}
