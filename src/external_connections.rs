use sqlx::SqliteConnection;

/// A borrowed handle onto the store's connection which driven adapters run their queries against
pub trait ConnectionHandle: Send {
    fn borrow_connection(&mut self) -> &mut SqliteConnection;
}

/// Abstraction over the external systems the application talks to. Business logic only ever sees
/// this trait, so driven adapters can be handed a real store in production and a fake in tests.
pub trait ExternalConnectivity: Sync {
    type DbHandle<'cxn_borrow>: ConnectionHandle
    where
        Self: 'cxn_borrow;

    /// Acquires the store connection. There is only ever one, so concurrent callers wait here
    /// until the previous handle is dropped.
    async fn database_cxn(&mut self) -> Result<Self::DbHandle<'_>, anyhow::Error>;
}
