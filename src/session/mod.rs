//! Server sessions.
//!
//! [`Connector`] opens a session on the server under one role's identity and
//! [`Executor`] runs statements on it. [`PgConnector`] talks to PostgreSQL;
//! [`DryRunConnector`] only records what would have been executed.

mod dry_run;
mod postgres;

use std::future::Future;

pub use dry_run::{DryRunConnector, DryRunSession, PlannedSession};
pub use postgres::{PgConnector, PgSession};

use crate::types::Role;

/// A live session authenticated as a single role.
pub trait Executor: Send {
    /// Executes one complete statement.
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Closes the session.
    fn close(self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

/// Opens sessions on a single server.
pub trait Connector: Send + Sync {
    type Executor: Executor;

    fn host(&self) -> &str;

    fn port(&self) -> u16;

    /// Opens a fresh session on `database` authenticated as `role`.
    fn connect(
        &self,
        database: &str,
        role: &Role,
    ) -> impl Future<Output = Result<Self::Executor, sqlx::Error>> + Send;
}
