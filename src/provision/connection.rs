use tracing::debug;

use super::Statement;
use crate::error::{Error, Result};
use crate::session::{Connector, Executor};
use crate::types::Role;

/// A session on the server under one role's identity.
pub struct Connection<E> {
    host: String,
    port: u16,
    user: String,
    executor: E,
}

impl<E: Executor> Connection<E> {
    pub fn new(host: impl Into<String>, port: u16, user: impl Into<String>, executor: E) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            executor,
        }
    }

    /// Opens a new session on `database` authenticated as `role`.
    pub async fn open<C>(connector: &C, database: &str, role: &Role) -> Result<Self>
    where
        C: Connector<Executor = E>,
    {
        let executor = connector
            .connect(database, role)
            .await
            .map_err(|source| Error::Connect {
                user: role.name.clone(),
                source,
            })?;
        Ok(Self::new(connector.host(), connector.port(), &role.name, executor))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Executes every statement of every sequence in order, stopping at the
    /// first failure. Nothing is wrapped in a transaction.
    pub async fn exec(&mut self, sequences: &[Statement<'_>]) -> Result<()> {
        for sequence in sequences {
            debug!(user = %self.user, step = %sequence, "executing");
            for sql in sequence.sql() {
                self.executor
                    .execute(&sql)
                    .await
                    .map_err(|source| Error::Statement {
                        step: sequence.to_string(),
                        source,
                    })?;
            }
        }
        Ok(())
    }

    pub async fn close(self) -> Result<()> {
        self.executor.close().await.map_err(Error::from)
    }
}
