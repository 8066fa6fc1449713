use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use super::{Connector, Executor};
use crate::types::Role;

const PASSWORD_MARKER: &str = " PASSWORD ";
const REDACTED: &str = "'********'";

/// Statements one session would have executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedSession {
    pub user: String,
    pub database: String,
    pub statements: Vec<String>,
}

/// A connector that never touches a server. Every session it opens records
/// its statements, with password literals redacted.
#[derive(Debug, Clone)]
pub struct DryRunConnector {
    host: String,
    port: u16,
    sessions: Arc<Mutex<Vec<PlannedSession>>>,
}

impl DryRunConnector {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            sessions: Arc::default(),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, Vec<PlannedSession>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers a session that was opened outside this connector, such as
    /// the caller-supplied admin session.
    pub fn open(&self, database: &str, role: &Role) -> DryRunSession {
        let mut sessions = self.sessions();
        sessions.push(PlannedSession {
            user: role.name.clone(),
            database: database.to_string(),
            statements: Vec::new(),
        });
        DryRunSession {
            index: sessions.len() - 1,
            sessions: Arc::clone(&self.sessions),
        }
    }

    /// Returns every session opened so far, in order.
    #[must_use]
    pub fn planned(&self) -> Vec<PlannedSession> {
        self.sessions().clone()
    }
}

impl Connector for DryRunConnector {
    type Executor = DryRunSession;

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    async fn connect(&self, database: &str, role: &Role) -> Result<DryRunSession, sqlx::Error> {
        Ok(self.open(database, role))
    }
}

pub struct DryRunSession {
    index: usize,
    sessions: Arc<Mutex<Vec<PlannedSession>>>,
}

impl Executor for DryRunSession {
    async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions[self.index].statements.push(redact(sql));
        Ok(())
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// Replaces the literal following `PASSWORD` with a placeholder.
fn redact(sql: &str) -> String {
    match sql.find(PASSWORD_MARKER) {
        Some(i) => format!("{}{REDACTED}", &sql[..i + PASSWORD_MARKER.len()]),
        None => sql.to_string(),
    }
}
