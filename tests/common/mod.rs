#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use dataform::provision::Connection;
use dataform::session::{Connector, Executor};
use dataform::types::Role;

pub const HOST: &str = "mock.internal";
pub const PORT: u16 = 5432;
pub const ADMIN_USER: &str = "postgres";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Connect { user: String, database: String },
    Execute { user: String, sql: String },
    Close { user: String },
}

#[derive(Default)]
struct ServerState {
    events: Vec<Event>,
    executed: usize,
    databases: HashSet<String>,
}

/// An in-memory stand-in for a server that accepts every statement, except
/// duplicate `CREATE DATABASE` statements and any injected failure.
#[derive(Clone, Default)]
pub struct MockServer {
    state: Arc<Mutex<ServerState>>,
    fail_statement: Option<usize>,
    fail_connect_as: Option<String>,
    fail_close_as: Option<String>,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the `n`th statement executed on this server (1-based).
    pub fn fail_statement(mut self, n: usize) -> Self {
        self.fail_statement = Some(n);
        self
    }

    /// Refuses connections authenticated as `user`.
    pub fn fail_connect_as(mut self, user: &str) -> Self {
        self.fail_connect_as = Some(user.to_string());
        self
    }

    /// Fails the terminate handshake of sessions authenticated as `user`.
    pub fn fail_close_as(mut self, user: &str) -> Self {
        self.fail_close_as = Some(user.to_string());
        self
    }

    fn state(&self) -> MutexGuard<'_, ServerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn session(&self, database: &str, user: &str) -> MockSession {
        self.state().events.push(Event::Connect {
            user: user.to_string(),
            database: database.to_string(),
        });
        MockSession {
            user: user.to_string(),
            state: Arc::clone(&self.state),
            fail_statement: self.fail_statement,
            fail_close: self.fail_close_as.as_deref() == Some(user),
        }
    }

    /// The caller-supplied administrative connection.
    pub fn admin_connection(&self) -> Connection<MockSession> {
        Connection::new(HOST, PORT, ADMIN_USER, self.session("postgres", ADMIN_USER))
    }

    pub fn events(&self) -> Vec<Event> {
        self.state().events.clone()
    }

    /// Every statement attempted, in order, with the user that issued it.
    pub fn statements(&self) -> Vec<(String, String)> {
        self.state()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Execute { user, sql } => Some((user.clone(), sql.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Connector for MockServer {
    type Executor = MockSession;

    fn host(&self) -> &str {
        HOST
    }

    fn port(&self) -> u16 {
        PORT
    }

    async fn connect(&self, database: &str, role: &Role) -> Result<MockSession, sqlx::Error> {
        if self.fail_connect_as.as_deref() == Some(role.name.as_str()) {
            return Err(sqlx::Error::Protocol(format!(
                "password authentication failed for user \"{}\"",
                role.name
            )));
        }
        Ok(self.session(database, &role.name))
    }
}

pub struct MockSession {
    user: String,
    state: Arc<Mutex<ServerState>>,
    fail_statement: Option<usize>,
    fail_close: bool,
}

impl Executor for MockSession {
    async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.executed += 1;
        state.events.push(Event::Execute {
            user: self.user.clone(),
            sql: sql.to_string(),
        });

        if self.fail_statement == Some(state.executed) {
            return Err(sqlx::Error::Protocol("injected failure".to_string()));
        }
        if sql.starts_with("CREATE DATABASE ") && !state.databases.insert(sql.to_string()) {
            return Err(sqlx::Error::Protocol("database already exists".to_string()));
        }
        Ok(())
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.events.push(Event::Close { user: self.user });
        if self.fail_close {
            return Err(sqlx::Error::Protocol(
                "connection reset during terminate".to_string(),
            ));
        }
        Ok(())
    }
}
