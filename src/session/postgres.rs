use sqlx::{Connection, PgConnection};

use super::{Connector, Executor};
use crate::config::ServerConfig;
use crate::types::Role;

/// Opens PostgreSQL sessions on the server described by a [`ServerConfig`].
#[derive(Debug, Clone)]
pub struct PgConnector {
    config: ServerConfig,
}

impl PgConnector {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

impl Connector for PgConnector {
    type Executor = PgSession;

    fn host(&self) -> &str {
        &self.config.host
    }

    fn port(&self) -> u16 {
        self.config.port
    }

    async fn connect(&self, database: &str, role: &Role) -> Result<PgSession, sqlx::Error> {
        let options = self
            .config
            .connect_options(database, &role.name, &role.password);
        let conn = PgConnection::connect_with(&options).await?;
        Ok(PgSession { conn })
    }
}

pub struct PgSession {
    conn: PgConnection,
}

impl Executor for PgSession {
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<(), sqlx::Error>> + Send {
        // Identifiers can't be bound as parameters, so nothing gets prepared.
        async move {
            sqlx::Executor::execute(&mut self.conn, sqlx::raw_sql(sql))
                .await
                .map(|_| ())
        }
    }

    fn close(self) -> impl Future<Output = Result<(), sqlx::Error>> + Send {
        self.conn.close()
    }
}
