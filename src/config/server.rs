use std::path::Path;
use std::{env, fmt, fs};

use serde::{Deserialize, Serialize};
use sqlx::ConnectOptions;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::{Error, Result};
use crate::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    Disable,
    Prefer,
    #[default]
    Require,
}

impl SslMode {
    pub fn parse(s: &str) -> Option<SslMode> {
        match s {
            "disable" => Some(SslMode::Disable),
            "prefer" => Some(SslMode::Prefer),
            "require" => Some(SslMode::Require),
            _ => None,
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
        };
        f.write_str(s)
    }
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// Connection settings for the server a database is provisioned on.
///
/// The admin password is never read from or written to a config file; the
/// file names the environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub admin_user: String,
    #[serde(skip)]
    pub admin_password: String,
    /// Environment variable holding the admin password.
    pub password_env: String,
    /// Database the admin connection opens before the new database exists.
    pub maintenance_database: String,
    pub ssl_mode: SslMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            admin_user: "postgres".to_string(),
            admin_password: String::new(),
            password_env: "PGPASSWORD".to_string(),
            maintenance_database: "postgres".to_string(),
            ssl_mode: SslMode::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: ServerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host cannot be empty".to_string()));
        }
        if self.admin_user.is_empty() {
            return Err(Error::Config("admin_user cannot be empty".to_string()));
        }
        if self.maintenance_database.is_empty() {
            return Err(Error::Config(
                "maintenance_database cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads the admin password from the configured environment variable.
    pub fn load_password_from_env(&mut self) -> Result<()> {
        let password = env::var(&self.password_env).map_err(|_| {
            Error::Config(format!(
                "admin password not found: set the {} environment variable",
                self.password_env
            ))
        })?;
        self.admin_password = password;
        Ok(())
    }

    #[must_use]
    pub fn admin_role(&self) -> Role {
        Role::new(self.admin_user.clone(), self.admin_password.clone())
    }

    /// Builds connect options for any role on this server. Statement logging
    /// stays off since `CREATE USER` statements carry passwords.
    #[must_use]
    pub fn connect_options(&self, database: &str, user: &str, password: &str) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(database)
            .username(user)
            .password(password)
            .ssl_mode(self.ssl_mode.into())
            .disable_statement_logging()
    }
}
