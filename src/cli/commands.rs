use clap::Args;

use crate::config::{ServerConfig, SslMode};

/// Where and as whom to connect. Flags override values from `--config`.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// TOML file with server connection settings
    #[arg(long)]
    pub config: Option<String>,

    /// Server host
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Administrative user allowed to create databases and roles
    #[arg(long, short)]
    pub user: Option<String>,

    /// Environment variable holding the administrative password
    #[arg(long)]
    pub password_env: Option<String>,

    /// Database to connect to before the new one exists
    #[arg(long)]
    pub maintenance_database: Option<String>,

    /// TLS mode: disable, prefer, or require
    #[arg(long, value_parser = parse_ssl_mode)]
    pub ssl_mode: Option<SslMode>,
}

fn parse_ssl_mode(s: &str) -> Result<SslMode, String> {
    SslMode::parse(s).ok_or_else(|| format!("invalid TLS mode '{s}': expected disable, prefer, or require"))
}

impl ConnectionArgs {
    /// Resolves the server configuration. The password is not loaded.
    pub fn into_config(self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(user) = self.user {
            config.admin_user = user;
        }
        if let Some(password_env) = self.password_env {
            config.password_env = password_env;
        }
        if let Some(database) = self.maintenance_database {
            config.maintenance_database = database;
        }
        if let Some(ssl_mode) = self.ssl_mode {
            config.ssl_mode = ssl_mode;
        }

        config.validate()?;
        Ok(config)
    }
}
