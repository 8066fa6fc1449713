use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("generate password: {0}")]
    SecretGeneration(String),

    #[error("{step}: {source}")]
    Statement {
        step: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("connect as {user}: {source}")]
    Connect {
        user: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Returns the description of the statement sequence that failed, if any.
    #[must_use]
    pub fn step(&self) -> Option<&str> {
        match self {
            Error::Statement { step, .. } => Some(step),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
