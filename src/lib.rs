//! # Dataform
//!
//! Provisions an isolated PostgreSQL database with a least-privilege role
//! hierarchy: an owner (`<name>-admin`), a writer (`<name>-writer`), and a
//! reader (`<name>-reader`), each with a generated password.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! dataform = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use dataform::config::ServerConfig;
//! use dataform::provision::{Connection, create_database};
//! use dataform::session::PgConnector;
//!
//! let mut config = ServerConfig::default();
//! config.load_password_from_env()?;
//!
//! let connector = PgConnector::new(config.clone());
//! let mut admin =
//!     Connection::open(&connector, &config.maintenance_database, &config.admin_role()).await?;
//! let descriptor = create_database(&connector, &mut admin, "shop").await?;
//! admin.close().await?;
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

pub mod auth;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod provision;
pub mod session;
pub mod types;
