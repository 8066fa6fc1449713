//! Database provisioning.
//!
//! [`create_database`] runs in two phases under two identities:
//!
//! 1. On the caller's administrative connection: create the database, revoke
//!    public privileges, create the admin role with grantable privileges, and
//!    create the (still powerless) writer and reader roles.
//! 2. On a fresh connection authenticated as the new admin role: revoke public
//!    privileges again and grant the writer and reader their privileges.
//!
//! Grants issued in phase 2 belong to the admin role, so the role hierarchy
//! does not depend on the bootstrap administrator. A failure in either phase
//! aborts immediately and leaves already-created objects in place.
//!
//! Phase 1 runs its `SCHEMA PUBLIC` statements on the caller's connection,
//! i.e. in the maintenance database, so the admin role's grant option covers
//! that database's `public` schema and not the new one's. Unless the admin
//! role owns the new database's `public` schema, PostgreSQL downgrades the
//! phase-2 `REVOKE`/`GRANT ... ON SCHEMA PUBLIC` statements to warnings and
//! they change nothing. The database-level `CONNECT` grants are unaffected.

mod connection;
mod statement;

pub use connection::Connection;
pub use statement::Statement;

use tracing::{info, warn};

use crate::auth::{PASSWORD_LENGTH, generate_passwords};
use crate::error::{Error, Result};
use crate::session::Connector;
use crate::types::{Database, DatabaseDescriptor, NormalizedName, Role, RoleKind};

/// Creates a database named after `requested` along with its admin, writer,
/// and reader roles.
///
/// The name is truncated to 63 bytes for the database and to 56 bytes for
/// the role base names. `admin` must be authenticated as a role allowed to
/// create databases and roles; it stays open for the caller to close.
pub async fn create_database<C: Connector>(
    connector: &C,
    admin: &mut Connection<C::Executor>,
    requested: &str,
) -> Result<DatabaseDescriptor> {
    let name = NormalizedName::new(requested)?;
    let [admin_password, writer_password, reader_password]: [String; 3] =
        generate_passwords(RoleKind::ALL.len(), PASSWORD_LENGTH)?
            .try_into()
            .map_err(|generated: Vec<String>| {
                Error::SecretGeneration(format!("expected 3 passwords, got {}", generated.len()))
            })?;

    let dd = DatabaseDescriptor {
        host: admin.host().to_string(),
        port: admin.port(),
        database: Database::new(name.database.clone()),
        admin: Role::new(name.role_name(RoleKind::Admin), admin_password),
        writer: Role::new(name.role_name(RoleKind::Writer), writer_password),
        reader: Role::new(name.role_name(RoleKind::Reader), reader_password),
    };

    info!(database = %dd.database.name, user = %admin.user(), "creating database and roles");
    admin.exec(&bootstrap_statements(&dd)).await?;

    info!(database = %dd.database.name, user = %dd.admin.name, "granting privileges as owner");
    let mut owner: Connection<C::Executor> =
        Connection::open(connector, &dd.database.name, &dd.admin).await?;
    let granted = owner.exec(&grant_statements(&dd)).await;

    // Every object exists once the grants succeed; a failed close must not
    // discard the only copy of the credentials.
    if let Err(e) = owner.close().await {
        warn!(user = %dd.admin.name, error = %e, "failed to close owner connection");
    }
    granted?;

    info!(database = %dd.database.name, "database provisioned");
    Ok(dd)
}

/// Statements run on the administrative connection.
#[must_use]
pub fn bootstrap_statements(dd: &DatabaseDescriptor) -> Vec<Statement<'_>> {
    vec![
        Statement::CreateDatabase(&dd.database),
        Statement::RevokePublic { on: &dd.database },
        Statement::CreateUser(&dd.admin),
        Statement::GrantOwner {
            on: &dd.database,
            to: &dd.admin,
        },
        Statement::CreateUser(&dd.writer),
        Statement::CreateUser(&dd.reader),
    ]
}

/// Statements run on the connection authenticated as the new admin role.
#[must_use]
pub fn grant_statements(dd: &DatabaseDescriptor) -> Vec<Statement<'_>> {
    vec![
        Statement::RevokePublic { on: &dd.database },
        Statement::GrantConnect {
            on: &dd.database,
            to: &dd.writer,
        },
        Statement::GrantWrite { to: &dd.writer },
        Statement::GrantConnect {
            on: &dd.database,
            to: &dd.reader,
        },
        Statement::GrantRead { to: &dd.reader },
    ]
}
