use std::fmt;

use crate::types::{Database, Role, quote_identifier, quote_literal};

const WRITE_PRIVILEGES: &str = "SELECT,INSERT,UPDATE,DELETE,REFERENCES";

/// One privilege-management step: an ordered group of statements plus a
/// description used to attribute errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    CreateDatabase(&'a Database),
    CreateUser(&'a Role),
    RevokePublic { on: &'a Database },
    GrantOwner { on: &'a Database, to: &'a Role },
    GrantConnect { on: &'a Database, to: &'a Role },
    GrantWrite { to: &'a Role },
    GrantRead { to: &'a Role },
}

impl Statement<'_> {
    /// Returns the statements to execute, in order.
    #[must_use]
    pub fn sql(&self) -> Vec<String> {
        match *self {
            Statement::CreateDatabase(db) => {
                vec![format!("CREATE DATABASE {}", quote_identifier(&db.name))]
            }
            Statement::CreateUser(role) => vec![format!(
                "CREATE USER {} WITH ENCRYPTED PASSWORD {}",
                quote_identifier(&role.name),
                quote_literal(&role.password)
            )],
            Statement::RevokePublic { on } => vec![
                "REVOKE ALL PRIVILEGES ON SCHEMA PUBLIC FROM PUBLIC CASCADE".to_string(),
                format!(
                    "REVOKE ALL PRIVILEGES ON DATABASE {} FROM PUBLIC CASCADE",
                    quote_identifier(&on.name)
                ),
            ],
            Statement::GrantOwner { on, to } => {
                let to = quote_identifier(&to.name);
                vec![
                    format!(
                        "GRANT ALL PRIVILEGES ON DATABASE {} TO {to} WITH GRANT OPTION",
                        quote_identifier(&on.name)
                    ),
                    format!("GRANT ALL PRIVILEGES ON SCHEMA PUBLIC TO {to} WITH GRANT OPTION"),
                    format!(
                        "GRANT ALL PRIVILEGES ON ALL TABLES IN SCHEMA PUBLIC TO {to} WITH GRANT OPTION"
                    ),
                ]
            }
            Statement::GrantConnect { on, to } => {
                let to = quote_identifier(&to.name);
                vec![
                    format!(
                        "GRANT CONNECT ON DATABASE {} TO {to}",
                        quote_identifier(&on.name)
                    ),
                    format!("GRANT USAGE ON SCHEMA PUBLIC TO {to}"),
                ]
            }
            Statement::GrantWrite { to } => {
                let to = quote_identifier(&to.name);
                vec![
                    format!("GRANT {WRITE_PRIVILEGES} ON ALL TABLES IN SCHEMA PUBLIC TO {to}"),
                    format!("GRANT ALL PRIVILEGES ON ALL FUNCTIONS IN SCHEMA PUBLIC TO {to}"),
                    format!(
                        "ALTER DEFAULT PRIVILEGES IN SCHEMA PUBLIC GRANT {WRITE_PRIVILEGES} ON TABLES TO {to}"
                    ),
                ]
            }
            Statement::GrantRead { to } => {
                let to = quote_identifier(&to.name);
                vec![
                    format!("GRANT SELECT ON ALL TABLES IN SCHEMA PUBLIC TO {to}"),
                    format!("ALTER DEFAULT PRIVILEGES IN SCHEMA PUBLIC GRANT SELECT ON TABLES TO {to}"),
                ]
            }
        }
    }
}

/// Description suitable for error messages. Never contains a password.
impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::CreateDatabase(db) => write!(f, "create database {}", db.name),
            Statement::CreateUser(role) => write!(f, "create user {}", role.name),
            Statement::RevokePublic { on } => write!(f, "revoke all public on {}", on.name),
            Statement::GrantOwner { on, to } => {
                write!(f, "grant admin on {} to {}", on.name, to.name)
            }
            Statement::GrantConnect { on, to } => {
                write!(f, "grant access on {} to {}", on.name, to.name)
            }
            Statement::GrantWrite { to } => write!(f, "grant write to {}", to.name),
            Statement::GrantRead { to } => write!(f, "grant read to {}", to.name),
        }
    }
}
