use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Database {
    pub name: String,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A login role together with its password.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub name: String,
    pub password: String,
}

impl Role {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Role")
            .field("name", &self.name)
            .field("password", &"********")
            .finish()
    }
}

/// The three roles created for every provisioned database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Admin,
    Writer,
    Reader,
}

impl RoleKind {
    pub const ALL: [RoleKind; 3] = [RoleKind::Admin, RoleKind::Writer, RoleKind::Reader];

    /// Byte length of the longest suffix, reserved when truncating role base names.
    pub const LONGEST_SUFFIX: usize = 7;

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            RoleKind::Admin => "-admin",
            RoleKind::Writer => "-writer",
            RoleKind::Reader => "-reader",
        }
    }

    /// Builds the role name for a (already truncated) base name.
    #[must_use]
    pub fn role_name(self, base: &str) -> String {
        format!("{base}{}", self.suffix())
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoleKind::Admin => "admin",
            RoleKind::Writer => "writer",
            RoleKind::Reader => "reader",
        };
        f.write_str(s)
    }
}

/// Describes a provisioned database: where it lives and who can use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseDescriptor {
    pub host: String,
    pub port: u16,
    pub database: Database,
    pub admin: Role,
    pub writer: Role,
    pub reader: Role,
}

impl DatabaseDescriptor {
    #[must_use]
    pub fn role(&self, kind: RoleKind) -> &Role {
        match kind {
            RoleKind::Admin => &self.admin,
            RoleKind::Writer => &self.writer,
            RoleKind::Reader => &self.reader,
        }
    }
}
