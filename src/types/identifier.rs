use crate::error::{Error, Result};

use super::RoleKind;

/// Longest identifier PostgreSQL accepts without truncating it (NAMEDATALEN - 1).
pub const MAX_IDENTIFIER_BYTES: usize = 63;

/// Truncates `s` to at most `max` bytes without splitting a character.
/// The result may be shorter than `max` when a multi-byte character straddles
/// the limit.
#[must_use]
pub fn truncate_bytes(s: &str, max: usize) -> &str {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Quotes an identifier for interpolation into a statement.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quotes a string literal for interpolation into a statement.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// A requested database name cut down to fit server identifier limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Database name, at most `MAX_IDENTIFIER_BYTES` bytes.
    pub database: String,
    /// Prefix for role names, short enough that every suffixed name still fits.
    pub role_base: String,
}

impl NormalizedName {
    pub fn new(requested: &str) -> Result<Self> {
        let database = truncate_bytes(requested, MAX_IDENTIFIER_BYTES);
        if database.is_empty() {
            return Err(Error::InvalidName(
                "database name cannot be empty".to_string(),
            ));
        }

        let role_base = truncate_bytes(database, MAX_IDENTIFIER_BYTES - RoleKind::LONGEST_SUFFIX);

        Ok(Self {
            database: database.to_string(),
            role_base: role_base.to_string(),
        })
    }

    #[must_use]
    pub fn role_name(&self, kind: RoleKind) -> String {
        kind.role_name(&self.role_base)
    }
}
