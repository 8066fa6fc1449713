mod identifier;
mod models;

pub use identifier::{
    MAX_IDENTIFIER_BYTES, NormalizedName, quote_identifier, quote_literal, truncate_bytes,
};
pub use models::{Database, DatabaseDescriptor, Role, RoleKind};
