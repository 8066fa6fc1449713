mod server;

pub use server::{ServerConfig, SslMode};
