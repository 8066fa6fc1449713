mod commands;
mod create;
mod plan;

pub use commands::ConnectionArgs;
pub use create::run_create;
pub use plan::run_plan;
