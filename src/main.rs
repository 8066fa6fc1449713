use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dataform::cli::{ConnectionArgs, run_create, run_plan};

#[derive(Parser)]
#[command(name = "dataform")]
#[command(about = "Provision PostgreSQL databases with owner, writer, and reader roles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a database and its admin, writer, and reader roles
    Create {
        /// Name of the database to create (truncated to 63 bytes)
        name: String,

        #[command(flatten)]
        connection: ConnectionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the statements `create` would run without connecting
    Plan {
        /// Name of the database to plan for
        name: String,

        #[command(flatten)]
        connection: ConnectionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dataform=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            name,
            connection,
            json,
        } => run_create(connection, name, json).await?,
        Commands::Plan {
            name,
            connection,
            json,
        } => run_plan(connection, name, json).await?,
    }

    Ok(())
}
