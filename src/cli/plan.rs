use serde::Serialize;

use crate::provision::{Connection, create_database};
use crate::session::{DryRunConnector, PlannedSession};

use super::ConnectionArgs;

#[derive(Serialize)]
struct PlanOutput {
    host: String,
    port: u16,
    database: String,
    sessions: Vec<PlannedSession>,
}

/// Prints the statements `create` would run, without contacting a server.
pub async fn run_plan(args: ConnectionArgs, name: String, json: bool) -> anyhow::Result<()> {
    let config = args.into_config()?;

    let connector = DryRunConnector::new(config.host.clone(), config.port);
    let executor = connector.open(&config.maintenance_database, &config.admin_role());
    let mut admin = Connection::new(config.host.clone(), config.port, &config.admin_user, executor);

    let dd = create_database(&connector, &mut admin, &name).await?;
    admin.close().await?;

    let output = PlanOutput {
        host: dd.host,
        port: dd.port,
        database: dd.database.name,
        sessions: connector.planned(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Plan for database '{}' on {}:{}",
        output.database, output.host, output.port
    );
    for (i, session) in output.sessions.iter().enumerate() {
        println!();
        println!(
            "Connection {} as {} to {}:",
            i + 1,
            session.user,
            session.database
        );
        for sql in &session.statements {
            println!("  {sql};");
        }
    }

    Ok(())
}
