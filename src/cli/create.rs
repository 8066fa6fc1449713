use tracing::warn;

use crate::provision::{Connection, create_database};
use crate::session::PgConnector;
use crate::types::{DatabaseDescriptor, RoleKind};

use super::ConnectionArgs;

pub async fn run_create(args: ConnectionArgs, name: String, json: bool) -> anyhow::Result<()> {
    let mut config = args.into_config()?;
    config.load_password_from_env()?;

    let connector = PgConnector::new(config.clone());
    let mut admin =
        Connection::open(&connector, &config.maintenance_database, &config.admin_role()).await?;

    let created = create_database(&connector, &mut admin, &name).await;
    if let Err(e) = admin.close().await {
        warn!(user = %config.admin_user, error = %e, "failed to close admin connection");
    }
    let dd = created?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dd)?);
    } else {
        print_descriptor(&dd);
    }

    Ok(())
}

fn print_descriptor(dd: &DatabaseDescriptor) {
    println!();
    println!("========================================");
    println!("Created database '{}' on {}:{}", dd.database.name, dd.host, dd.port);
    println!("Credentials (save these, they won't be shown again):");
    println!();
    for kind in RoleKind::ALL {
        let role = dd.role(kind);
        println!("  {:<7} {}  {}", kind, role.name, role.password);
    }
    println!();
    println!("========================================");
    println!();
}
