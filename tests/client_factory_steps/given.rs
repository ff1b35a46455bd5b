//! Given steps for client factory BDD scenarios.

use super::world::FactoryWorld;
use eyre::WrapErr;
use hookwright::connection::domain::{ConnectionId, ConnectionProfile, ConnectionType};
use hookwright::providers::jira::adapters::InMemoryJiraConnector;
use rstest_bdd_macros::given;

#[given(r#"a jira connection "{connection_id}" for host "{host}""#)]
fn a_jira_connection(
    world: &mut FactoryWorld,
    connection_id: String,
    host: String,
) -> Result<(), eyre::Report> {
    let id = ConnectionId::new(connection_id).wrap_err("connection id")?;
    let conn_type = ConnectionType::new("jira").wrap_err("connection type")?;
    world
        .store
        .merge(ConnectionProfile::new(id, conn_type).with_host(host))
        .wrap_err("store profile")?;
    Ok(())
}

#[given(r#"the jira server rejects connections with "{message}""#)]
fn server_rejects_connections(world: &mut FactoryWorld, message: String) {
    world.connector = InMemoryJiraConnector::rejecting(message);
}
