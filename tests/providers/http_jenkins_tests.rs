//! Jenkins JSON API adapter tests against the local stub server.

use super::helpers::{profile, store_with};
use super::stub_server::StubServer;
use hookwright::connection::adapters::InMemoryConnectionStore;
use hookwright::hook::domain::HookError;
use hookwright::providers::jenkins::{
    JenkinsHook,
    adapters::HttpJenkinsConnector,
    domain::JenkinsHookConfig,
    ports::JenkinsServer,
};
use rstest::{fixture, rstest};
use std::time::Duration;

type HttpHook = JenkinsHook<InMemoryConnectionStore, HttpJenkinsConnector>;

const JOB: &str = "/job/team/job/deploy/api/json";
const BUILD: &str = "/job/team/job/deploy/12/api/json";

#[fixture]
fn server() -> StubServer {
    let server = StubServer::start();
    server.respond(
        "GET",
        JOB,
        200,
        r#"{"name": "deploy", "lastBuild": {"number": 12}}"#,
    );
    server.respond(
        "GET",
        BUILD,
        200,
        r#"{"number": 12, "building": true, "result": null, "timestamp": 1700000000000}"#,
    );
    server
}

fn hook_for(server: &StubServer) -> HttpHook {
    let store = store_with([profile("jenkins_default", "jenkins")
        .with_host("127.0.0.1")
        .with_port(server.port())
        .with_login("robot")
        .with_password("token")]);
    JenkinsHook::new(
        store,
        JenkinsHookConfig::new("jenkins_default"),
        HttpJenkinsConnector::new().with_timeout(Duration::from_secs(5)),
    )
}

#[rstest]
fn latest_build_is_read_from_the_job(server: StubServer) {
    let mut hook = hook_for(&server);

    let building = hook
        .get_build_building_state("team/deploy", None)
        .expect("build state should load");

    assert!(building);
    assert_eq!(server.paths(), [JOB, BUILD]);
    assert!(
        server
            .requests()
            .iter()
            .all(|request| request.header("authorization") == Some("Basic cm9ib3Q6dG9rZW4="))
    );
}

#[rstest]
fn explicit_build_skips_the_job_query(server: StubServer) {
    let mut hook = hook_for(&server);

    hook.get_build_building_state("team/deploy", Some(12))
        .expect("build state should load");

    assert_eq!(server.paths(), [BUILD]);
    let url = hook.get_jenkins_server().expect("cached server").url().to_owned();
    assert_eq!(url, server.base_url());
}

#[rstest]
fn missing_build_is_an_integration_error(server: StubServer) {
    let mut hook = hook_for(&server);

    let err = hook
        .get_build_building_state("team/deploy", Some(3))
        .expect_err("build 3 is unknown");

    let HookError::Integration(integration) = &err else {
        panic!("expected an integration error, got {err:?}");
    };
    assert_eq!(integration.context(), "jenkins call failed");
    assert!(integration.detail().contains("404"));
}
