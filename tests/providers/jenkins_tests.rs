//! Jenkins hook tests against the in-memory server.

use super::helpers::{extras, profile, store_with};
use hookwright::connection::adapters::{InMemoryConnectionStore, JsonFileConnectionStore};
use hookwright::hook::domain::HookError;
use hookwright::providers::jenkins::{
    JenkinsHook,
    adapters::InMemoryJenkins,
    domain::{BuildInfo, JenkinsHookConfig},
    ports::JenkinsServer,
};
use rstest::{fixture, rstest};
use std::sync::Arc;

type TestHook = JenkinsHook<InMemoryConnectionStore, InMemoryJenkins>;

#[fixture]
fn jenkins() -> InMemoryJenkins {
    let jenkins = InMemoryJenkins::new();
    jenkins
        .add_build("deploy", BuildInfo::new(1, false))
        .expect("add build 1");
    jenkins
        .add_build("deploy", BuildInfo::new(2, true))
        .expect("add build 2");
    jenkins.add_job("never-built").expect("add job");
    jenkins
}

fn hook_for(connection_id: &str, jenkins: &InMemoryJenkins) -> TestHook {
    let store = store_with([
        profile("jenkins_default", "jenkins")
            .with_host("ci.example.com")
            .with_port(8080)
            .with_login("robot")
            .with_password("token"),
        profile("jenkins_tls", "jenkins")
            .with_host("ci.example.com")
            .with_extra(extras([("use_https", "true")])),
    ]);
    JenkinsHook::new(store, JenkinsHookConfig::new(connection_id), jenkins.clone())
}

#[rstest]
#[case("jenkins_default", "http://ci.example.com:8080")]
#[case("jenkins_tls", "https://ci.example.com")]
fn server_url_follows_use_https(
    jenkins: InMemoryJenkins,
    #[case] connection_id: &str,
    #[case] expected: &str,
) {
    let mut hook = hook_for(connection_id, &jenkins);

    let server = hook.get_jenkins_server().expect("server should build");

    assert_eq!(server.url(), expected);
}

#[rstest]
#[case(r#""true""#, "https://ci.example.com")]
#[case("true", "https://ci.example.com")]
#[case(r#""false""#, "http://ci.example.com")]
#[case(r#"{"use_https": "yes"}"#, "https://ci.example.com")]
fn scalar_stored_extra_selects_scheme(
    jenkins: InMemoryJenkins,
    #[case] extra: &str,
    #[case] expected: &str,
) {
    let document = format!(
        r#"{{"jenkins_default": {{"conn_type": "jenkins", "host": "ci.example.com", "extra": {extra}}}}}"#
    );
    let store = JsonFileConnectionStore::from_json_str(&document).expect("document parses");
    let mut hook = JenkinsHook::new(
        Arc::new(store),
        JenkinsHookConfig::new("jenkins_default"),
        jenkins,
    );

    let server = hook.get_jenkins_server().expect("server should build");

    assert_eq!(server.url(), expected);
}

#[rstest]
fn credentials_come_from_login_and_password(jenkins: InMemoryJenkins) {
    let mut hook = hook_for("jenkins_default", &jenkins);
    hook.get_jenkins_server().expect("server should build");

    let recorded = jenkins.connections().expect("connections");
    let credentials = recorded
        .first()
        .and_then(|config| config.credentials.clone())
        .expect("credentials recorded");

    assert_eq!(credentials.username(), "robot");
    assert_eq!(credentials.password(), Some("token"));
}

#[rstest]
#[case(None)]
#[case(Some(0))]
fn missing_build_number_resolves_latest(jenkins: InMemoryJenkins, #[case] number: Option<u64>) {
    let mut hook = hook_for("jenkins_default", &jenkins);

    let building = hook
        .get_build_building_state("deploy", number)
        .expect("latest build exists");

    assert!(building);
    assert_eq!(
        jenkins.build_queries().expect("queries"),
        vec![("deploy".to_owned(), 2)]
    );
}

#[rstest]
fn explicit_build_number_is_queried_directly(jenkins: InMemoryJenkins) {
    let mut hook = hook_for("jenkins_default", &jenkins);

    let building = hook
        .get_build_building_state("deploy", Some(1))
        .expect("build 1 exists");

    assert!(!building);
    assert_eq!(
        jenkins.build_queries().expect("queries"),
        vec![("deploy".to_owned(), 1)]
    );
}

#[rstest]
#[case("never-built", None)]
#[case("deploy", Some(99))]
#[case("missing-job", None)]
fn vendor_failures_are_integration_errors(
    jenkins: InMemoryJenkins,
    #[case] job_name: &str,
    #[case] number: Option<u64>,
) {
    let mut hook = hook_for("jenkins_default", &jenkins);

    let err = hook
        .get_build_building_state(job_name, number)
        .expect_err("lookup should fail");

    let HookError::Integration(integration) = &err else {
        panic!("expected an integration error, got {err:?}");
    };
    assert_eq!(integration.context(), "jenkins call failed");
}

#[rstest]
fn server_is_built_once_across_queries(jenkins: InMemoryJenkins) {
    let mut hook = hook_for("jenkins_default", &jenkins);

    hook.get_build_building_state("deploy", Some(1))
        .expect("first query");
    hook.get_build_building_state("deploy", Some(2))
        .expect("second query");

    assert!(hook.is_connected());
    assert_eq!(jenkins.connections().expect("connections").len(), 1);
}
