//! Jira hook tests against the in-memory connector.

use super::helpers::{extras, profile, store_with};
use hookwright::connection::{adapters::InMemoryConnectionStore, domain::ExtraOptions};
use hookwright::hook::domain::{ConfigurationError, HookError, ProfileField};
use hookwright::providers::jira::{
    JiraHook,
    adapters::InMemoryJiraConnector,
    domain::{JiraHookConfig, JiraIssue},
    ports::JiraClient,
};
use rstest::{fixture, rstest};
use serde_json::{Map, json};
use std::sync::Arc;

type TestHook = JiraHook<InMemoryConnectionStore, InMemoryJiraConnector>;

#[fixture]
fn store() -> Arc<InMemoryConnectionStore> {
    store_with([
        profile("jira_default", "jira")
            .with_host("jira.example.com")
            .with_login("bot")
            .with_password("s3cret"),
        profile("jira_anonymous", "jira").with_host("https://jira.internal/"),
        profile("jira_no_host", "jira").with_login("bot"),
    ])
}

fn hook_for(
    store: &Arc<InMemoryConnectionStore>,
    connection_id: &str,
    connector: &InMemoryJiraConnector,
) -> TestHook {
    JiraHook::new(
        Arc::clone(store),
        JiraHookConfig::new(connection_id),
        connector.clone(),
    )
}

#[rstest]
fn default_profile_builds_authenticated_client(store: Arc<InMemoryConnectionStore>) {
    let connector = InMemoryJiraConnector::new();
    let mut hook = hook_for(&store, "jira_default", &connector);

    let client = hook.get_client().expect("client should build");
    assert_eq!(client.server(), "https://jira.example.com");

    let config = client.config();
    let credentials = config.basic_auth.as_ref().expect("login yields basic auth");
    assert_eq!(credentials.username(), "bot");
    assert_eq!(credentials.password(), Some("s3cret"));
    assert!(config.verify);
    assert!(config.validate);
    assert!(config.get_server_info);
    assert!(hook.is_connected());
}

#[rstest]
fn profile_without_login_connects_anonymously(store: Arc<InMemoryConnectionStore>) {
    let connector = InMemoryJiraConnector::new();
    let mut hook = hook_for(&store, "jira_anonymous", &connector);

    let client = hook.get_client().expect("client should build");

    assert_eq!(client.server(), "https://jira.internal");
    assert!(client.config().basic_auth.is_none());
}

#[rstest]
fn missing_host_never_reaches_the_connector(store: Arc<InMemoryConnectionStore>) {
    let connector = InMemoryJiraConnector::new();
    let mut hook = hook_for(&store, "jira_no_host", &connector);

    let err = hook.get_client().expect_err("host is required");

    assert!(matches!(
        err,
        HookError::Configuration(ConfigurationError::MissingField {
            field: ProfileField::Host,
            ..
        })
    ));
    assert!(connector.connections().expect("connections").is_empty());
}

#[rstest]
#[case(Some("false"), false)]
#[case(Some("FALSE"), false)]
#[case(Some("False"), false)]
#[case(Some("true"), true)]
#[case(Some("0"), true)]
#[case(Some("no"), true)]
#[case(None, true)]
fn flags_switch_off_only_for_false(#[case] value: Option<&str>, #[case] expected: bool) {
    let extra = value.map_or_else(
        ExtraOptions::new,
        |text| extras([("verify", text), ("validate", text), ("get_server_info", text)]),
    );
    let store = store_with([profile("jira_flags", "jira")
        .with_host("jira.example.com")
        .with_extra(extra)]);
    let connector = InMemoryJiraConnector::new();
    let mut hook = hook_for(&store, "jira_flags", &connector);

    let config = hook.get_client().expect("client should build").config().clone();

    assert_eq!(config.verify, expected);
    assert_eq!(config.validate, expected);
    assert_eq!(config.get_server_info, expected);
}

#[rstest]
fn flag_keys_are_stripped_from_client_options() {
    let store = store_with([profile("jira_options", "jira")
        .with_host("jira.example.com")
        .with_extra(extras([
            ("verify", "false"),
            ("validate", "false"),
            ("agile_rest_path", "agile"),
        ]))]);
    let connector = InMemoryJiraConnector::new();
    let mut hook = hook_for(&store, "jira_options", &connector);

    let client = hook.get_client().expect("client should build");
    let options = &client.config().options;

    assert_eq!(options.len(), 1);
    assert_eq!(options.get_str("agile_rest_path").as_deref(), Some("agile"));
}

#[rstest]
fn caller_proxies_reach_the_connector(store: Arc<InMemoryConnectionStore>) {
    let connector = InMemoryJiraConnector::new();
    let config = JiraHookConfig::new("jira_default").with_proxy("https", "http://proxy:3128");
    let mut hook = JiraHook::new(Arc::clone(&store), config, connector.clone());

    hook.get_client().expect("client should build");

    let recorded = connector.connections().expect("connections");
    let first = recorded.first().expect("one connection");
    assert_eq!(
        first.proxies.get("https").map(String::as_str),
        Some("http://proxy:3128")
    );
}

#[rstest]
fn rejected_connection_is_an_integration_error(store: Arc<InMemoryConnectionStore>) {
    let connector = InMemoryJiraConnector::rejecting("401 unauthorized");
    let mut hook = hook_for(&store, "jira_default", &connector);

    let err = hook.get_client().expect_err("connector rejects");

    let HookError::Integration(integration) = &err else {
        panic!("expected an integration error, got {err:?}");
    };
    assert_eq!(integration.context(), "failed to create jira client");
    assert_eq!(integration.detail(), "401 unauthorized");
    assert!(!hook.is_connected());
}

#[rstest]
fn issue_lookup_uses_the_cached_client(store: Arc<InMemoryConnectionStore>) {
    let connector = InMemoryJiraConnector::new();
    let mut fields = Map::new();
    fields.insert("summary".to_owned(), json!("Disk full"));
    connector
        .insert_issue(JiraIssue {
            id: "10001".to_owned(),
            key: "OPS-1".to_owned(),
            fields,
        })
        .expect("insert issue");
    let mut hook = hook_for(&store, "jira_default", &connector);

    let issue = hook.get_issue("OPS-1").expect("issue exists");
    let missing = hook.get_issue("OPS-2").expect_err("issue is missing");

    assert_eq!(issue.fields.get("summary"), Some(&json!("Disk full")));
    assert!(missing.is_integration());
    assert_eq!(connector.connections().expect("connections").len(), 1);
}
