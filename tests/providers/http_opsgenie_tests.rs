//! Opsgenie alert API adapter tests against the local stub server.

use super::helpers::{profile, store_with};
use super::stub_server::StubServer;
use hookwright::connection::adapters::InMemoryConnectionStore;
use hookwright::hook::domain::HookError;
use hookwright::providers::opsgenie::{
    OpsgenieHook,
    adapters::HttpOpsgenieConnector,
    domain::{CloseAlertPayload, CreateAlertPayload, IdentifierType, OpsgenieHookConfig, Priority},
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::time::Duration;

type HttpHook = OpsgenieHook<InMemoryConnectionStore, HttpOpsgenieConnector>;

const ACCEPTED: &str = r#"{
    "result": "Request will be processed",
    "took": 0.02,
    "requestId": "43a29c5c-3dbf-4fa4-9c26-f4f71023e120"
}"#;

#[fixture]
fn server() -> StubServer {
    let server = StubServer::start();
    server.respond("POST", "/v2/alerts", 202, ACCEPTED);
    server.respond("POST", "/v2/alerts/web%20alias/close", 202, ACCEPTED);
    server
}

fn hook_for(server: &StubServer, password: &str) -> HttpHook {
    let store = store_with([profile("opsgenie_default", "http")
        .with_host(server.base_url())
        .with_password(password)]);
    OpsgenieHook::new(
        store,
        OpsgenieHookConfig::new("opsgenie_default"),
        HttpOpsgenieConnector::new().with_timeout(Duration::from_secs(5)),
    )
}

#[rstest]
fn create_alert_posts_payload_with_genie_key(server: StubServer) {
    let mut hook = hook_for(&server, "genie-key");
    let payload = CreateAlertPayload::new("disk full on db-1").with_priority(Priority::P1);

    let response = hook.create_alert(&payload).expect("alert accepted");

    assert_eq!(response.result, "Request will be processed");
    let requests = server.requests();
    let [request] = requests.as_slice() else {
        panic!("expected one request, got {requests:?}");
    };
    assert_eq!(request.path(), "/v2/alerts");
    assert_eq!(request.header("authorization"), Some("GenieKey genie-key"));
    let body: Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(body, json!({"message": "disk full on db-1", "priority": "P1"}));
}

#[rstest]
fn close_alert_sends_identifier_type(server: StubServer) {
    let mut hook = hook_for(&server, "genie-key");
    let payload = CloseAlertPayload {
        note: Some("resolved".to_owned()),
        ..CloseAlertPayload::default()
    };

    hook.close_alert("web alias", IdentifierType::Alias, &payload)
        .expect("close accepted");

    let requests = server.requests();
    let [request] = requests.as_slice() else {
        panic!("expected one request, got {requests:?}");
    };
    assert_eq!(request.path(), "/v2/alerts/web%20alias/close");
    assert_eq!(request.query(), Some("identifierType=alias"));
    let body: Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(body, json!({"note": "resolved"}));
}

#[rstest]
fn unauthorized_key_is_an_integration_error() {
    let server = StubServer::start();
    server.respond("POST", "/v2/alerts", 401, r#"{"message": "Key format is not valid!"}"#);
    let mut hook = hook_for(&server, "wrong-key");

    let err = hook
        .create_alert(&CreateAlertPayload::new("disk full"))
        .expect_err("key is rejected");

    let HookError::Integration(integration) = &err else {
        panic!("expected an integration error, got {err:?}");
    };
    assert_eq!(integration.context(), "failed to create opsgenie alert");
    assert!(integration.detail().contains("401"));
}
