//! AWS hook tests: credentials, regions, and EMR operations.

use super::helpers::{extras, profile, store_with};
use hookwright::connection::{adapters::InMemoryConnectionStore, domain::ExtraOptions};
use hookwright::hook::domain::{ConfigurationError, HookError};
use hookwright::providers::aws::{
    AwsHook, EmrHook, RdsHook,
    adapters::InMemoryAws,
    domain::{AwsHookConfig, AwsService, ClusterState, ClusterSummary, EmrHookConfig},
};
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};
use std::sync::Arc;

#[fixture]
fn store() -> Arc<InMemoryConnectionStore> {
    let template = json!({
        "Name": "default_job_flow_name",
        "ReleaseLabel": "emr-6.9.0",
        "Instances": {
            "InstanceCount": 1,
            "KeepJobFlowAliveWhenNoSteps": false
        }
    });
    let template_extra =
        ExtraOptions::try_from(template).expect("template is a JSON object");
    store_with([
        profile("aws_default", "aws")
            .with_login("AKIAEXAMPLE")
            .with_password("secret-key")
            .with_extra(extras([
                ("region_name", "eu-west-1"),
                ("aws_session_token", "session"),
            ])),
        profile("aws_anonymous", "aws"),
        profile("emr_default", "emr").with_extra(template_extra),
    ])
}

#[fixture]
fn aws() -> InMemoryAws {
    InMemoryAws::new()
}

fn cluster(id: &str, name: &str, state: ClusterState) -> ClusterSummary {
    ClusterSummary {
        id: id.to_owned(),
        name: name.to_owned(),
        state,
    }
}

fn emr_hook(
    store: &Arc<InMemoryConnectionStore>,
    aws: &InMemoryAws,
) -> EmrHook<InMemoryConnectionStore, InMemoryAws> {
    EmrHook::new(
        Arc::clone(store),
        EmrHookConfig::new("aws_default").with_emr_connection("emr_default"),
        aws.clone(),
    )
}

#[rstest]
fn profile_supplies_credentials_and_region(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    let mut hook = AwsHook::new(store, AwsHookConfig::new("aws_default"), AwsService::Rds, aws.clone());

    let config = hook.get_client().expect("client should build").config().clone();

    assert_eq!(hook.service(), AwsService::Rds);
    assert_eq!(config.service, AwsService::Rds);
    assert_eq!(config.access_key_id.as_deref(), Some("AKIAEXAMPLE"));
    assert_eq!(config.secret_access_key.as_deref(), Some("secret-key"));
    assert_eq!(config.session_token.as_deref(), Some("session"));
    assert_eq!(config.region.as_deref(), Some("eu-west-1"));
}

#[rstest]
fn caller_region_overrides_profile(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    let config = AwsHookConfig::new("aws_default").with_region("us-east-2");
    let mut hook = RdsHook::new(store, config, aws.clone());

    hook.get_client().expect("client should build");

    let recorded = aws.connections().expect("connections");
    let first = recorded.first().expect("one connection");
    assert_eq!(first.region.as_deref(), Some("us-east-2"));
}

#[rstest]
fn empty_profile_defers_to_the_default_chain(
    store: Arc<InMemoryConnectionStore>,
    aws: InMemoryAws,
) {
    let mut hook = RdsHook::new(store, AwsHookConfig::new("aws_anonymous"), aws.clone());

    let config = hook.get_client().expect("client should build").config().clone();

    assert!(config.access_key_id.is_none());
    assert!(config.secret_access_key.is_none());
    assert!(config.region.is_none());
}

#[rstest]
fn secrets_are_masked_in_debug_output(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    let mut hook = RdsHook::new(store, AwsHookConfig::new("aws_default"), aws.clone());

    let rendered = format!("{:?}", hook.get_client().expect("client should build").config());

    assert!(!rendered.contains("secret-key"));
    assert!(!rendered.contains("session\""));
    assert!(rendered.contains("AKIAEXAMPLE"));
}

#[rstest]
fn cluster_lookup_returns_none_when_absent(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    aws.add_cluster(cluster("j-1", "other", ClusterState::Running))
        .expect("add cluster");
    let mut hook = emr_hook(&store, &aws);

    let found = hook
        .get_cluster_id_by_name("nightly", &[ClusterState::Running, ClusterState::Waiting])
        .expect("lookup succeeds");

    assert_eq!(found, None);
}

#[rstest]
fn cluster_lookup_returns_the_single_match(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    aws.add_cluster(cluster("j-1", "nightly", ClusterState::Waiting))
        .expect("add cluster");
    aws.add_cluster(cluster("j-2", "nightly", ClusterState::Terminated))
        .expect("add cluster");
    let mut hook = emr_hook(&store, &aws);

    let found = hook
        .get_cluster_id_by_name("nightly", &[ClusterState::Running, ClusterState::Waiting])
        .expect("lookup succeeds");

    assert_eq!(found.as_deref(), Some("j-1"));
}

#[rstest]
fn duplicate_cluster_names_are_an_error(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    aws.add_cluster(cluster("j-1", "nightly", ClusterState::Running))
        .expect("add cluster");
    aws.add_cluster(cluster("j-2", "nightly", ClusterState::Waiting))
        .expect("add cluster");
    let mut hook = emr_hook(&store, &aws);

    let err = hook
        .get_cluster_id_by_name("nightly", &[ClusterState::Running, ClusterState::Waiting])
        .expect_err("two clusters match");

    assert!(err.is_integration());
    assert!(err.to_string().contains("2 clusters found"));
}

#[rstest]
fn job_flow_uses_the_template(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    let mut hook = emr_hook(&store, &aws);

    let flow = hook.create_job_flow(Map::new()).expect("job flow starts");

    assert!(flow.job_flow_id.starts_with("j-"));
    let found = hook
        .get_cluster_id_by_name("default_job_flow_name", &[ClusterState::Starting])
        .expect("lookup succeeds");
    assert_eq!(found, Some(flow.job_flow_id));
}

#[rstest]
fn job_flow_overrides_replace_template_keys(
    store: Arc<InMemoryConnectionStore>,
    aws: InMemoryAws,
) {
    let mut hook = emr_hook(&store, &aws);
    let mut overrides = Map::new();
    overrides.insert("Name".to_owned(), json!("adhoc"));
    overrides.insert(
        "Instances".to_owned(),
        json!({"KeepJobFlowAliveWhenNoSteps": true}),
    );

    let flow = hook.create_job_flow(overrides).expect("job flow starts");

    let requests = aws.job_flow_requests().expect("requests");
    let request = requests.first().expect("one request");
    assert_eq!(request.get("Name"), Some(&json!("adhoc")));
    assert_eq!(request.get("ReleaseLabel"), Some(&json!("emr-6.9.0")));
    assert_eq!(
        request.get("Instances").and_then(|value| value.get("InstanceCount")),
        None
    );
    let found = hook
        .get_cluster_id_by_name("adhoc", &[ClusterState::Waiting])
        .expect("lookup succeeds");
    assert_eq!(found, Some(flow.job_flow_id));
}

#[rstest]
fn job_flow_requires_an_emr_connection(store: Arc<InMemoryConnectionStore>, aws: InMemoryAws) {
    let mut hook = EmrHook::new(store, EmrHookConfig::new("aws_default"), aws.clone());

    let err = hook
        .create_job_flow(Map::new())
        .expect_err("no template profile");

    assert!(matches!(
        err,
        HookError::Configuration(ConfigurationError::MissingOption {
            option: "emr_connection_id",
            ..
        })
    ));
    assert!(aws.job_flow_requests().expect("requests").is_empty());
}

#[rstest]
fn job_flow_with_unknown_emr_connection_fails(
    store: Arc<InMemoryConnectionStore>,
    aws: InMemoryAws,
) {
    let config = EmrHookConfig::new("aws_default").with_emr_connection("emr_missing");
    let mut hook = EmrHook::new(store, config, aws.clone());

    let err = hook
        .create_job_flow(Map::new())
        .expect_err("template profile is missing");

    assert!(matches!(
        err,
        HookError::Configuration(ConfigurationError::ConnectionNotFound(_))
    ));
}

#[rstest]
fn job_flow_without_name_is_rejected_by_the_service(aws: InMemoryAws) {
    let store = store_with([
        profile("aws_default", "aws"),
        profile("emr_unnamed", "emr").with_extra(extras([("ReleaseLabel", "emr-6.9.0")])),
    ]);
    let config = EmrHookConfig::new("aws_default").with_emr_connection("emr_unnamed");
    let mut hook = EmrHook::new(store, config, aws);

    let err = hook
        .create_job_flow(Map::<String, Value>::new())
        .expect_err("service requires a name");

    assert!(err.is_integration());
}
