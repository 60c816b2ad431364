//! Integration tests for the shaping pipeline.
//!
//! Every test drives the public surface (the publisher operations or the
//! listener trait) against the in-memory sink and directory, then asserts
//! on the positional payload the sink received.

use std::sync::Arc;

use rstest::rstest;

use idsight_directory::MemoryDirectory;
use idsight_events::{streams, FieldValue, SessionAction};
use idsight_publisher::{
    AnalyticsPublisher, AuthEventListener, AuthenticationData, FieldDefaults, MemorySink,
    SessionData, NOT_AVAILABLE, PUBLISHER_NAME,
};

fn shaper(
    directory: MemoryDirectory,
    defaults: FieldDefaults,
) -> (Arc<MemorySink>, AnalyticsPublisher) {
    let sink = Arc::new(MemorySink::new());
    let publisher = AnalyticsPublisher::new(sink.clone(), Arc::new(directory), defaults);
    (sink, publisher)
}

fn authn_data() -> AuthenticationData {
    AuthenticationData {
        context_id: "ctx-1".to_string(),
        event_id: "evt-1".to_string(),
        username: "alice".to_string(),
        user_store_domain: "PRIMARY".to_string(),
        tenant_domain: "acme.example".to_string(),
        remote_ip: "203.0.113.7".to_string(),
        inbound_protocol: "oidc".to_string(),
        service_provider: "sp1".to_string(),
        identity_provider: "LOCAL".to_string(),
        identity_provider_type: "LOCAL".to_string(),
        authenticator: "BasicAuthenticator".to_string(),
        step: 1,
        success: true,
        overall_success: true,
        remember_me: false,
        forced_authn: false,
        passive: false,
        initial_login: true,
    }
}

fn session_data() -> SessionData {
    SessionData {
        session_id: "sess-9".to_string(),
        created_at: 100,
        updated_at: 200,
        terminated_at: 0,
        username: "bob".to_string(),
        user_store_domain: "SECONDARY".to_string(),
        remote_ip: "198.51.100.4".to_string(),
        tenant_domain: "acme.example".to_string(),
        remember_me: true,
    }
}

fn str_field(value: &str) -> FieldValue {
    FieldValue::Str(value.to_string())
}

#[tokio::test]
async fn test_populated_fields_pass_through_at_fixed_positions() {
    let directory =
        MemoryDirectory::new().with_user("acme.example", "PRIMARY/alice", ["admin", "staff"]);
    let (sink, publisher) = shaper(directory, FieldDefaults::new());

    publisher.publish_authentication(&authn_data()).await;

    let events = sink.published();
    assert_eq!(events.len(), 1);
    let event = &events[0];

    assert_eq!(event.stream, streams::AUTHENTICATION.qualified_name());
    assert_eq!(event.payload.len(), 20);
    assert_eq!(event.payload[0], str_field("ctx-1"));
    assert_eq!(event.payload[1], str_field("evt-1"));
    assert_eq!(event.payload[2], FieldValue::Bool(true));
    assert_eq!(event.payload[3], str_field("alice"));
    assert_eq!(event.payload[4], str_field("PRIMARY"));
    assert_eq!(event.payload[5], str_field("acme.example"));
    assert_eq!(event.payload[6], str_field("203.0.113.7"));
    assert_eq!(event.payload[7], str_field("oidc"));
    assert_eq!(event.payload[8], str_field("sp1"));
    assert_eq!(event.payload[12], str_field("admin,staff"));
    assert_eq!(event.payload[13], str_field("1"));
    assert_eq!(event.payload[14], str_field("LOCAL"));
    assert_eq!(event.payload[15], FieldValue::Bool(true));
    assert_eq!(event.payload[16], str_field("BasicAuthenticator"));
    assert_eq!(event.payload[17], FieldValue::Bool(true));
    assert_eq!(event.payload[18], str_field("LOCAL"));
    // The publish timestamp rides both the envelope and the last field.
    assert_eq!(event.payload[19], FieldValue::Timestamp(event.timestamp));
}

#[tokio::test]
async fn test_empty_fields_fall_back_to_sentinel() {
    let (sink, publisher) = shaper(MemoryDirectory::new(), FieldDefaults::new());

    let data = AuthenticationData {
        username: String::new(),
        user_store_domain: String::new(),
        service_provider: String::new(),
        identity_provider: String::new(),
        identity_provider_type: "Federated".to_string(),
        ..authn_data()
    };
    publisher.publish_authentication(&data).await;

    let event = &sink.published()[0];
    assert_eq!(event.payload[3], str_field(NOT_AVAILABLE));
    assert_eq!(event.payload[4], str_field(NOT_AVAILABLE));
    assert_eq!(event.payload[8], str_field(NOT_AVAILABLE));
    assert_eq!(event.payload[12], str_field(NOT_AVAILABLE));
    assert_eq!(event.payload[14], str_field(NOT_AVAILABLE));
}

#[tokio::test]
async fn test_empty_fields_use_configured_defaults() {
    let defaults = FieldDefaults::new()
        .with_default("username", "anonymous")
        .with_default("user_store_domain", "PRIMARY");
    let (sink, publisher) = shaper(MemoryDirectory::new(), defaults);

    let data = AuthenticationData {
        username: String::new(),
        user_store_domain: String::new(),
        identity_provider_type: "Federated".to_string(),
        ..authn_data()
    };
    publisher.publish_authentication(&data).await;

    let event = &sink.published()[0];
    assert_eq!(event.payload[3], str_field("anonymous"));
    assert_eq!(event.payload[4], str_field("PRIMARY"));
    // Unconfigured fields still get the sentinel.
    assert_eq!(event.payload[14], str_field("LOCAL"));
}

#[tokio::test]
async fn test_federated_subject_skips_role_lookup() {
    // A failing directory proves the lookup is never attempted.
    let (sink, publisher) = shaper(MemoryDirectory::failing(), FieldDefaults::new());

    let data = AuthenticationData {
        identity_provider_type: "Federated".to_string(),
        ..authn_data()
    };
    publisher.publish_authentication(&data).await;

    let event = &sink.published()[0];
    assert_eq!(event.payload[12], str_field(NOT_AVAILABLE));
}

#[tokio::test]
async fn test_local_marker_is_case_insensitive() {
    let directory =
        MemoryDirectory::new().with_user("acme.example", "PRIMARY/alice", ["admin"]);
    let (sink, publisher) = shaper(directory, FieldDefaults::new());

    let data = AuthenticationData {
        identity_provider_type: "local".to_string(),
        ..authn_data()
    };
    publisher.publish_authentication(&data).await;

    let event = &sink.published()[0];
    assert_eq!(event.payload[12], str_field("admin"));
}

#[tokio::test]
async fn test_empty_user_store_domain_still_resolves_roles() {
    // Username present, user-store domain empty: the lookup key is the
    // bare username and the domain field alone is substituted.
    let directory = MemoryDirectory::new().with_user("acme.example", "alice", ["admin", "staff"]);
    let (sink, publisher) = shaper(directory, FieldDefaults::new());

    let data = AuthenticationData {
        user_store_domain: String::new(),
        ..authn_data()
    };
    publisher.publish_authentication(&data).await;

    let event = &sink.published()[0];
    assert_eq!(event.payload[3], str_field("alice"));
    assert_eq!(event.payload[4], str_field(NOT_AVAILABLE));
    assert_eq!(event.payload[8], str_field("sp1"));
    assert_eq!(event.payload[12], str_field("admin,staff"));
}

#[tokio::test]
async fn test_failed_lookup_degrades_to_defaulted_roles() {
    let (sink, publisher) = shaper(MemoryDirectory::failing(), FieldDefaults::new());

    publisher.publish_authentication(&authn_data()).await;

    let events = sink.published();
    // The publish still happens; only the enrichment is lost.
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload[12], str_field(NOT_AVAILABLE));
}

#[rstest]
#[case::created(SessionAction::Created, 1)]
#[case::terminated(SessionAction::Terminated, 0)]
#[case::updated(SessionAction::Updated, 2)]
#[tokio::test]
async fn test_session_action_codes(#[case] action: SessionAction, #[case] code: i64) {
    let (sink, publisher) = shaper(MemoryDirectory::new(), FieldDefaults::new());

    publisher.publish_session(Some(&session_data()), action).await;

    let event = &sink.published()[0];
    assert_eq!(event.stream, streams::SESSION.qualified_name());
    assert_eq!(event.payload[4], FieldValue::Int(code));
}

#[tokio::test]
async fn test_session_record_shape() {
    let (sink, publisher) = shaper(MemoryDirectory::new(), FieldDefaults::new());

    publisher
        .publish_session(Some(&session_data()), SessionAction::Created)
        .await;

    let event = &sink.published()[0];
    assert_eq!(event.payload.len(), 11);
    assert_eq!(event.payload[0], str_field("sess-9"));
    assert_eq!(event.payload[1], FieldValue::Timestamp(100));
    assert_eq!(event.payload[2], FieldValue::Timestamp(200));
    assert_eq!(event.payload[3], FieldValue::Timestamp(0));
    assert_eq!(event.payload[5], str_field("bob"));
    assert_eq!(event.payload[6], str_field("SECONDARY"));
    assert_eq!(event.payload[7], str_field("198.51.100.4"));
    assert_eq!(event.payload[8], str_field("acme.example"));
    assert_eq!(event.payload[9], FieldValue::Bool(true));
    assert_eq!(event.payload[10], FieldValue::Timestamp(event.timestamp));
}

#[tokio::test]
async fn test_absent_session_snapshot_publishes_nothing() {
    let (sink, publisher) = shaper(MemoryDirectory::new(), FieldDefaults::new());
    let listener: Arc<dyn AuthEventListener> = Arc::new(publisher);

    listener.session_created(None).await;
    listener.session_updated(None).await;
    listener.session_terminated(None).await;

    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_listener_dispatch() {
    let directory = MemoryDirectory::new().with_user("acme.example", "PRIMARY/alice", ["admin"]);
    let (sink, publisher) = shaper(directory, FieldDefaults::new());
    let listener: Arc<dyn AuthEventListener> = Arc::new(publisher);

    assert_eq!(listener.name(), PUBLISHER_NAME);

    let data = authn_data();
    listener.authn_step_success(&data).await;
    listener.authn_step_failure(&data).await;
    listener.authn_success(&data).await;
    listener.authn_failure(&data).await;
    listener.session_created(Some(&session_data())).await;
    listener.session_terminated(Some(&session_data())).await;

    let events = sink.published();
    assert_eq!(events.len(), 6);
    let authn_stream = streams::AUTHENTICATION.qualified_name();
    assert_eq!(
        events.iter().filter(|e| e.stream == authn_stream).count(),
        4
    );
}
