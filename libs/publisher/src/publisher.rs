//! The analytics publisher: shapes lifecycle notifications into stream
//! records and hands them to the sink.
//!
//! Shaping is total. Role enrichment is the only fallible step and it
//! collapses to an empty role list; a notification that reaches a shaping
//! entry point always either publishes exactly one event or (for an
//! absent session snapshot) deliberately publishes nothing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, enabled, error, Level};

use idsight_directory::{lookup_roles, Directory, RoleLookup};
use idsight_events::{
    streams, AnalyticsEvent, AuthenticationRecord, FieldValue, SessionAction, SessionRecord,
    StreamDef,
};

use crate::config::{fields, FieldDefaults, NOT_AVAILABLE};
use crate::listener::AuthEventListener;
use crate::model::{AuthenticationData, SessionData};
use crate::sink::EventSink;

/// Identity-provider type marker for locally managed subjects.
///
/// Role enrichment only makes sense for local subjects; federated ones
/// have no entry in the tenant directory.
pub const LOCAL_IDP_TYPE: &str = "LOCAL";

/// Registration name of this listener in the host's registry.
pub const PUBLISHER_NAME: &str = "idsight_authn_publisher";

/// Shapes authentication and session notifications into analytics events.
///
/// Holds no mutable state; concurrent invocations are independent.
pub struct AnalyticsPublisher {
    sink: Arc<dyn EventSink>,
    directory: Arc<dyn Directory>,
    defaults: FieldDefaults,
}

impl AnalyticsPublisher {
    /// Creates a publisher over the given sink and directory.
    pub fn new(
        sink: Arc<dyn EventSink>,
        directory: Arc<dyn Directory>,
        defaults: FieldDefaults,
    ) -> Self {
        Self {
            sink,
            directory,
            defaults,
        }
    }

    /// Shapes and publishes one authentication record.
    pub async fn publish_authentication(&self, data: &AuthenticationData) {
        let role_csv = if data
            .identity_provider_type
            .eq_ignore_ascii_case(LOCAL_IDP_TYPE)
        {
            self.resolve_role_csv(&data.username, &data.user_store_domain, &data.tenant_domain)
                .await
        } else {
            String::new()
        };

        let now = Utc::now();
        let record = AuthenticationRecord {
            context_id: data.context_id.clone(),
            event_id: data.event_id.clone(),
            success: data.success,
            username: self.apply_default(fields::USERNAME, &data.username),
            user_store_domain: self
                .apply_default(fields::USER_STORE_DOMAIN, &data.user_store_domain),
            tenant_domain: data.tenant_domain.clone(),
            remote_ip: data.remote_ip.clone(),
            inbound_protocol: data.inbound_protocol.clone(),
            service_provider: self.apply_default(fields::SERVICE_PROVIDER, &data.service_provider),
            remember_me: data.remember_me,
            forced_authn: data.forced_authn,
            passive: data.passive,
            role_csv: self.apply_default(fields::ROLES, &role_csv),
            step: data.step.to_string(),
            identity_provider: self
                .apply_default(fields::IDENTITY_PROVIDER, &data.identity_provider),
            overall_success: data.overall_success,
            authenticator: data.authenticator.clone(),
            initial_login: data.initial_login,
            identity_provider_type: data.identity_provider_type.clone(),
            published_at: now.timestamp_millis(),
        };

        self.emit(streams::AUTHENTICATION, now, record.into_fields())
            .await;
    }

    /// Shapes and publishes one session record.
    ///
    /// An absent snapshot is a silent no-op: nothing is logged and
    /// nothing is published.
    pub async fn publish_session(&self, data: Option<&SessionData>, action: SessionAction) {
        let Some(data) = data else {
            return;
        };

        let now = Utc::now();
        let record = SessionRecord {
            session_id: self.apply_default(fields::SESSION_ID, &data.session_id),
            created_at: data.created_at,
            updated_at: data.updated_at,
            terminated_at: data.terminated_at,
            action,
            username: self.apply_default(fields::USERNAME, &data.username),
            user_store_domain: self
                .apply_default(fields::USER_STORE_DOMAIN, &data.user_store_domain),
            remote_ip: data.remote_ip.clone(),
            tenant_domain: data.tenant_domain.clone(),
            remember_me: data.remember_me,
            published_at: now.timestamp_millis(),
        };

        self.emit(streams::SESSION, now, record.into_fields()).await;
    }

    async fn emit(
        &self,
        stream: StreamDef,
        occurred_at: DateTime<Utc>,
        payload: Vec<FieldValue>,
    ) {
        match AnalyticsEvent::new(stream, occurred_at, payload) {
            Ok(event) => {
                if enabled!(Level::DEBUG) {
                    for (index, field) in event.payload.iter().enumerate() {
                        debug!(stream = %event.stream, index, value = %field, "Shaped payload entry");
                    }
                }
                self.sink.publish(event).await;
            }
            Err(e) => {
                error!(stream = stream.name, error = %e, "Dropping malformed analytics event");
            }
        }
    }

    /// Resolves the comma-joined role list for a local subject.
    ///
    /// Returns an empty string when the tenant or username is missing,
    /// the user does not exist, or the lookup fails. One attempt, errors
    /// logged and swallowed.
    async fn resolve_role_csv(
        &self,
        username: &str,
        user_store_domain: &str,
        tenant_domain: &str,
    ) -> String {
        if tenant_domain.is_empty() || username.is_empty() {
            return String::new();
        }

        let qualified = if user_store_domain.is_empty() {
            username.to_string()
        } else {
            format!("{user_store_domain}/{username}")
        };

        debug!(username = %qualified, tenant = %tenant_domain, "Resolving roles");

        match lookup_roles(self.directory.as_ref(), tenant_domain, &qualified).await {
            Ok(RoleLookup::Found(roles)) => roles.join(","),
            Ok(RoleLookup::UserNotFound) => {
                debug!(username = %qualified, tenant = %tenant_domain, "No such user, no roles");
                String::new()
            }
            Err(e) => {
                error!(
                    username = %qualified,
                    tenant = %tenant_domain,
                    error = %e,
                    "Role lookup failed"
                );
                String::new()
            }
        }
    }

    /// Returns `value` unless empty, else the configured default for
    /// `field`, else the [`NOT_AVAILABLE`] sentinel.
    fn apply_default(&self, field: &str, value: &str) -> String {
        if !value.is_empty() {
            return value.to_string();
        }

        match self.defaults.get(field) {
            Some(configured) => configured.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl AuthEventListener for AnalyticsPublisher {
    fn name(&self) -> &'static str {
        PUBLISHER_NAME
    }

    async fn authn_step_success(&self, data: &AuthenticationData) {
        debug!("Publishing authentication step success");
        self.publish_authentication(data).await;
    }

    async fn authn_step_failure(&self, data: &AuthenticationData) {
        debug!("Publishing authentication step failure");
        self.publish_authentication(data).await;
    }

    async fn authn_success(&self, data: &AuthenticationData) {
        debug!("Publishing authentication success");
        self.publish_authentication(data).await;
    }

    async fn authn_failure(&self, data: &AuthenticationData) {
        debug!("Publishing authentication failure");
        self.publish_authentication(data).await;
    }

    async fn session_created(&self, data: Option<&SessionData>) {
        self.publish_session(data, SessionAction::Created).await;
    }

    async fn session_updated(&self, data: Option<&SessionData>) {
        self.publish_session(data, SessionAction::Updated).await;
    }

    async fn session_terminated(&self, data: Option<&SessionData>) {
        self.publish_session(data, SessionAction::Terminated).await;
    }
}
