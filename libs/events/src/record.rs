//! Named-field records for the positional stream schemas.
//!
//! The records keep every field addressable by name while the component
//! shapes them; [`AuthenticationRecord::into_fields`] and
//! [`SessionRecord::into_fields`] collapse them to the positional wire
//! layout. The field order in those two functions IS the stream contract
//! and must not change without a schema version bump.

use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// Session lifecycle transition kind.
///
/// The wire codes are part of the session stream contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    /// Session terminated (wire code 0).
    Terminated,
    /// Session created (wire code 1).
    Created,
    /// Session updated (wire code 2).
    Updated,
}

impl SessionAction {
    /// Returns the wire code for this transition.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            SessionAction::Terminated => 0,
            SessionAction::Created => 1,
            SessionAction::Updated => 2,
        }
    }
}

impl std::fmt::Display for SessionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionAction::Terminated => write!(f, "terminated"),
            SessionAction::Created => write!(f, "created"),
            SessionAction::Updated => write!(f, "updated"),
        }
    }
}

/// Shaped authentication record, one per lifecycle notification.
///
/// String fields arrive here already default-substituted; the record is a
/// faithful image of what goes on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticationRecord {
    /// Authentication context id correlating the steps of one attempt.
    pub context_id: String,
    /// Unique id of this notification.
    pub event_id: String,
    /// Outcome of this authentication event.
    pub success: bool,
    /// Subject username.
    pub username: String,
    /// User-store domain the subject resolved against.
    pub user_store_domain: String,
    /// Tenant domain of the attempt.
    pub tenant_domain: String,
    /// Remote address of the caller.
    pub remote_ip: String,
    /// Inbound protocol of the request (saml, oidc, ...).
    pub inbound_protocol: String,
    /// Service provider the subject authenticated to.
    pub service_provider: String,
    /// Remember-me option was requested.
    pub remember_me: bool,
    /// Re-authentication was forced.
    pub forced_authn: bool,
    /// Passive authentication was requested.
    pub passive: bool,
    /// Comma-joined role names, empty or defaulted when not resolvable.
    pub role_csv: String,
    /// Step number within the attempt, as a string.
    pub step: String,
    /// Identity provider handling the step.
    pub identity_provider: String,
    /// Outcome of the attempt as a whole.
    pub overall_success: bool,
    /// Authenticator that executed the step.
    pub authenticator: String,
    /// First login of the subject.
    pub initial_login: bool,
    /// Identity provider type marker (local or federated).
    pub identity_provider_type: String,
    /// Publish instant, epoch milliseconds.
    pub published_at: i64,
}

impl AuthenticationRecord {
    /// Collapses the record to the authentication stream's positional
    /// layout (20 fields, order fixed).
    #[must_use]
    pub fn into_fields(self) -> Vec<FieldValue> {
        vec![
            FieldValue::Str(self.context_id),
            FieldValue::Str(self.event_id),
            FieldValue::Bool(self.success),
            FieldValue::Str(self.username),
            FieldValue::Str(self.user_store_domain),
            FieldValue::Str(self.tenant_domain),
            FieldValue::Str(self.remote_ip),
            FieldValue::Str(self.inbound_protocol),
            FieldValue::Str(self.service_provider),
            FieldValue::Bool(self.remember_me),
            FieldValue::Bool(self.forced_authn),
            FieldValue::Bool(self.passive),
            FieldValue::Str(self.role_csv),
            FieldValue::Str(self.step),
            FieldValue::Str(self.identity_provider),
            FieldValue::Bool(self.overall_success),
            FieldValue::Str(self.authenticator),
            FieldValue::Bool(self.initial_login),
            FieldValue::Str(self.identity_provider_type),
            FieldValue::Timestamp(self.published_at),
        ]
    }
}

/// Shaped session record, one per session transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    /// Session id, defaulted when unavailable.
    pub session_id: String,
    /// Creation instant, epoch milliseconds.
    pub created_at: i64,
    /// Last-update instant, epoch milliseconds.
    pub updated_at: i64,
    /// Termination instant, epoch milliseconds (0 while the session lives).
    pub terminated_at: i64,
    /// Transition kind.
    pub action: SessionAction,
    /// Subject username.
    pub username: String,
    /// User-store domain the subject resolved against.
    pub user_store_domain: String,
    /// Remote address of the caller.
    pub remote_ip: String,
    /// Tenant domain owning the session.
    pub tenant_domain: String,
    /// Remember-me option is active on the session.
    pub remember_me: bool,
    /// Publish instant, epoch milliseconds.
    pub published_at: i64,
}

impl SessionRecord {
    /// Collapses the record to the session stream's positional layout
    /// (11 fields, order fixed).
    #[must_use]
    pub fn into_fields(self) -> Vec<FieldValue> {
        vec![
            FieldValue::Str(self.session_id),
            FieldValue::Timestamp(self.created_at),
            FieldValue::Timestamp(self.updated_at),
            FieldValue::Timestamp(self.terminated_at),
            FieldValue::Int(self.action.code()),
            FieldValue::Str(self.username),
            FieldValue::Str(self.user_store_domain),
            FieldValue::Str(self.remote_ip),
            FieldValue::Str(self.tenant_domain),
            FieldValue::Bool(self.remember_me),
            FieldValue::Timestamp(self.published_at),
        ]
    }
}
