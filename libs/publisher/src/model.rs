//! Input snapshots delivered by the host identity framework.
//!
//! Both structs are immutable images of one lifecycle notification: the
//! host builds them, the shaper reads them, nothing retains them. Empty
//! strings stand for fields the host could not populate; the shaper
//! substitutes configured defaults at the publish boundary.

use serde::{Deserialize, Serialize};

/// Snapshot of one authentication attempt notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthenticationData {
    /// Context id correlating the steps of one attempt.
    pub context_id: String,
    /// Unique id of this notification.
    pub event_id: String,
    /// Subject username.
    pub username: String,
    /// User-store domain the subject resolved against.
    pub user_store_domain: String,
    /// Tenant domain of the attempt.
    pub tenant_domain: String,
    /// Remote address of the caller.
    pub remote_ip: String,
    /// Inbound protocol of the request.
    pub inbound_protocol: String,
    /// Service provider the subject authenticated to.
    pub service_provider: String,
    /// Identity provider handling the step.
    pub identity_provider: String,
    /// Identity provider type marker (local or federated).
    pub identity_provider_type: String,
    /// Authenticator that executed the step.
    pub authenticator: String,
    /// Step number within the attempt.
    pub step: u32,
    /// Outcome of this authentication event.
    pub success: bool,
    /// Outcome of the attempt as a whole.
    pub overall_success: bool,
    /// Remember-me option was requested.
    pub remember_me: bool,
    /// Re-authentication was forced.
    pub forced_authn: bool,
    /// Passive authentication was requested.
    pub passive: bool,
    /// First login of the subject.
    pub initial_login: bool,
}

/// Snapshot of one session lifecycle transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    /// Session id.
    pub session_id: String,
    /// Creation instant, epoch milliseconds.
    pub created_at: i64,
    /// Last-update instant, epoch milliseconds.
    pub updated_at: i64,
    /// Termination instant, epoch milliseconds (0 while the session lives).
    pub terminated_at: i64,
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
}
