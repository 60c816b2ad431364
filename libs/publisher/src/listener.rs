//! Host-facing lifecycle listener interface.

use async_trait::async_trait;

use crate::model::{AuthenticationData, SessionData};

/// Lifecycle listener the host identity framework drives.
///
/// The host holds one `Arc<dyn AuthEventListener>` per registered
/// analytics consumer and invokes the matching method for every lifecycle
/// notification, on whatever task delivers it. Methods never fail:
/// shaping degrades, it does not error.
///
/// Session methods accept an optional snapshot because some host code
/// paths fire the callback without one; the listener treats that as a
/// silent no-op.
#[async_trait]
pub trait AuthEventListener: Send + Sync {
    /// Stable name for the host's listener registry.
    fn name(&self) -> &'static str;

    /// One authentication step succeeded.
    async fn authn_step_success(&self, data: &AuthenticationData);

    /// One authentication step failed.
    async fn authn_step_failure(&self, data: &AuthenticationData);

    /// The overall authentication attempt succeeded.
    async fn authn_success(&self, data: &AuthenticationData);

    /// The overall authentication attempt failed.
    async fn authn_failure(&self, data: &AuthenticationData);

    /// A session was created.
    async fn session_created(&self, data: Option<&SessionData>);

    /// A session was updated.
    async fn session_updated(&self, data: Option<&SessionData>);

    /// A session was terminated.
    async fn session_terminated(&self, data: Option<&SessionData>);
}
