//! Error types for directory lookups.

use thiserror::Error;

/// Errors that can occur when querying a tenant directory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No realm is registered for the tenant domain.
    #[error("unknown tenant domain: {0}")]
    UnknownTenant(String),

    /// The realm exists but could not be reached.
    #[error("realm unavailable for tenant {tenant}: {reason}")]
    RealmUnavailable { tenant: String, reason: String },

    /// The user store rejected or failed the query.
    #[error("user store error: {0}")]
    UserStore(String),
}
