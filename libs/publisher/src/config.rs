//! Configured default values for optional record fields.

use std::collections::HashMap;

/// Sentinel emitted when a field has no actual or configured value.
pub const NOT_AVAILABLE: &str = "NOT_AVAILABLE";

/// Environment variable prefix for configured defaults.
const ENV_PREFIX: &str = "IDSIGHT_DEFAULT_";

/// Field names recognized by the defaults table.
pub mod fields {
    pub const USERNAME: &str = "username";
    pub const USER_STORE_DOMAIN: &str = "user_store_domain";
    pub const SESSION_ID: &str = "session_id";
    pub const ROLES: &str = "roles";
    pub const SERVICE_PROVIDER: &str = "service_provider";
    pub const IDENTITY_PROVIDER: &str = "identity_provider";
}

/// Per-field default values, applied when a notification field is empty.
///
/// A field with no configured default falls back to [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Default)]
pub struct FieldDefaults {
    defaults: HashMap<String, String>,
}

impl FieldDefaults {
    /// Creates an empty table: every empty field maps to the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads defaults from `IDSIGHT_DEFAULT_*` environment variables.
    ///
    /// `IDSIGHT_DEFAULT_USER_STORE_DOMAIN=PRIMARY` configures the
    /// `user_store_domain` field.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = std::env::vars()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|field| (field.to_lowercase(), value))
            })
            .collect();

        Self { defaults }
    }

    /// Registers a default value for `field`.
    #[must_use]
    pub fn with_default(mut self, field: &str, value: &str) -> Self {
        self.defaults.insert(field.to_string(), value.to_string());
        self
    }

    /// Returns the configured default for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.defaults.get(field).map(String::as_str)
    }
}
