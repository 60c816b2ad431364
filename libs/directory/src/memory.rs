//! In-memory directory for tests and development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{Directory, DirectoryError, Realm};

/// In-memory tenant directory.
///
/// Populated up front via [`MemoryDirectory::with_user`]; realms are
/// immutable once built. A [`MemoryDirectory::failing`] variant errors
/// every lookup, for exercising degraded-directory paths.
#[derive(Default)]
pub struct MemoryDirectory {
    tenants: HashMap<String, MemoryRealm>,
    fail_lookups: bool,
}

#[derive(Default, Clone)]
struct MemoryRealm {
    users: HashMap<String, Vec<String>>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory whose realm lookups always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            tenants: HashMap::new(),
            fail_lookups: true,
        }
    }

    /// Registers `username` under `tenant_domain` with the given roles.
    #[must_use]
    pub fn with_user<I, S>(mut self, tenant_domain: &str, username: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let realm = self.tenants.entry(tenant_domain.to_string()).or_default();
        realm.users.insert(
            username.to_string(),
            roles.into_iter().map(Into::into).collect(),
        );
        self
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn realm(&self, tenant_domain: &str) -> Result<Arc<dyn Realm>, DirectoryError> {
        if self.fail_lookups {
            return Err(DirectoryError::RealmUnavailable {
                tenant: tenant_domain.to_string(),
                reason: "directory configured to fail".to_string(),
            });
        }

        self.tenants
            .get(tenant_domain)
            .map(|realm| Arc::new(realm.clone()) as Arc<dyn Realm>)
            .ok_or_else(|| DirectoryError::UnknownTenant(tenant_domain.to_string()))
    }
}

#[async_trait]
impl Realm for MemoryRealm {
    async fn user_exists(&self, username: &str) -> Result<bool, DirectoryError> {
        Ok(self.users.contains_key(username))
    }

    async fn roles_of(&self, username: &str) -> Result<Vec<String>, DirectoryError> {
        Ok(self.users.get(username).cloned().unwrap_or_default())
    }
}
