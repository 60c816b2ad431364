//! Directory and realm traits plus the role lookup helper.

use std::sync::Arc;

use async_trait::async_trait;

use crate::DirectoryError;

/// Tenant-scoped directory view: user existence and role membership.
#[async_trait]
pub trait Realm: Send + Sync {
    /// Checks whether `username` exists in this realm.
    async fn user_exists(&self, username: &str) -> Result<bool, DirectoryError>;

    /// Lists the role names of `username`, in directory order.
    async fn roles_of(&self, username: &str) -> Result<Vec<String>, DirectoryError>;
}

/// Resolves tenant domains to realms.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Resolves the realm for `tenant_domain`.
    async fn realm(&self, tenant_domain: &str) -> Result<Arc<dyn Realm>, DirectoryError>;
}

/// Outcome of a role-membership lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleLookup {
    /// The user exists; zero or more role names in directory order.
    Found(Vec<String>),

    /// The user does not exist in the tenant's directory.
    UserNotFound,
}

/// Looks up the roles of `username` in the realm of `tenant_domain`.
///
/// One attempt, no retry. Existence is checked before role listing so a
/// missing user is reported as [`RoleLookup::UserNotFound`] rather than an
/// empty role list.
///
/// # Errors
///
/// Propagates [`DirectoryError`] from realm resolution or the user store;
/// deciding whether that is fatal is the caller's concern.
pub async fn lookup_roles(
    directory: &dyn Directory,
    tenant_domain: &str,
    username: &str,
) -> Result<RoleLookup, DirectoryError> {
    let realm = directory.realm(tenant_domain).await?;

    if !realm.user_exists(username).await? {
        return Ok(RoleLookup::UserNotFound);
    }

    Ok(RoleLookup::Found(realm.roles_of(username).await?))
}
