//! Role resolution for access-control scoping of popular-word queries.

use async_trait::async_trait;

/// Supplies the calling context's access roles when a request does not
/// carry them explicitly.
#[async_trait]
pub trait RoleResolver: Send + Sync {
    /// Role identifiers to scope the query by.
    async fn resolve(&self) -> Vec<String>;
}

/// Resolver returning a fixed role set configured at startup.
///
/// The service runs behind an auth proxy with no per-user session, so
/// every unscoped request resolves to the deployment's configured roles.
pub struct StaticRoleResolver {
    roles: Vec<String>,
}

impl StaticRoleResolver {
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl RoleResolver for StaticRoleResolver {
    async fn resolve(&self) -> Vec<String> {
        self.roles.clone()
    }
}
