use std::sync::Arc;

use crate::auth::IdentityProvider;
use crate::routing::AccessPolicy;

/// Shared, read-only request context
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn IdentityProvider>,
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(provider: Arc<dyn IdentityProvider>, policy: AccessPolicy) -> Self {
        Self {
            provider,
            policy: Arc::new(policy),
        }
    }
}
