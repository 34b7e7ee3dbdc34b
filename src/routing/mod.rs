pub mod matcher;
pub mod scope;

use anyhow::Result;

use crate::config::Settings;

pub use matcher::{RouteMatcher, RoutePattern, DEFAULT_PROTECTED_ROUTES};
pub use scope::{InterceptScope, INTERNAL_ASSET_PREFIX};

/// Application root; authenticated visitors are sent away from it
pub const ROOT_PATH: &str = "/";

/// Landing target for authenticated visitors
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Static route table consulted by the access-control middleware
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    routes: RouteMatcher,
    scope: InterceptScope,
}

impl AccessPolicy {
    pub fn new(routes: RouteMatcher, scope: InterceptScope) -> Self {
        Self { routes, scope }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let routes = if settings.protected_routes.is_empty() {
            RouteMatcher::new(DEFAULT_PROTECTED_ROUTES)?
        } else {
            RouteMatcher::new(&settings.protected_routes)?
        };

        Ok(Self::new(routes, InterceptScope::default()))
    }

    pub fn intercepts(&self, path: &str) -> bool {
        self.scope.intercepts(path)
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.routes.is_protected(path)
    }

    pub fn routes(&self) -> &RouteMatcher {
        &self.routes
    }
}
