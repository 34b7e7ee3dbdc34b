#[cfg(test)]
pub mod helpers {
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, HeaderMap, HeaderValue, Request, Response},
    };
    use std::sync::Arc;

    use crate::auth::{AuthLinks, AuthState, IdentityProvider};
    use crate::routing::{AccessPolicy, InterceptScope, RouteMatcher, DEFAULT_PROTECTED_ROUTES};
    use crate::state::AppState;

    fn links() -> AuthLinks {
        AuthLinks {
            sign_in: "/sign-in".to_string(),
            sign_up: "/sign-up".to_string(),
        }
    }

    /// Answers every request with the same authentication state
    pub struct FixedProvider {
        state: AuthState,
        links: AuthLinks,
    }

    impl FixedProvider {
        pub fn signed_in(user_id: &str) -> Self {
            Self {
                state: AuthState::signed_in(user_id, Some("sess_test".to_string())),
                links: links(),
            }
        }

        pub fn signed_out() -> Self {
            Self {
                state: AuthState::signed_out(),
                links: links(),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn links(&self) -> &AuthLinks {
            &self.links
        }

        async fn authenticate(&self, _headers: &HeaderMap) -> Result<AuthState> {
            Ok(self.state.clone())
        }
    }

    /// Simulates an unreachable identity provider
    pub struct FailingProvider;

    #[async_trait]
    impl IdentityProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn links(&self) -> &AuthLinks {
            static LINKS: once_cell::sync::Lazy<AuthLinks> = once_cell::sync::Lazy::new(links);
            &LINKS
        }

        async fn authenticate(&self, _headers: &HeaderMap) -> Result<AuthState> {
            Err(anyhow!("identity provider timed out"))
        }
    }

    pub fn test_state(provider: impl IdentityProvider + 'static) -> AppState {
        state_with_routes(provider, DEFAULT_PROTECTED_ROUTES)
    }

    pub fn state_with_routes(provider: impl IdentityProvider + 'static, routes: &[&str]) -> AppState {
        let policy = AccessPolicy::new(RouteMatcher::new(routes).unwrap(), InterceptScope::default());
        AppState::new(Arc::new(provider), policy)
    }

    /// Headers of a browser page navigation
    pub fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers
    }

    pub fn page_request(path: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .body(Body::empty())
            .unwrap()
    }

    pub async fn body_string(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
