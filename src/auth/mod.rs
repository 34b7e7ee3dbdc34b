pub mod remote;
pub mod session;

use anyhow::{bail, Result};
use async_trait::async_trait;
use axum::{
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::config::Settings;

pub use remote::RemoteSessionProvider;
pub use session::SessionTokenProvider;

/// Whether the current request carries a valid session, and for whom.
///
/// Computed by the identity provider for one request; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            session_id,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Hosted pages where visitors sign in or create an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthLinks {
    pub sign_in: String,
    pub sign_up: String,
}

impl AuthLinks {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sign_in: settings.sign_in_url.clone(),
            sign_up: settings.sign_up_url.clone(),
        }
    }
}

/// Response the provider gives a request that failed enforcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Challenge {
    /// Send the browser to the hosted sign-in page
    SignIn { location: String },
    /// Non-document requests are refused outright
    Unauthorized,
}

impl IntoResponse for Challenge {
    fn into_response(self) -> Response {
        match self {
            Challenge::SignIn { location } => Redirect::temporary(&location).into_response(),
            Challenge::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
        }
    }
}

/// Outcome of the "require authentication" capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protection {
    Granted(AuthState),
    Challenge(Challenge),
}

/// An identity provider reads the session of a request and enforces it.
///
/// `authenticate` only fails on infrastructure errors; a missing or invalid
/// session is a signed-out state.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn name(&self) -> &str;

    fn links(&self) -> &AuthLinks;

    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthState>;

    fn challenge(&self, headers: &HeaderMap, uri: &Uri) -> Challenge {
        sign_in_challenge(headers, uri, &self.links().sign_in)
    }

    async fn protect(&self, headers: &HeaderMap, uri: &Uri) -> Result<Protection> {
        let state = self.authenticate(headers).await?;
        if state.is_signed_in() {
            Ok(Protection::Granted(state))
        } else {
            Ok(Protection::Challenge(self.challenge(headers, uri)))
        }
    }
}

/// Build the provider named by `AUTH_PROVIDER`.
pub fn create_provider(settings: &Settings) -> Result<Arc<dyn IdentityProvider>> {
    let links = AuthLinks::from_settings(settings);

    let provider: Arc<dyn IdentityProvider> = match settings.auth_provider.as_str() {
        "session-token" => Arc::new(SessionTokenProvider::from_settings(settings, links)?),
        "remote" => Arc::new(RemoteSessionProvider::from_settings(settings, links)?),
        other => bail!(
            "Unknown AUTH_PROVIDER '{}' (expected 'session-token' or 'remote')",
            other
        ),
    };

    info!("Identity provider initialized: {}", provider.name());
    Ok(provider)
}

/// Session token from the session cookie, or from a bearer header for
/// non-browser clients.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

/// Page navigations are redirected to sign in with a way back; everything
/// else gets a 401.
pub fn sign_in_challenge(headers: &HeaderMap, uri: &Uri, sign_in_url: &str) -> Challenge {
    let wants_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));

    if !wants_html {
        return Challenge::Unauthorized;
    }

    let return_to = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let separator = if sign_in_url.contains('?') { '&' } else { '?' };

    Challenge::SignIn {
        location: format!(
            "{}{}redirect_url={}",
            sign_in_url,
            separator,
            urlencoding::encode(return_to)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_session_token_prefers_cookie() {
        let map = headers(&[
            (header::COOKIE, "theme=dark; __session=cookie-token"),
            (header::AUTHORIZATION, "Bearer header-token"),
        ]);

        assert_eq!(session_token(&map, "__session").as_deref(), Some("cookie-token"));
    }

    #[test]
    fn test_session_token_falls_back_to_bearer() {
        let map = headers(&[(header::AUTHORIZATION, "Bearer header-token")]);
        assert_eq!(session_token(&map, "__session").as_deref(), Some("header-token"));

        let map = headers(&[(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        assert_eq!(session_token(&map, "__session"), None);

        let map = headers(&[(header::COOKIE, "__session=")]);
        assert_eq!(session_token(&map, "__session"), None);
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        for value in ["bearer tok_1", "BEARER tok_1", "Bearer  tok_1"] {
            let map = headers(&[(header::AUTHORIZATION, value)]);
            assert_eq!(session_token(&map, "__session").as_deref(), Some("tok_1"), "{}", value);
        }

        let map = headers(&[(header::AUTHORIZATION, "Bearer")]);
        assert_eq!(session_token(&map, "__session"), None);
    }

    #[test]
    fn test_document_requests_are_sent_to_sign_in() {
        let map = headers(&[(header::ACCEPT, "text/html,application/xhtml+xml")]);
        let uri: Uri = "/dashboard/settings?tab=links".parse().unwrap();

        let challenge = sign_in_challenge(&map, &uri, "/sign-in");

        assert_eq!(
            challenge,
            Challenge::SignIn {
                location: "/sign-in?redirect_url=%2Fdashboard%2Fsettings%3Ftab%3Dlinks"
                    .to_string()
            }
        );
    }

    #[test]
    fn test_sign_in_url_with_query_keeps_it() {
        let map = headers(&[(header::ACCEPT, "text/html")]);
        let uri: Uri = "/dashboard".parse().unwrap();

        let challenge = sign_in_challenge(&map, &uri, "https://accounts.shortly.app/sign-in?lang=en");

        assert_eq!(
            challenge,
            Challenge::SignIn {
                location: "https://accounts.shortly.app/sign-in?lang=en&redirect_url=%2Fdashboard"
                    .to_string()
            }
        );
    }

    #[test]
    fn test_other_requests_are_unauthorized() {
        let uri: Uri = "/dashboard".parse().unwrap();

        assert_eq!(
            sign_in_challenge(&headers(&[(header::ACCEPT, "application/json")]), &uri, "/sign-in"),
            Challenge::Unauthorized
        );
        assert_eq!(
            sign_in_challenge(&HeaderMap::new(), &uri, "/sign-in"),
            Challenge::Unauthorized
        );
        assert_eq!(
            Challenge::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_sign_in_challenge_is_a_temporary_redirect() {
        let response = Challenge::SignIn {
            location: "/sign-in".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/sign-in");
    }
}
