use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use axum::http::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{session_token, AuthLinks, AuthState, IdentityProvider};
use crate::config::Settings;

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifiedSession {
    user_id: String,
    #[serde(default)]
    session_id: Option<String>,
}

/// Asks the identity provider's API whether a session token is valid.
///
/// Rejections map to a signed-out state; transport failures, timeouts and
/// unexpected statuses are returned as errors.
pub struct RemoteSessionProvider {
    client: reqwest::Client,
    verify_url: String,
    secret_key: String,
    cookie_name: String,
    links: AuthLinks,
}

impl RemoteSessionProvider {
    pub fn new(
        api_url: &str,
        secret_key: &str,
        cookie_name: &str,
        timeout: Duration,
        links: AuthLinks,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build identity provider HTTP client")?;

        Ok(Self {
            client,
            verify_url: format!("{}/v1/sessions/verify", api_url.trim_end_matches('/')),
            secret_key: secret_key.to_string(),
            cookie_name: cookie_name.to_string(),
            links,
        })
    }

    pub fn from_settings(settings: &Settings, links: AuthLinks) -> Result<Self> {
        if settings.identity_secret_key.is_empty() {
            return Err(anyhow!(
                "IDENTITY_SECRET_KEY must be set for the remote identity provider"
            ));
        }

        Self::new(
            &settings.identity_api_url,
            &settings.identity_secret_key,
            &settings.session_cookie,
            Duration::from_millis(settings.identity_timeout_ms),
            links,
        )
    }
}

#[async_trait]
impl IdentityProvider for RemoteSessionProvider {
    fn name(&self) -> &str {
        "remote"
    }

    fn links(&self) -> &AuthLinks {
        &self.links
    }

    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthState> {
        let Some(token) = session_token(headers, &self.cookie_name) else {
            return Ok(AuthState::signed_out());
        };

        let response = self
            .client
            .post(&self.verify_url)
            .bearer_auth(&self.secret_key)
            .json(&VerifyRequest { token: &token })
            .send()
            .await
            .with_context(|| format!("Failed to reach identity provider at {}", self.verify_url))?;

        match response.status() {
            StatusCode::OK => {
                let session: VerifiedSession = response
                    .json()
                    .await
                    .context("Failed to parse identity provider response")?;
                Ok(AuthState::signed_in(session.user_id, session.session_id))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                debug!("Identity provider rejected session ({})", response.status());
                Ok(AuthState::signed_out())
            }
            status => Err(anyhow!(
                "Identity provider returned unexpected status {}",
                status
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};
    use mockito::Matcher;
    use std::io::Write;

    fn links() -> AuthLinks {
        AuthLinks {
            sign_in: "/sign-in".to_string(),
            sign_up: "/sign-up".to_string(),
        }
    }

    fn provider(url: &str) -> RemoteSessionProvider {
        RemoteSessionProvider::new(url, "sk_test", "__session", Duration::from_secs(2), links())
            .unwrap()
    }

    fn cookie(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("__session={}", token)).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_verified_session_is_signed_in() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/sessions/verify")
            .match_header("authorization", "Bearer sk_test")
            .match_body(Matcher::Json(serde_json::json!({ "token": "tok_1" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"user_id":"u1","session_id":"sess_1"}"#)
            .create_async()
            .await;

        let state = provider(&server.url())
            .authenticate(&cookie("tok_1"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(state, AuthState::signed_in("u1", Some("sess_1".to_string())));
    }

    #[tokio::test]
    async fn test_rejected_session_is_signed_out() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/sessions/verify")
            .with_status(401)
            .create_async()
            .await;

        let state = provider(&server.url())
            .authenticate(&cookie("tok_expired"))
            .await
            .unwrap();

        assert!(!state.is_signed_in());
    }

    #[tokio::test]
    async fn test_no_token_skips_the_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/sessions/verify")
            .expect(0)
            .create_async()
            .await;

        let state = provider(&server.url())
            .authenticate(&HeaderMap::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(!state.is_signed_in());
    }

    #[tokio::test]
    async fn test_provider_outage_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/sessions/verify")
            .with_status(503)
            .create_async()
            .await;

        let result = provider(&server.url()).authenticate(&cookie("tok_1")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/sessions/verify")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(800));
                w.write_all(br#"{"user_id":"u1"}"#)
            })
            .create_async()
            .await;

        let provider = RemoteSessionProvider::new(
            &server.url(),
            "sk_test",
            "__session",
            Duration::from_millis(100),
            links(),
        )
        .unwrap();

        let result = provider.authenticate(&cookie("tok_1")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_an_error() {
        // Nothing listens on port 9 locally
        let result = provider("http://127.0.0.1:9")
            .authenticate(&cookie("tok_1"))
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_secret_key_is_rejected() {
        let mut settings = Settings::new();
        settings.identity_secret_key = String::new();

        assert!(RemoteSessionProvider::from_settings(&settings, links()).is_err());
    }
}
