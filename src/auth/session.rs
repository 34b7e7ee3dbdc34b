use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{session_token, AuthLinks, AuthState, IdentityProvider};
use crate::config::Settings;

/// Session claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Session ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Authorized party (origin the session was issued for)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
}

/// Generate an HS256 session token, as the provider would for `user_id`
pub fn create_session_token(
    secret: &str,
    user_id: &str,
    session_id: Option<&str>,
    ttl: Duration,
) -> Result<String> {
    let now = Utc::now();

    let claims = SessionClaims {
        sub: user_id.to_string(),
        sid: session_id.map(str::to_string),
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
        azp: None,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verifies provider-issued session tokens locally, without a network hop.
pub struct SessionTokenProvider {
    cookie_name: String,
    key: DecodingKey,
    validation: Validation,
    authorized_parties: Vec<String>,
    links: AuthLinks,
}

impl SessionTokenProvider {
    /// HS256 with a secret shared with the provider
    pub fn with_secret(secret: &str, cookie_name: &str, links: AuthLinks) -> Self {
        Self {
            cookie_name: cookie_name.to_string(),
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            authorized_parties: Vec::new(),
            links,
        }
    }

    /// RS256 with the provider's PEM public key
    pub fn with_public_key(pem: &str, cookie_name: &str, links: AuthLinks) -> Result<Self> {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| anyhow!("Invalid SESSION_PUBLIC_KEY: {}", e))?;

        Ok(Self {
            cookie_name: cookie_name.to_string(),
            key,
            validation: Validation::new(Algorithm::RS256),
            authorized_parties: Vec::new(),
            links,
        })
    }

    pub fn from_settings(settings: &Settings, links: AuthLinks) -> Result<Self> {
        let provider = match settings.session_public_key.as_deref() {
            Some(pem) => Self::with_public_key(pem, &settings.session_cookie, links)?,
            None => {
                if settings.session_secret.is_empty() {
                    return Err(anyhow!(
                        "SESSION_SECRET or SESSION_PUBLIC_KEY must be set for the session-token provider"
                    ));
                }
                Self::with_secret(&settings.session_secret, &settings.session_cookie, links)
            }
        };

        Ok(provider.authorized_parties(settings.authorized_parties.clone()))
    }

    /// Only accept sessions whose `azp` is one of `parties` (empty accepts all)
    pub fn authorized_parties(mut self, parties: Vec<String>) -> Self {
        self.authorized_parties = parties;
        self
    }

    /// Verify and decode a session token
    pub fn verify_session_token(&self, token: &str) -> Result<SessionClaims> {
        let token_data = decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(|e| anyhow!("Invalid session token: {}", e))?;
        let claims = token_data.claims;

        if !self.authorized_parties.is_empty() {
            let party = claims.azp.as_deref().unwrap_or_default();
            if !self.authorized_parties.iter().any(|p| p == party) {
                return Err(anyhow!("Session issued for unauthorized party '{}'", party));
            }
        }

        Ok(claims)
    }
}

#[async_trait]
impl IdentityProvider for SessionTokenProvider {
    fn name(&self) -> &str {
        "session-token"
    }

    fn links(&self) -> &AuthLinks {
        &self.links
    }

    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthState> {
        let Some(token) = session_token(headers, &self.cookie_name) else {
            return Ok(AuthState::signed_out());
        };

        match self.verify_session_token(&token) {
            Ok(claims) => Ok(AuthState::signed_in(claims.sub, claims.sid)),
            Err(e) => {
                debug!("Treating request as signed out: {}", e);
                Ok(AuthState::signed_out())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Challenge, Protection};
    use axum::http::{header, HeaderValue, Uri};

    const SECRET: &str = "test-session-secret";

    fn links() -> AuthLinks {
        AuthLinks {
            sign_in: "/sign-in".to_string(),
            sign_up: "/sign-up".to_string(),
        }
    }

    fn provider() -> SessionTokenProvider {
        SessionTokenProvider::with_secret(SECRET, "__session", links())
    }

    fn cookie(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("__session={}", token)).unwrap(),
        );
        headers
    }

    fn token_with(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_for(user_id: &str, azp: Option<&str>) -> SessionClaims {
        let now = Utc::now();
        SessionClaims {
            sub: user_id.to_string(),
            sid: Some("sess_1".to_string()),
            exp: (now + Duration::minutes(5)).timestamp(),
            iat: now.timestamp(),
            azp: azp.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_valid_session_is_signed_in() {
        let token = create_session_token(SECRET, "u1", Some("sess_1"), Duration::minutes(5)).unwrap();

        let state = provider().authenticate(&cookie(&token)).await.unwrap();

        assert_eq!(state, AuthState::signed_in("u1", Some("sess_1".to_string())));
    }

    #[tokio::test]
    async fn test_missing_session_is_signed_out() {
        let state = provider().authenticate(&HeaderMap::new()).await.unwrap();
        assert!(!state.is_signed_in());
    }

    #[tokio::test]
    async fn test_tampered_and_expired_sessions_are_signed_out() {
        let forged = create_session_token("other-secret", "u1", None, Duration::minutes(5)).unwrap();
        assert!(!provider().authenticate(&cookie(&forged)).await.unwrap().is_signed_in());

        let expired = create_session_token(SECRET, "u1", None, Duration::hours(-2)).unwrap();
        assert!(!provider().authenticate(&cookie(&expired)).await.unwrap().is_signed_in());

        assert!(!provider().authenticate(&cookie("not-a-jwt")).await.unwrap().is_signed_in());
    }

    #[tokio::test]
    async fn test_authorized_parties_are_enforced() {
        let provider = provider().authorized_parties(vec!["https://shortly.app".to_string()]);

        let ok = token_with(&claims_for("u1", Some("https://shortly.app")), SECRET);
        assert!(provider.authenticate(&cookie(&ok)).await.unwrap().is_signed_in());

        let foreign = token_with(&claims_for("u1", Some("https://evil.example")), SECRET);
        assert!(!provider.authenticate(&cookie(&foreign)).await.unwrap().is_signed_in());

        let missing = token_with(&claims_for("u1", None), SECRET);
        assert!(!provider.authenticate(&cookie(&missing)).await.unwrap().is_signed_in());
    }

    #[tokio::test]
    async fn test_protect_grants_or_challenges() {
        let uri: Uri = "/dashboard".parse().unwrap();
        let token = create_session_token(SECRET, "u1", None, Duration::minutes(5)).unwrap();

        let granted = provider().protect(&cookie(&token), &uri).await.unwrap();
        assert_eq!(granted, Protection::Granted(AuthState::signed_in("u1", None)));

        let denied = provider().protect(&HeaderMap::new(), &uri).await.unwrap();
        assert_eq!(denied, Protection::Challenge(Challenge::Unauthorized));
    }

    #[test]
    fn test_invalid_public_key_is_rejected() {
        assert!(SessionTokenProvider::with_public_key("not a pem", "__session", links()).is_err());
    }
}
