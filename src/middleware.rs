//! Access control applied to every intercepted request before any page runs.
//!
//! Two policies, in order: protected paths require a session (the provider's
//! challenge otherwise), then a signed-in request for `/` is sent to the
//! dashboard.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::time::Instant;
use tracing::debug;

use crate::auth::{AuthState, Challenge, Protection};
use crate::monitoring;
use crate::routing::{DASHBOARD_PATH, ROOT_PATH};
use crate::state::AppState;
use crate::web::WebError;

/// What the middleware decided for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Outside the interception surface
    Skipped,
    Passthrough,
    Challenge(Challenge),
    Redirect(String),
}

impl Decision {
    fn label(&self) -> &'static str {
        match self {
            Decision::Skipped => "skipped",
            Decision::Passthrough => "passthrough",
            Decision::Challenge(_) => "challenge",
            Decision::Redirect(_) => "root_redirect",
        }
    }
}

pub async fn access_control(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, WebError> {
    let decision = decide(&state, req.headers(), req.uri()).await?;

    debug!(path = %req.uri().path(), decision = decision.label(), "Access control");
    monitoring::ACCESS_DECISIONS
        .with_label_values(&[decision.label()])
        .inc();

    match decision {
        Decision::Skipped | Decision::Passthrough => Ok(next.run(req).await),
        Decision::Challenge(challenge) => Ok(challenge.into_response()),
        Decision::Redirect(target) => Ok(Redirect::temporary(&target).into_response()),
    }
}

/// Apply both policies to a request. Provider failures are returned, not
/// recovered.
pub async fn decide(state: &AppState, headers: &HeaderMap, uri: &Uri) -> Result<Decision, WebError> {
    let path = uri.path();

    if !state.policy.intercepts(path) {
        return Ok(Decision::Skipped);
    }

    let mut auth = None;

    if state.policy.is_protected(path) {
        match protect(state, headers, uri).await? {
            Protection::Granted(granted) => auth = Some(granted),
            Protection::Challenge(challenge) => return Ok(Decision::Challenge(challenge)),
        }
    }

    if path == ROOT_PATH {
        let auth = match auth {
            Some(auth) => auth,
            None => read_auth_state(state, headers).await?,
        };
        if auth.is_signed_in() {
            return Ok(Decision::Redirect(DASHBOARD_PATH.to_string()));
        }
    }

    Ok(Decision::Passthrough)
}

/// Ask the provider for the current request's session
pub async fn read_auth_state(state: &AppState, headers: &HeaderMap) -> Result<AuthState, WebError> {
    let start = Instant::now();
    let result = state.provider.authenticate(headers).await;
    monitoring::AUTH_LATENCY.observe(start.elapsed().as_secs_f64());

    result.map_err(|e| provider_failure(state, e))
}

async fn protect(state: &AppState, headers: &HeaderMap, uri: &Uri) -> Result<Protection, WebError> {
    let start = Instant::now();
    let result = state.provider.protect(headers, uri).await;
    monitoring::AUTH_LATENCY.observe(start.elapsed().as_secs_f64());

    result.map_err(|e| provider_failure(state, e))
}

fn provider_failure(state: &AppState, error: anyhow::Error) -> WebError {
    monitoring::PROVIDER_ERRORS
        .with_label_values(&[state.provider.name()])
        .inc();
    WebError::ProviderUnavailable(error)
}
