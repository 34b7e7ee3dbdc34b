pub mod components;
pub mod dashboard;
pub mod error;
pub mod landing;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use maud::{html, Markup};

use crate::auth::AuthState;
use crate::middleware::read_auth_state;
use crate::state::AppState;

pub use error::WebError;

/// What a page render produced. Redirects are values, not early exits.
#[derive(Debug, Clone)]
pub enum RenderOutcome {
    Content(Markup),
    Redirect(String),
}

impl RenderOutcome {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            RenderOutcome::Redirect(target) => Some(target),
            RenderOutcome::Content(_) => None,
        }
    }
}

impl IntoResponse for RenderOutcome {
    fn into_response(self) -> Response {
        match self {
            RenderOutcome::Content(markup) => markup.into_response(),
            RenderOutcome::Redirect(target) => Redirect::temporary(&target).into_response(),
        }
    }
}

/// Pages read the session themselves, independent of the middleware.
#[async_trait]
impl FromRequestParts<AppState> for AuthState {
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        read_auth_state(state, &parts.headers).await
    }
}

/// 404 Not Found page
pub async fn not_found() -> (StatusCode, Markup) {
    (
        StatusCode::NOT_FOUND,
        components::layout::base(
            "404 Not Found",
            html! {
                div class="flex min-h-screen items-center justify-center bg-zinc-50" {
                    div class="text-center" {
                        h1 class="mb-4 text-6xl font-bold text-black" { "404" }
                        p class="mb-8 text-xl text-zinc-600" { "Page not found" }
                        a href="/" class="underline hover:opacity-80" {
                            "Go back home"
                        }
                    }
                }
            },
        ),
    )
}
