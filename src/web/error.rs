use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use tracing::error;

use super::components::layout;

/// Failures that end a page request
#[derive(Debug)]
pub enum WebError {
    /// The identity provider could not answer; not retried
    ProviderUnavailable(anyhow::Error),
    Internal(anyhow::Error),
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::ProviderUnavailable(e) => write!(f, "identity provider unavailable: {:#}", e),
            WebError::Internal(e) => write!(f, "internal error: {:#}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);

        let (status, title, message) = match self {
            WebError::ProviderUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                "Sign-in is temporarily unavailable. Please try again in a moment.",
            ),
            WebError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something Went Wrong",
                "An unexpected error occurred.",
            ),
        };

        let page = layout::base(
            title,
            html! {
                div class="flex min-h-screen items-center justify-center bg-zinc-50" {
                    div class="w-full max-w-md" {
                        h1 class="mb-4 text-2xl font-semibold text-black" { (title) }
                        (layout::alert(message))
                        a href="/" class="text-sm hover:underline" { "← Back home" }
                    }
                }
            },
        );

        (status, page).into_response()
    }
}
