use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware::access_control;
use crate::state::AppState;
use crate::{api, web};

/// Pages and service endpoints behind the access-control middleware.
///
/// Static assets are mounted by the caller outside this router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::landing::show))
        .route("/dashboard", get(web::dashboard::show))
        // Service endpoints
        .route("/health", get(api::health_handler))
        .route("/metrics", get(api::metrics_handler))
        .route("/api", get(api::root_handler))
        .fallback(web::not_found)
        .layer(from_fn_with_state(state.clone(), access_control))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
