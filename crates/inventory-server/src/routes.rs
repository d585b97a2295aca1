//! HTTP routing

use crate::handlers;
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the application router.
///
/// Known paths reached with the wrong method fall through to the same
/// 404 as unknown paths. HEAD is not served alongside GET.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::products::home)
                .head(handlers::not_found)
                .fallback(handlers::not_found),
        )
        .route(
            "/adicionar_produto",
            post(handlers::products::add).fallback(handlers::not_found),
        )
        .route(
            "/excluir_produto",
            post(handlers::products::delete).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
