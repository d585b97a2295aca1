//! HTTP handlers

pub mod products;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Plain-text response with the given status
pub(crate) fn text(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Fallback for every unrouted method/path pair
pub async fn not_found() -> Response {
    text(StatusCode::NOT_FOUND, "Página não encontrada")
}
