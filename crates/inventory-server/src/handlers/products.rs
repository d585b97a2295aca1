//! Product page handlers

use super::text;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use inventory_core::{
    render_page, AddProductForm, DeleteProductForm, InventoryError, ProductId, Result,
};

/// GET /
pub async fn home(State(state): State<AppState>) -> Response {
    match state.store.list_products().await {
        Ok(products) => Html(render_page(&products)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render product page: {}", e);
            text(StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor")
        }
    }
}

/// POST /adicionar_produto
pub async fn add(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    match add_product(&state, body).await {
        Ok(_) => redirect_home(),
        Err(e) => {
            tracing::error!("Failed to add product: {}", e);
            text(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao adicionar produto")
        }
    }
}

/// POST /excluir_produto
pub async fn delete(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    match delete_product(&state, body).await {
        Ok(()) => redirect_home(),
        Err(e) => {
            tracing::error!("Failed to delete product: {}", e);
            text(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao deletar produto")
        }
    }
}

async fn add_product(
    state: &AppState,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<ProductId> {
    let body = read_body(body)?;
    let product = AddProductForm::decode(&body)?.into_new_product()?;
    state.store.insert_product(&product).await
}

async fn delete_product(
    state: &AppState,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<()> {
    let body = read_body(body)?;
    match DeleteProductForm::decode(&body)?.product_id()? {
        Some(id) => state.store.delete_product(id).await,
        None => {
            tracing::debug!("Product id matches no row, nothing to delete");
            Ok(())
        }
    }
}

fn read_body(body: std::result::Result<Bytes, BytesRejection>) -> Result<Bytes> {
    body.map_err(|e| InventoryError::Unexpected(format!("failed to read request body: {}", e)))
}

/// 302 back to the product page
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
