// HTTP handlers for product endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::middleware::AuthenticatedUser;
use crate::products::error::ProductError;
use crate::products::models::{Product, ProductRequest};
use crate::AppState;

/// Query parameters for the product listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional bound on the result count; parsed leniently, noise is ignored
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
}

/// Handler for GET /api/products
/// Lists products, newest first; public
#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("_limit" = Option<String>, Query, description = "Optional result bound; non-numeric values are ignored")
    ),
    responses(
        (status = 200, description = "Products, most recent first", body = Vec<Product>)
    ),
    tag = "products"
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ProductError> {
    let products = state.products.list(query.limit).await?;

    tracing::debug!("Retrieved {} products", products.len());
    Ok(Json(products))
}

/// Handler for GET /api/products/:id
/// Fetches a single product; public
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Unknown or malformed id")
    ),
    tag = "products"
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ProductError> {
    let product = state.products.get(&id).await?;

    Ok(Json(product))
}

/// Handler for POST /api/products
/// Creates a product owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Missing or blank fields"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "products"
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    let product = state.products.create(user.id, request).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /api/products/:id
/// Replaces a product's fields; owner only
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Missing or blank fields"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Requester does not own the product"),
        (status = 404, description = "Unknown or malformed id")
    ),
    tag = "products"
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<Product>, ProductError> {
    let product = state.products.update(&id, user.id, request).await?;

    Ok(Json(product))
}

/// Handler for DELETE /api/products/:id
/// Deletes a product; owner only, checked before the row is touched
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Requester does not own the product"),
        (status = 404, description = "Unknown or malformed id")
    ),
    tag = "products"
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ProductError> {
    state.products.delete(&id, user.id).await?;

    Ok(Json(json!({ "message": "product deleted successfully" })))
}
