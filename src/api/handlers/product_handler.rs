//! Product catalog handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateProduct, Product, ProductResponse, UpdateProduct};
use crate::errors::AppResult;
use crate::types::PaginationParams;

/// Product creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Display name, unique across the catalog
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Classic Tee Shirt")]
    pub title: String,
    /// Long-form description
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(example = 24.99)]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    #[schema(example = 120)]
    pub stock: Option<i32>,
    /// Explicit slug; derived from the title when omitted
    #[validate(length(min = 1, message = "Slug must not be empty"))]
    #[schema(example = "classic_tee_shirt")]
    pub slug: Option<String>,
    /// Image URLs in display order
    pub images: Option<Vec<String>>,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(request: CreateProductRequest) -> Self {
        CreateProduct {
            title: request.title,
            description: request.description,
            price: request.price,
            stock: request.stock,
            slug: request.slug,
            images: request.images,
        }
    }
}

/// Product update request; omitted fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[schema(example = "Classic Tee Shirt v2")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,
    #[validate(length(min = 1, message = "Slug must not be empty"))]
    pub slug: Option<String>,
    /// Replaces the whole image set when present
    pub images: Option<Vec<String>>,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(request: UpdateProductRequest) -> Self {
        UpdateProduct {
            title: request.title,
            description: request.description,
            price: request.price,
            stock: request.stock,
            slug: request.slug,
            images: request.images,
        }
    }
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:term",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Validation error or duplicate title/slug")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.product_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// List products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(
        ("limit" = Option<u64>, Query, description = "Page size (default 10, max 100)"),
        ("offset" = Option<u64>, Query, description = "Rows to skip (default 0)")
    ),
    responses(
        (status = 200, description = "Page of products", body = Vec<ProductResponse>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.product_service.find_all(pagination).await?;

    Ok(Json(products))
}

/// Get one product by id, title, or slug
#[utoipa::path(
    get,
    path = "/products/{term}",
    tag = "Products",
    params(
        ("term" = String, Path, description = "Product UUID, title, or slug")
    ),
    responses(
        (status = 200, description = "Matching product", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.product_service.find_one_plain(&term).await?;

    Ok(Json(product))
}

/// Update a product
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Validation error or duplicate title/slug"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.product_service.update(id, payload.into()).await?;

    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product in its last stored form", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.remove(id).await?;

    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_title() {
        let request = CreateProductRequest {
            title: String::new(),
            description: None,
            price: None,
            stock: None,
            slug: None,
            images: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_negative_price() {
        let request = CreateProductRequest {
            title: "Hoodie".to_string(),
            description: None,
            price: Some(-1.0),
            stock: None,
            slug: None,
            images: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_minimal_input() {
        let request = CreateProductRequest {
            title: "Hoodie".to_string(),
            description: None,
            price: None,
            stock: None,
            slug: None,
            images: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_allows_all_fields_omitted() {
        let request = UpdateProductRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_negative_stock() {
        let request = UpdateProductRequest {
            stock: Some(-5),
            ..Default::default()
        };

        assert!(request.validate().is_err());
    }
}
