//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Product domain entity with its owned images
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Image records in insertion order
    pub images: Vec<ProductImage>,
}

/// Image owned by a single product
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductImage {
    pub id: i32,
    #[schema(example = "https://example.com/shirt-front.jpg")]
    pub url: String,
}

/// Product creation input as the service consumes it
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub slug: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Partial product update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub slug: Option<String>,
    pub images: Option<Vec<String>>,
}

/// Fully resolved product ready for insertion
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub images: Vec<String>,
}

/// Column-level changes handed to the repository.
///
/// `images: Some(urls)` means replace the whole image set; `None` leaves
/// the existing rows alone.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub images: Option<Vec<String>>,
}

/// Product response with images flattened to their URLs
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    /// Unique product identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "Classic Tee Shirt")]
    pub title: String,
    /// URL-safe lookup key
    #[schema(example = "classic_tee_shirt")]
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schema(example = 29.99)]
    pub price: f64,
    #[schema(example = 12)]
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Image URLs in insertion order
    pub images: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            slug: product.slug,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
            images: product.images.into_iter().map(|image| image.url).collect(),
        }
    }
}
