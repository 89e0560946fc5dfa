//! Product service - Handles catalog business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    slugify, CreateProduct, LookupTerm, NewProduct, Product, ProductChanges, ProductResponse,
    UpdateProduct,
};
use crate::errors::{AppError, AppResult};
use crate::infra::ProductRepository;
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
///
/// Lookup terms are either UUIDs (primary-key lookup) or free text
/// matched against title and slug.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Create a product, deriving and normalizing its slug
    async fn create(&self, input: CreateProduct) -> AppResult<ProductResponse>;

    /// Page of products with images flattened to URLs
    async fn find_all(&self, pagination: PaginationParams) -> AppResult<Vec<ProductResponse>>;

    /// Find one product by id, title, or slug
    async fn find_one(&self, term: &str) -> AppResult<Product>;

    /// Find one product, flattened for API responses
    async fn find_one_plain(&self, term: &str) -> AppResult<ProductResponse>;

    /// Merge changes onto a product, optionally replacing its images
    async fn update(&self, id: Uuid, input: UpdateProduct) -> AppResult<ProductResponse>;

    /// Delete a product, returning its last stored representation
    async fn remove(&self, id: Uuid) -> AppResult<Product>;

    /// Delete every product; returns the number removed
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of ProductService using repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance with repository
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn create(&self, input: CreateProduct) -> AppResult<ProductResponse> {
        let CreateProduct {
            title,
            description,
            price,
            stock,
            slug,
            images,
        } = input;

        // Slug falls back to the title and is always normalized
        let slug = slugify(slug.as_deref().unwrap_or(&title));

        let new_product = NewProduct {
            id: Uuid::new_v4(),
            title,
            slug,
            description,
            price: price.unwrap_or(0.0),
            stock: stock.unwrap_or(0),
            images: images.unwrap_or_default(),
        };

        let product = self.repo.insert(new_product).await?;
        Ok(ProductResponse::from(product))
    }

    async fn find_all(&self, pagination: PaginationParams) -> AppResult<Vec<ProductResponse>> {
        let products = self
            .repo
            .find_page(pagination.limit(), pagination.offset())
            .await?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_one(&self, term: &str) -> AppResult<Product> {
        let product = match LookupTerm::parse(term) {
            LookupTerm::Id(id) => self.repo.find_by_id(id).await?,
            LookupTerm::TitleOrSlug(text) => self.repo.find_by_title_or_slug(&text).await?,
        };

        product.ok_or_else(|| AppError::not_found(term))
    }

    async fn find_one_plain(&self, term: &str) -> AppResult<ProductResponse> {
        self.find_one(term).await.map(ProductResponse::from)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> AppResult<ProductResponse> {
        let UpdateProduct {
            title,
            description,
            price,
            stock,
            slug,
            images,
        } = input;

        let changes = ProductChanges {
            title,
            slug: slug.map(|s| slugify(&s)),
            description,
            price,
            stock,
            images,
        };

        self.repo.update(id, changes).await?;

        // Return the stored row, not the merged input
        self.find_one_plain(&id.to_string()).await
    }

    async fn remove(&self, id: Uuid) -> AppResult<Product> {
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(id))?;

        self.repo.delete(id).await?;
        Ok(product)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        self.repo.delete_all().await
    }
}
