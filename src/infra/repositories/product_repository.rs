//! Product repository with transactional image management.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction,
    EntityTrait, LoaderTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::product::{self, Entity as ProductEntity};
use super::entities::product_image::{self, Entity as ProductImageEntity};
use crate::domain::{NewProduct, Product, ProductChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Every write that touches more than one row (product plus its image
/// rows) happens inside a single transaction owned by the implementation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product together with its image rows
    async fn insert(&self, new_product: NewProduct) -> AppResult<Product>;

    /// Page of products with their images, ordered by (created_at, id)
    async fn find_page(&self, limit: u64, offset: u64) -> AppResult<Vec<Product>>;

    /// Find product by primary key
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find product by case-insensitive title or lowercased slug
    async fn find_by_title_or_slug(&self, term: &str) -> AppResult<Option<Product>>;

    /// Apply column changes and, when requested, replace the image set
    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<()>;

    /// Delete a product and its image rows
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Delete every product and image row; returns the product count
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error;
    /// the original error is propagated either way.
    async fn execute_transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                &'a DatabaseTransaction,
            )
                -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
            + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        match f(&txn).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    /// Attach the ordered image rows to a product model
    async fn with_images(&self, model: product::Model) -> AppResult<Product> {
        let images = model
            .find_related(ProductImageEntity)
            .order_by_asc(product_image::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Product::from((model, images)))
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn insert(&self, new_product: NewProduct) -> AppResult<Product> {
        self.execute_transaction(|txn| {
            Box::pin(async move {
                let NewProduct {
                    id,
                    title,
                    slug,
                    description,
                    price,
                    stock,
                    images,
                } = new_product;

                let now = Utc::now();
                let active_model = product::ActiveModel {
                    id: Set(id),
                    title: Set(title),
                    slug: Set(slug),
                    description: Set(description),
                    price: Set(price),
                    stock: Set(stock),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                let model = active_model.insert(txn).await.map_err(AppError::from)?;

                if !images.is_empty() {
                    let rows = images.into_iter().map(|url| product_image::ActiveModel {
                        url: Set(url),
                        product_id: Set(id),
                        ..Default::default()
                    });
                    ProductImageEntity::insert_many(rows)
                        .exec(txn)
                        .await
                        .map_err(AppError::from)?;
                }

                let images = model
                    .find_related(ProductImageEntity)
                    .order_by_asc(product_image::Column::Id)
                    .all(txn)
                    .await
                    .map_err(AppError::from)?;

                Ok(Product::from((model, images)))
            })
        })
        .await
    }

    async fn find_page(&self, limit: u64, offset: u64) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::CreatedAt)
            .order_by_asc(product::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        // Two-step load keeps LIMIT applied to products, not joined rows
        let images = models
            .load_many(
                ProductImageEntity::find().order_by_asc(product_image::Column::Id),
                &self.db,
            )
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().zip(images).map(Product::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let model = match ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        {
            Some(model) => model,
            None => return Ok(None),
        };

        Ok(Some(self.with_images(model).await?))
    }

    async fn find_by_title_or_slug(&self, term: &str) -> AppResult<Option<Product>> {
        let model = match ProductEntity::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::upper(Expr::col(product::Column::Title)))
                            .eq(term.to_uppercase()),
                    )
                    .add(product::Column::Slug.eq(term.to_lowercase())),
            )
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        {
            Some(model) => model,
            None => return Ok(None),
        };

        Ok(Some(self.with_images(model).await?))
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<()> {
        let ProductChanges {
            title,
            slug,
            description,
            price,
            stock,
            images,
        } = changes;

        // Merge scalar changes onto the stored row; a missing id fails
        // here, before any transaction is opened.
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found(id))?;

        let mut active: product::ActiveModel = model.into();

        if let Some(title) = title {
            active.title = Set(title);
        }
        if let Some(slug) = slug {
            active.slug = Set(slug);
        }
        if let Some(description) = description {
            active.description = Set(Some(description));
        }
        if let Some(price) = price {
            active.price = Set(price);
        }
        if let Some(stock) = stock {
            active.stock = Set(stock);
        }
        active.updated_at = Set(Utc::now());

        self.execute_transaction(|txn| {
            Box::pin(async move {
                if let Some(urls) = images {
                    // Replace the whole image set: delete then re-insert
                    ProductImageEntity::delete_many()
                        .filter(product_image::Column::ProductId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(AppError::from)?;

                    if !urls.is_empty() {
                        let rows = urls.into_iter().map(|url| product_image::ActiveModel {
                            url: Set(url),
                            product_id: Set(id),
                            ..Default::default()
                        });
                        ProductImageEntity::insert_many(rows)
                            .exec(txn)
                            .await
                            .map_err(AppError::from)?;
                    }
                }

                active.update(txn).await.map_err(AppError::from)?;
                Ok(())
            })
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.execute_transaction(|txn| {
            Box::pin(async move {
                // Image rows go first; the FK cascade is only a backstop
                ProductImageEntity::delete_many()
                    .filter(product_image::Column::ProductId.eq(id))
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;

                let result = ProductEntity::delete_by_id(id)
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;

                if result.rows_affected == 0 {
                    return Err(AppError::not_found(id));
                }

                Ok(())
            })
        })
        .await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        self.execute_transaction(|txn| {
            Box::pin(async move {
                ProductImageEntity::delete_many()
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;

                let result = ProductEntity::delete_many()
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;

                Ok(result.rows_affected)
            })
        })
        .await
    }
}
