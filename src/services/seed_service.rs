//! Seed service - Wipes and repopulates the catalog.

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

use crate::config::SEED_CONCURRENCY;
use crate::errors::AppResult;
use crate::services::ProductService;
use crate::utils::seed_data;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Message returned after a successful seed run
pub const SEED_COMPLETED: &str = "seed executed";

/// Seed service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SeedService: Send + Sync {
    /// Clear the catalog, then repopulate it from the built-in dataset
    async fn run_seed(&self) -> AppResult<&'static str>;
}

/// Concrete implementation of SeedService delegating to the catalog service.
pub struct SeedRunner {
    products: Arc<dyn ProductService>,
}

impl SeedRunner {
    /// Create new seed runner over the catalog service
    pub fn new(products: Arc<dyn ProductService>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl SeedService for SeedRunner {
    async fn run_seed(&self) -> AppResult<&'static str> {
        // The wipe must complete before any insert starts
        let deleted = self.products.delete_all().await?;
        tracing::debug!(deleted, "catalog cleared before seeding");

        let dataset = seed_data::initial_products();
        let total = dataset.len();

        // Inserts run concurrently with a bounded fan-out; the first
        // failure aborts the run and is returned to the caller.
        let inserted: Vec<_> = stream::iter(
            dataset
                .into_iter()
                .map(|product| self.products.create(product)),
        )
        .buffer_unordered(SEED_CONCURRENCY)
        .try_collect()
        .await?;

        tracing::info!(inserted = inserted.len(), total, "seed completed");
        Ok(SEED_COMPLETED)
    }
}
