//! Seed command - Resets the catalog and loads the fixture products.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, ProductStore};
use crate::services::{ProductManager, SeedRunner, SeedService};

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding catalog...");

    // Migrations run on connect so a fresh database can be seeded directly
    let db = Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let repository = Arc::new(ProductStore::new(db.get_connection()));
    let products = Arc::new(ProductManager::new(repository));
    let seeder = SeedRunner::new(products);

    let message = seeder.run_seed().await?;
    tracing::info!("{}", message);

    Ok(())
}
