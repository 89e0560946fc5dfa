//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, ProductStore};
use crate::services::{ProductManager, ProductService, SeedRunner, SeedService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Product catalog service
    pub product_service: Arc<dyn ProductService>,
    /// Seed service
    pub seed_service: Arc<dyn SeedService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with the full service stack wired over
    /// the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(ProductStore::new(database.get_connection()));
        let product_service: Arc<dyn ProductService> = Arc::new(ProductManager::new(repo));
        let seed_service = Arc::new(SeedRunner::new(product_service.clone()));

        Self {
            product_service,
            seed_service,
            database,
        }
    }
}
