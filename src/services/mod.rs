//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod product_service;
mod seed_service;

// Service traits and implementations
pub use product_service::{ProductManager, ProductService};
pub use seed_service::{SeedRunner, SeedService, SEED_COMPLETED};

#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
#[cfg(any(test, feature = "test-utils"))]
pub use seed_service::MockSeedService;
