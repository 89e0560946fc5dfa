//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{product_handler, seed_handler};
use crate::domain::{Product, ProductImage, ProductResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "A product catalog REST API with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
        (url = "https://api.example.com", description = "Production server")
    ),
    paths(
        // Product endpoints
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
        // Seed endpoint
        seed_handler::run_seed,
    ),
    components(
        schemas(
            // Domain types
            Product,
            ProductImage,
            ProductResponse,
            MessageResponse,
            // Handler types
            product_handler::CreateProductRequest,
            product_handler::UpdateProductRequest,
        )
    ),
    tags(
        (name = "Products", description = "Product catalog operations"),
        (name = "Seed", description = "Database seeding")
    )
)]
pub struct ApiDoc;
