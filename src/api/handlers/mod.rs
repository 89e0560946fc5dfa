//! HTTP request handlers.

pub mod product_handler;
pub mod seed_handler;

pub use product_handler::product_routes;
pub use seed_handler::seed_routes;
