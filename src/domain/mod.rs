//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod lookup;
pub mod product;
pub mod slug;

pub use lookup::LookupTerm;
pub use product::{
    CreateProduct, NewProduct, Product, ProductChanges, ProductImage, ProductResponse,
    UpdateProduct,
};
pub use slug::slugify;
