//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod product;
pub mod product_image;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use product::{
    ActiveModel as ProductActiveModel, Entity as ProductEntity, Model as ProductModel,
};
#[allow(unused_imports)]
pub use product_image::{
    ActiveModel as ProductImageActiveModel, Entity as ProductImageEntity,
    Model as ProductImageModel,
};
