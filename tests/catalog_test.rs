//! Catalog integration tests.
//!
//! These tests run the real repository and service stack against an
//! isolated in-memory SQLite database, one per test.

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use catalog_api::domain::{CreateProduct, UpdateProduct};
use catalog_api::errors::AppError;
use catalog_api::infra::{Migrator, ProductStore};
use catalog_api::services::{
    ProductManager, ProductService, SeedRunner, SeedService, SEED_COMPLETED,
};
use catalog_api::types::PaginationParams;
use catalog_api::utils::seed_data::initial_products;

// =============================================================================
// Test Helpers
// =============================================================================

/// Open an isolated in-memory database with the schema applied.
///
/// The pool is capped at one connection so every query sees the same
/// in-memory database.
async fn test_connection() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let conn = SeaDatabase::connect(options)
        .await
        .expect("in-memory database should connect");
    Migrator::up(&conn, None)
        .await
        .expect("migrations should apply");

    conn
}

/// Build the product service over a fresh database.
async fn catalog() -> ProductManager {
    let conn = test_connection().await;
    ProductManager::new(Arc::new(ProductStore::new(conn)))
}

/// Build the product service and a seed runner sharing one database.
async fn catalog_with_seeder() -> (Arc<dyn ProductService>, SeedRunner) {
    let conn = test_connection().await;
    let service: Arc<dyn ProductService> =
        Arc::new(ProductManager::new(Arc::new(ProductStore::new(conn))));
    let seeder = SeedRunner::new(service.clone());

    (service, seeder)
}

fn create_input(title: &str, images: &[&str]) -> CreateProduct {
    CreateProduct {
        title: title.to_string(),
        description: Some(format!("{} description", title)),
        price: Some(19.99),
        stock: Some(7),
        slug: None,
        images: if images.is_empty() {
            None
        } else {
            Some(images.iter().map(|url| url.to_string()).collect())
        },
    }
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_fills_defaults_and_derives_slug() {
    let service = catalog().await;

    let created = service
        .create(CreateProduct {
            title: "Classic Tee Shirt".to_string(),
            description: None,
            price: None,
            stock: None,
            slug: None,
            images: None,
        })
        .await
        .unwrap();

    assert_eq!(created.title, "Classic Tee Shirt");
    assert_eq!(created.slug, "classic_tee_shirt");
    assert_eq!(created.price, 0.0);
    assert_eq!(created.stock, 0);
    assert!(created.images.is_empty());
}

#[tokio::test]
async fn test_create_persists_images_in_given_order() {
    let service = catalog().await;

    let created = service
        .create(create_input(
            "Trail Hiking Socks",
            &["third.jpg", "first.jpg", "second.jpg"],
        ))
        .await
        .unwrap();

    assert_eq!(created.images, vec!["third.jpg", "first.jpg", "second.jpg"]);

    // Order must survive a round trip through the database
    let fetched = service.find_one("trail_hiking_socks").await.unwrap();
    let urls: Vec<_> = fetched.images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["third.jpg", "first.jpg", "second.jpg"]);
}

#[tokio::test]
async fn test_create_rejects_duplicate_title() {
    let service = catalog().await;

    service
        .create(create_input("Merino Wool Beanie", &[]))
        .await
        .unwrap();
    let err = service
        .create(create_input("Merino Wool Beanie", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateKey(_)));
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn test_find_one_by_id() {
    let service = catalog().await;
    let created = service
        .create(create_input("Quilted Bomber Jacket", &[]))
        .await
        .unwrap();

    let found = service.find_one(&created.id.to_string()).await.unwrap();
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_find_one_by_title_is_case_insensitive() {
    let service = catalog().await;
    service
        .create(create_input("Quilted Bomber Jacket", &[]))
        .await
        .unwrap();

    let found = service.find_one("QUILTED BOMBER JACKET").await.unwrap();
    assert_eq!(found.title, "Quilted Bomber Jacket");
}

#[tokio::test]
async fn test_find_one_by_slug_ignores_term_case() {
    let service = catalog().await;
    service
        .create(create_input("Quilted Bomber Jacket", &[]))
        .await
        .unwrap();

    let found = service.find_one("Quilted_Bomber_Jacket").await.unwrap();
    assert_eq!(found.slug, "quilted_bomber_jacket");
}

#[tokio::test]
async fn test_find_one_unknown_term_is_not_found() {
    let service = catalog().await;

    let err = service.find_one("no_such_product").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        "Product with id or term 'no_such_product' not found"
    );
}

// =============================================================================
// Listing and Pagination
// =============================================================================

#[tokio::test]
async fn test_find_all_pages_are_disjoint_and_complete() {
    let service = catalog().await;
    for title in ["Item A", "Item B", "Item C", "Item D", "Item E"] {
        service.create(create_input(title, &[])).await.unwrap();
    }

    let page1 = service.find_all(PaginationParams::new(2, 0)).await.unwrap();
    let page2 = service.find_all(PaginationParams::new(2, 2)).await.unwrap();
    let page3 = service.find_all(PaginationParams::new(2, 4)).await.unwrap();

    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 2);
    assert_eq!(page3.len(), 1);

    let ids: std::collections::HashSet<Uuid> = page1
        .iter()
        .chain(&page2)
        .chain(&page3)
        .map(|p| p.id)
        .collect();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_find_all_attaches_images_per_product() {
    let service = catalog().await;
    service
        .create(create_input("Item A", &["a1.jpg", "a2.jpg"]))
        .await
        .unwrap();
    service.create(create_input("Item B", &["b1.jpg"])).await.unwrap();

    let listed = service.find_all(PaginationParams::default()).await.unwrap();
    assert_eq!(listed.len(), 2);

    let a = listed.iter().find(|p| p.title == "Item A").unwrap();
    let b = listed.iter().find(|p| p.title == "Item B").unwrap();
    assert_eq!(a.images, vec!["a1.jpg", "a2.jpg"]);
    assert_eq!(b.images, vec!["b1.jpg"]);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_scalars_only_keeps_images() {
    let service = catalog().await;
    let created = service
        .create(create_input("Thermal Base Layer Top", &["front.jpg", "back.jpg"]))
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateProduct {
                price: Some(99.5),
                stock: Some(11),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 99.5);
    assert_eq!(updated.stock, 11);
    assert_eq!(updated.images, vec!["front.jpg", "back.jpg"]);

    // Change is visible on a later read as well
    let fetched = service.find_one_plain(&created.id.to_string()).await.unwrap();
    assert_eq!(fetched.price, 99.5);
}

#[tokio::test]
async fn test_update_replaces_whole_image_set() {
    let service = catalog().await;
    let created = service
        .create(create_input("Lightweight Rain Shell", &["old1.jpg", "old2.jpg"]))
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateProduct {
                images: Some(vec!["new.jpg".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.images, vec!["new.jpg"]);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let service = catalog().await;

    let err = service
        .update(
            Uuid::new_v4(),
            UpdateProduct {
                price: Some(1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_failure_rolls_back_image_replacement() {
    let service = catalog().await;
    service.create(create_input("Alpha Jacket", &[])).await.unwrap();
    let bravo = service
        .create(create_input("Bravo Jacket", &["b1.jpg", "b2.jpg"]))
        .await
        .unwrap();

    // Steal Alpha's slug while also replacing images; the unique
    // violation must undo the image swap.
    let err = service
        .update(
            bravo.id,
            UpdateProduct {
                slug: Some("alpha_jacket".to_string()),
                images: Some(vec!["new.jpg".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateKey(_)));

    let fetched = service.find_one_plain(&bravo.id.to_string()).await.unwrap();
    assert_eq!(fetched.slug, "bravo_jacket");
    assert_eq!(fetched.images, vec!["b1.jpg", "b2.jpg"]);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_remove_returns_last_stored_form() {
    let service = catalog().await;
    let created = service
        .create(create_input("Everyday Canvas Sneakers", &["side.jpg"]))
        .await
        .unwrap();

    let removed = service.remove(created.id).await.unwrap();
    assert_eq!(removed.title, "Everyday Canvas Sneakers");
    assert_eq!(removed.images.len(), 1);

    let err = service
        .find_one(&created.id.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_remove_missing_product_is_not_found() {
    let service = catalog().await;

    let err = service.remove(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_all_reports_removed_count() {
    let service = catalog().await;
    service.create(create_input("Item A", &["a.jpg"])).await.unwrap();
    service.create(create_input("Item B", &[])).await.unwrap();

    let deleted = service.delete_all().await.unwrap();
    assert_eq!(deleted, 2);

    let listed = service.find_all(PaginationParams::default()).await.unwrap();
    assert!(listed.is_empty());
}

// =============================================================================
// Seeding
// =============================================================================

#[tokio::test]
async fn test_seed_populates_the_catalog() {
    let (service, seeder) = catalog_with_seeder().await;

    let message = seeder.run_seed().await.unwrap();
    assert_eq!(message, SEED_COMPLETED);

    let listed = service
        .find_all(PaginationParams::new(100, 0))
        .await
        .unwrap();
    assert_eq!(listed.len(), initial_products().len());
    assert!(listed.iter().all(|p| !p.images.is_empty()));
}

#[tokio::test]
async fn test_seed_restarts_from_a_clean_catalog() {
    let (service, seeder) = catalog_with_seeder().await;
    service
        .create(create_input("Leftover Item", &[]))
        .await
        .unwrap();

    seeder.run_seed().await.unwrap();
    seeder.run_seed().await.unwrap();

    let listed = service
        .find_all(PaginationParams::new(100, 0))
        .await
        .unwrap();
    assert_eq!(listed.len(), initial_products().len());
    assert!(listed.iter().all(|p| p.title != "Leftover Item"));
}
