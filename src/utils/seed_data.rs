//! Built-in catalog dataset used by the seed workflow.

use crate::domain::CreateProduct;

fn entry(
    title: &str,
    description: &str,
    price: f64,
    stock: i32,
    images: [&str; 2],
) -> CreateProduct {
    CreateProduct {
        title: title.to_string(),
        description: Some(description.to_string()),
        price: Some(price),
        stock: Some(stock),
        slug: None,
        images: Some(images.iter().map(|url| url.to_string()).collect()),
    }
}

/// The products inserted by a seed run.
///
/// Titles are unique so the derived slugs never collide with each other.
pub fn initial_products() -> Vec<CreateProduct> {
    vec![
        entry(
            "Classic Tee Shirt",
            "Soft combed cotton tee with a relaxed fit and reinforced collar.",
            24.99,
            120,
            ["classic-tee-front.jpg", "classic-tee-back.jpg"],
        ),
        entry(
            "Men's Running Shoes",
            "Lightweight trainers with a breathable mesh upper and cushioned sole.",
            89.99,
            45,
            ["mens-running-shoes-side.jpg", "mens-running-shoes-top.jpg"],
        ),
        entry(
            "Women's Windbreaker Jacket",
            "Packable windbreaker with an adjustable hood and zip pockets.",
            74.50,
            30,
            ["womens-windbreaker-front.jpg", "womens-windbreaker-back.jpg"],
        ),
        entry(
            "Kids Graphic Hoodie",
            "Fleece-lined hoodie with a fade-resistant front print.",
            39.99,
            80,
            ["kids-hoodie-front.jpg", "kids-hoodie-back.jpg"],
        ),
        entry(
            "Performance Track Pants",
            "Four-way stretch pants with zippered ankle cuffs.",
            54.00,
            60,
            ["track-pants-front.jpg", "track-pants-side.jpg"],
        ),
        entry(
            "Quilted Bomber Jacket",
            "Water-resistant quilted shell with a ribbed hem and cuffs.",
            129.00,
            18,
            ["bomber-jacket-front.jpg", "bomber-jacket-back.jpg"],
        ),
        entry(
            "Relaxed Fit Chino Shorts",
            "Garment-washed chino shorts with a nine inch inseam.",
            34.99,
            95,
            ["chino-shorts-front.jpg", "chino-shorts-back.jpg"],
        ),
        entry(
            "Thermal Base Layer Top",
            "Moisture-wicking base layer rated for cold-weather training.",
            44.99,
            52,
            ["base-layer-front.jpg", "base-layer-back.jpg"],
        ),
        entry(
            "Everyday Canvas Sneakers",
            "Low-top canvas sneakers with a vulcanized rubber outsole.",
            49.99,
            70,
            ["canvas-sneakers-side.jpg", "canvas-sneakers-top.jpg"],
        ),
        entry(
            "Lightweight Rain Shell",
            "Seam-sealed rain shell that packs into its own chest pocket.",
            99.00,
            25,
            ["rain-shell-front.jpg", "rain-shell-hood.jpg"],
        ),
        entry(
            "Merino Wool Beanie",
            "Double-knit merino beanie, naturally odor resistant.",
            22.00,
            140,
            ["merino-beanie-front.jpg", "merino-beanie-fold.jpg"],
        ),
        entry(
            "Trail Hiking Socks",
            "Cushioned crew socks with arch support and a blister guard toe.",
            14.50,
            200,
            ["hiking-socks-pair.jpg", "hiking-socks-detail.jpg"],
        ),
    ]
}
