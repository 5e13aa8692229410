//! Built-in demo catalog.
//!
//! Stands in for the external catalog source: a static, immutable sneaker
//! collection loaded at process start. Ids ascend in arrival order.

use rust_decimal_macros::dec;

use solezone_core::ProductId;

use crate::product::{Catalog, Product};

/// The demo product collection.
pub fn demo_catalog() -> Catalog {
    let products = vec![
        entry(
            1,
            "Air Zoom Court Vision",
            "Nike",
            "Basketball",
            "Responsive cushioning built for hardwood cuts.",
            dec!(140),
            &["Black", "White"],
            &[dec!(41), dec!(42), dec!(43), dec!(44)],
        ),
        entry(
            2,
            "Gazelle Indoor",
            "Adidas",
            "Lifestyle",
            "Suede classic with a gum sole.",
            dec!(110),
            &["Blue", "Cream"],
            &[dec!(40), dec!(41), dec!(42), dec!(42.5)],
        ),
        entry(
            3,
            "Fresh Foam X 1080",
            "New Balance",
            "Running",
            "Plush daily trainer for long miles.",
            dec!(165),
            &["Grey", "White"],
            &[dec!(42), dec!(43), dec!(44), dec!(45)],
        ),
        entry(
            4,
            "Retro High OG",
            "Jordan",
            "Basketball",
            "The silhouette that started it all.",
            dec!(180),
            &["Red", "Black", "White"],
            &[dec!(41), dec!(42), dec!(43), dec!(44), dec!(45)],
        ),
        entry(
            5,
            "Samba OG",
            "Adidas",
            "Lifestyle",
            "Low-profile leather icon.",
            dec!(100),
            &["Black", "White"],
            &[dec!(40), dec!(41), dec!(42), dec!(43)],
        ),
        entry(
            6,
            "Gel-Kayano 31",
            "Asics",
            "Running",
            "Stability flagship with gel heel.",
            dec!(160),
            &["Blue", "Orange"],
            &[dec!(41), dec!(42), dec!(42.5), dec!(43)],
        ),
        entry(
            7,
            "LeBron XXI",
            "Nike",
            "Basketball",
            "Court-ready support for explosive play.",
            dec!(200),
            &["Purple", "Black"],
            &[dec!(43), dec!(44), dec!(45), dec!(46)],
        ),
        entry(
            8,
            "990v6 Made in USA",
            "New Balance",
            "Lifestyle",
            "Premium grey-on-grey heritage runner.",
            dec!(200),
            &["Grey"],
            &[dec!(41), dec!(42), dec!(43), dec!(44)],
        ),
        entry(
            9,
            "Pegasus 41",
            "Nike",
            "Running",
            "Workhorse trainer with ReactX foam.",
            dec!(140),
            &["White", "Green"],
            &[dec!(40), dec!(41), dec!(42), dec!(43), dec!(44)],
        ),
        entry(
            10,
            "Luka 3",
            "Jordan",
            "Basketball",
            "Step-back ready guard shoe.",
            dec!(130),
            &["White", "Blue"],
            &[dec!(42), dec!(43), dec!(44)],
        ),
        entry(
            11,
            "Adizero Adios Pro 4",
            "Adidas",
            "Running",
            "Race-day plate shoe chasing PBs.",
            dec!(250),
            &["Red", "White"],
            &[dec!(41), dec!(42), dec!(42.5), dec!(43)],
        ),
        entry(
            12,
            "Air Force 1 Luxe",
            "Nike",
            "Lifestyle",
            "Full-grain leather on the everyday classic.",
            dec!(150),
            &["Cream", "Black"],
            &[dec!(40), dec!(41), dec!(42), dec!(43), dec!(44), dec!(45)],
        ),
    ];

    // Static data validated at construction; a failure here is a programming
    // error in this file.
    Catalog::new(products).expect("demo catalog data is valid")
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    name: &str,
    brand: &str,
    category: &str,
    description: &str,
    price: rust_decimal::Decimal,
    colors: &[&str],
    sizes: &[rust_decimal::Decimal],
) -> Product {
    Product::new(
        ProductId::new(id),
        name,
        brand,
        category,
        description,
        price,
        colors.iter().map(|c| c.to_string()),
        sizes.iter().copied(),
    )
    .expect("demo catalog data is valid")
}
