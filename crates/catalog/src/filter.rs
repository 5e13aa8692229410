//! The filter/sort engine.
//!
//! Pure function over the catalog: no internal state, safe to recompute on
//! every criteria change. All predicates AND-combine; each selection-set
//! predicate wildcards on an empty set.

use rust_decimal::Decimal;

use crate::criteria::{FilterCriteria, SortMode};
use crate::product::Product;

/// Produce the ordered subset of `products` matching every criterion.
///
/// `exchange_rate` converts each canonical price into the active display
/// currency before the price-range check, because the range bounds are
/// denominated in that currency. An empty result is a valid outcome.
pub fn filter_and_sort<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    exchange_rate: Decimal,
) -> Vec<&'a Product> {
    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|product| matches(product, criteria, exchange_rate))
        .collect();

    // Stable sort keeps equal-keyed products in catalog order.
    match criteria.sort {
        SortMode::PriceAsc => matched.sort_by(|a, b| a.price().cmp(&b.price())),
        SortMode::PriceDesc => matched.sort_by(|a, b| b.price().cmp(&a.price())),
        SortMode::Newest => matched.sort_by(|a, b| b.id().cmp(&a.id())),
    }

    matched
}

fn matches(product: &Product, criteria: &FilterCriteria, exchange_rate: Decimal) -> bool {
    let match_category = criteria.category.matches(product.category());
    let match_brand = criteria.brands.is_empty() || criteria.brands.contains(product.brand());
    let match_color = criteria.colors.is_empty()
        || product.colors().iter().any(|c| criteria.colors.contains(c));
    let match_size = criteria.sizes.is_empty()
        || product.sizes().iter().any(|s| criteria.sizes.contains(s));
    let converted = product.price() * exchange_rate;
    let match_price = criteria.price_range.contains(converted);

    match_category && match_brand && match_color && match_size && match_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CategoryFilter, PriceRange};
    use rust_decimal_macros::dec;
    use solezone_core::ProductId;

    fn product(
        id: u32,
        brand: &str,
        category: &str,
        price: Decimal,
        colors: &[&str],
        sizes: &[Decimal],
    ) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Shoe {id}"),
            brand,
            category,
            "",
            price,
            colors.iter().map(|c| c.to_string()),
            sizes.iter().copied(),
        )
        .unwrap()
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(
                1,
                "Nike",
                "Basketball",
                dec!(300),
                &["Black", "Red"],
                &[dec!(42), dec!(43)],
            ),
            product(
                2,
                "Adidas",
                "Running",
                dec!(100),
                &["White"],
                &[dec!(41), dec!(42.5)],
            ),
            product(
                3,
                "New Balance",
                "Lifestyle",
                dec!(200),
                &["Grey", "White"],
                &[dec!(44)],
            ),
        ]
    }

    fn wildcard() -> FilterCriteria {
        FilterCriteria::for_rate(dec!(1))
    }

    fn ids(result: &[&Product]) -> Vec<u32> {
        result.iter().map(|p| p.id().value()).collect()
    }

    #[test]
    fn wildcard_criteria_return_the_full_catalog_newest_first() {
        let products = fixture();
        let result = filter_and_sort(&products, &wildcard(), dec!(1));
        assert_eq!(ids(&result), vec![3, 2, 1]);
    }

    #[test]
    fn price_sort_orders_by_canonical_price() {
        let products = fixture();

        let mut criteria = wildcard();
        criteria.sort = SortMode::PriceAsc;
        let asc = filter_and_sort(&products, &criteria, dec!(1));
        assert_eq!(ids(&asc), vec![2, 3, 1]);

        criteria.sort = SortMode::PriceDesc;
        let desc = filter_and_sort(&products, &criteria, dec!(1));
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn category_narrows_unless_all() {
        let products = fixture();
        let mut criteria = wildcard();
        criteria.category = CategoryFilter::Only("Running".to_string());
        let result = filter_and_sort(&products, &criteria, dec!(1));
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn brand_set_matches_by_membership() {
        let products = fixture();
        let mut criteria = wildcard();
        criteria.toggle_brand("Nike");
        criteria.toggle_brand("Adidas");
        let result = filter_and_sort(&products, &criteria, dec!(1));
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn color_matches_on_any_intersection() {
        let products = fixture();
        let mut criteria = wildcard();
        criteria.toggle_color("White");
        let result = filter_and_sort(&products, &criteria, dec!(1));
        assert_eq!(ids(&result), vec![3, 2]);
    }

    #[test]
    fn size_matches_on_any_intersection() {
        let products = fixture();
        let mut criteria = wildcard();
        criteria.toggle_size(dec!(42.5));
        criteria.toggle_size(dec!(44));
        let result = filter_and_sort(&products, &criteria, dec!(1));
        assert_eq!(ids(&result), vec![3, 2]);
    }

    #[test]
    fn price_range_compares_converted_prices_inclusively() {
        let products = fixture();
        let mut criteria = FilterCriteria::for_rate(dec!(2.70));
        // 100 USD -> 270 GEL, 200 USD -> 540 GEL, 300 USD -> 810 GEL
        criteria.price_range = PriceRange {
            min: dec!(270),
            max: dec!(540),
        };
        let result = filter_and_sort(&products, &criteria, dec!(2.70));
        assert_eq!(ids(&result), vec![3, 2]);
    }

    #[test]
    fn empty_result_is_a_valid_outcome() {
        let products = fixture();
        let mut criteria = wildcard();
        criteria.category = CategoryFilter::Only("Basketball".to_string());
        criteria.toggle_brand("Adidas");
        let result = filter_and_sort(&products, &criteria, dec!(1));
        assert!(result.is_empty());
    }

    #[test]
    fn recomputation_is_idempotent_and_order_stable() {
        let products = fixture();
        let mut criteria = wildcard();
        criteria.toggle_color("White");
        criteria.sort = SortMode::PriceAsc;
        let first = ids(&filter_and_sort(&products, &criteria, dec!(1)));
        let second = ids(&filter_and_sort(&products, &criteria, dec!(1)));
        assert_eq!(first, second);
    }

    #[test]
    fn equal_prices_keep_catalog_order_under_price_sort() {
        let products = vec![
            product(1, "Nike", "Running", dec!(150), &["Black"], &[dec!(42)]),
            product(2, "Adidas", "Running", dec!(150), &["Black"], &[dec!(42)]),
        ];
        let mut criteria = wildcard();
        criteria.sort = SortMode::PriceAsc;
        let result = filter_and_sort(&products, &criteria, dec!(1));
        assert_eq!(ids(&result), vec![1, 2]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        const BRANDS: [&str; 4] = ["Nike", "Adidas", "Jordan", "New Balance"];
        const CATEGORIES: [&str; 3] = ["Basketball", "Lifestyle", "Running"];
        const COLORS: [&str; 5] = ["Black", "White", "Red", "Grey", "Blue"];

        fn arb_product(id: u32) -> impl Strategy<Value = Product> {
            (
                proptest::sample::select(BRANDS.to_vec()),
                proptest::sample::select(CATEGORIES.to_vec()),
                0u32..=2000,
                proptest::sample::subsequence(COLORS.to_vec(), 1..=COLORS.len()),
                proptest::sample::subsequence(vec![40u32, 41, 42, 43, 44, 45], 1..=6),
            )
                .prop_map(move |(brand, category, price, colors, sizes)| {
                    Product::new(
                        ProductId::new(id),
                        format!("Shoe {id}"),
                        brand,
                        category,
                        "",
                        Decimal::from(price),
                        colors.into_iter().map(|c| c.to_string()),
                        sizes.into_iter().map(Decimal::from),
                    )
                    .unwrap()
                })
        }

        fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
            (1usize..=12).prop_flat_map(|n| {
                (0..n as u32)
                    .map(|i| arb_product(i + 1))
                    .collect::<Vec<_>>()
            })
        }

        proptest! {
            /// Property: all-wildcard criteria return every product.
            #[test]
            fn wildcard_returns_the_full_catalog(products in arb_catalog()) {
                let criteria = FilterCriteria::for_rate(dec!(1));
                let result = filter_and_sort(&products, &criteria, dec!(1));
                prop_assert_eq!(result.len(), products.len());

                let mut expected: Vec<u32> = products.iter().map(|p| p.id().value()).collect();
                expected.sort_unstable_by(|a, b| b.cmp(a));
                let got: Vec<u32> = result.iter().map(|p| p.id().value()).collect();
                prop_assert_eq!(got, expected);
            }

            /// Property: with a non-empty color selection, every surviving
            /// product intersects it, and every excluded product either
            /// fails the intersection or some other wildcarded predicate
            /// (there are none here, so intersection alone decides).
            #[test]
            fn color_selection_is_exactly_the_intersection_predicate(
                products in arb_catalog(),
                selection in proptest::sample::subsequence(COLORS.to_vec(), 1..=COLORS.len()),
            ) {
                let mut criteria = FilterCriteria::for_rate(dec!(1));
                criteria.colors = selection.iter().map(|c| c.to_string()).collect();

                let result = filter_and_sort(&products, &criteria, dec!(1));
                let surviving: BTreeSet<u32> =
                    result.iter().map(|p| p.id().value()).collect();

                for product in &products {
                    let intersects = product
                        .colors()
                        .iter()
                        .any(|c| criteria.colors.contains(c));
                    prop_assert_eq!(surviving.contains(&product.id().value()), intersects);
                }
            }

            /// Property: recomputation with identical inputs is stable.
            #[test]
            fn filter_is_idempotent(products in arb_catalog()) {
                let mut criteria = FilterCriteria::for_rate(dec!(1));
                criteria.sort = SortMode::PriceAsc;
                let a: Vec<u32> = filter_and_sort(&products, &criteria, dec!(1))
                    .iter().map(|p| p.id().value()).collect();
                let b: Vec<u32> = filter_and_sort(&products, &criteria, dec!(1))
                    .iter().map(|p| p.id().value()).collect();
                prop_assert_eq!(a, b);
            }

            /// Property: rescaling the range by `r2 / r1` keeps the matched
            /// set identical when the rate moves from `r1` to `r2`.
            #[test]
            fn rescaled_range_preserves_the_matched_set(products in arb_catalog()) {
                let r1 = dec!(1);
                let r2 = dec!(2.70);

                let mut criteria = FilterCriteria::for_rate(r1);
                criteria.price_range = PriceRange { min: dec!(50), max: dec!(900) };
                let before: Vec<u32> = filter_and_sort(&products, &criteria, r1)
                    .iter().map(|p| p.id().value()).collect();

                criteria.rescale(r2 / r1);
                let after: Vec<u32> = filter_and_sort(&products, &criteria, r2)
                    .iter().map(|p| p.id().value()).collect();

                prop_assert_eq!(before, after);
            }
        }
    }
}
