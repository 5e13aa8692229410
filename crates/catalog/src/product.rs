//! Product model and the validated, immutable catalog.

use std::collections::{BTreeSet, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use solezone_core::{DomainError, DomainResult, ProductId};

/// Highest canonical price any catalog product may carry; the default
/// price-range filter spans `[0, MAX_CANONICAL_PRICE * rate]`.
pub const MAX_CANONICAL_PRICE: Decimal = dec!(2000);

/// A catalog product.
///
/// Immutable once constructed; the catalog is loaded at startup and never
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    brand: String,
    category: String,
    description: String,
    /// Canonical price, denominated in USD.
    price: Decimal,
    colors: BTreeSet<String>,
    sizes: BTreeSet<Decimal>,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        colors: impl IntoIterator<Item = String>,
        sizes: impl IntoIterator<Item = Decimal>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let brand = brand.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if brand.trim().is_empty() {
            return Err(DomainError::validation("product brand cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("product category cannot be empty"));
        }
        if price.is_sign_negative() {
            return Err(DomainError::validation(format!(
                "product price cannot be negative: {price}"
            )));
        }

        let colors: BTreeSet<String> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(DomainError::validation(
                "product must offer at least one color",
            ));
        }

        let sizes: BTreeSet<Decimal> = sizes.into_iter().collect();
        if sizes.is_empty() {
            return Err(DomainError::validation(
                "product must offer at least one size",
            ));
        }

        Ok(Self {
            id,
            name,
            brand,
            category,
            description: description.into(),
            price,
            colors,
            sizes,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical (USD) price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn colors(&self) -> &BTreeSet<String> {
        &self.colors
    }

    /// Offered sizes, ascending.
    pub fn sizes(&self) -> &BTreeSet<Decimal> {
        &self.sizes
    }

    pub fn offers_size(&self, size: Decimal) -> bool {
        self.sizes.contains(&size)
    }
}

/// The immutable product collection plus the facet lists presentation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, enforcing id uniqueness across the collection.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id in catalog: {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.distinct(|p| [p.category().to_string()].into_iter().collect())
    }

    /// Distinct brands, sorted.
    pub fn brands(&self) -> Vec<String> {
        self.distinct(|p| [p.brand().to_string()].into_iter().collect())
    }

    /// Distinct colors across all products, sorted.
    pub fn colors(&self) -> Vec<String> {
        self.distinct(|p| p.colors().clone())
    }

    /// Distinct sizes across all products, ascending.
    pub fn sizes(&self) -> Vec<Decimal> {
        let set: BTreeSet<Decimal> = self
            .products
            .iter()
            .flat_map(|p| p.sizes().iter().copied())
            .collect();
        set.into_iter().collect()
    }

    fn distinct(&self, f: impl Fn(&Product) -> BTreeSet<String>) -> Vec<String> {
        let set: BTreeSet<String> = self.products.iter().flat_map(f).collect();
        set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, brand: &str) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Shoe {id}"),
            brand,
            "Running",
            "",
            dec!(100),
            ["Black".to_string()],
            [dec!(42)],
        )
        .unwrap()
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, "Nike"), product(1, "Adidas")]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn catalog_derives_sorted_distinct_facets() {
        let catalog = Catalog::new(vec![
            product(1, "Nike"),
            product(2, "Adidas"),
            product(3, "Nike"),
        ])
        .unwrap();
        assert_eq!(catalog.brands(), vec!["Adidas", "Nike"]);
        assert_eq!(catalog.categories(), vec!["Running"]);
        assert_eq!(catalog.sizes(), vec![dec!(42)]);
    }

    #[test]
    fn product_rejects_empty_color_set() {
        let err = Product::new(
            ProductId::new(1),
            "Shoe",
            "Nike",
            "Running",
            "",
            dec!(100),
            Vec::<String>::new(),
            [dec!(42)],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn product_rejects_negative_price() {
        let err = Product::new(
            ProductId::new(1),
            "Shoe",
            "Nike",
            "Running",
            "",
            dec!(-1),
            ["Black".to_string()],
            [dec!(42)],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::new(vec![product(1, "Nike"), product(2, "Adidas")]).unwrap();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().brand(), "Adidas");
        assert!(catalog.get(ProductId::new(9)).is_none());
    }
}
