//! Shopping cart: lines keyed by (product, size).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solezone_catalog::Product;
use solezone_core::{DomainError, DomainResult, ProductId};

/// One cart line: a product in a specific size.
///
/// Unit price stays canonical (USD); display conversion happens at
/// presentation time through the currency service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub size: Decimal,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The session's shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines (the navbar badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Canonical (USD) subtotal.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of `product` in `size`.
    ///
    /// Merges onto an existing (product, size) line; fails validation when
    /// the product does not offer the requested size.
    pub fn add(&mut self, product: &Product, size: Decimal) -> DomainResult<()> {
        if !product.offers_size(size) {
            return Err(DomainError::validation(format!(
                "product {} is not offered in size {size}",
                product.id()
            )));
        }

        if let Some(line) = self.line_mut(product.id(), size) {
            line.quantity += 1;
            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: product.id(),
            name: product.name().to_string(),
            brand: product.brand().to_string(),
            size,
            unit_price: product.price(),
            quantity: 1,
        });
        Ok(())
    }

    /// Adjust a line's quantity by `delta`; the quantity never drops below
    /// one (removal is explicit). Absent lines are left untouched.
    pub fn update_quantity(&mut self, product_id: ProductId, size: Decimal, delta: i32) {
        if let Some(line) = self.line_mut(product_id, size) {
            let next = line.quantity as i64 + delta as i64;
            if next > 0 {
                line.quantity = next as u32;
            }
        }
    }

    /// Remove a line entirely; absent lines are a no-op.
    pub fn remove(&mut self, product_id: ProductId, size: Decimal) {
        self.lines
            .retain(|l| !(l.product_id == product_id && l.size == size));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: ProductId, size: Decimal) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.product_id == product_id && l.size == size)
    }
}
