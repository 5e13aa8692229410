//! The storefront session: one owner for every piece of mutable state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use solezone_cart::Cart;
use solezone_catalog::{
    filter_and_sort, BoundInput, Catalog, CategoryFilter, FilterCriteria, PriceRange, Product,
    SortMode,
};
use solezone_checkout::{Checkout, OrderNumber};
use solezone_core::{DomainError, DomainResult, ProductId, SessionId};
use solezone_currency::{Currency, CurrencySelection};

use crate::wishlist::{Wishlist, WishlistChange};

/// A browsing session over an immutable catalog.
///
/// Owns the active currency, the filter criteria and their text-input
/// mirrors, the wishlist, the cart, and any in-flight checkout. All
/// mutation goes through these methods, which keeps the currency-change
/// ordering guarantee local: [`set_currency`](Self::set_currency) rescales
/// every currency-relative value before it returns, so a following
/// [`products`](Self::products) call can never compare stale bounds against
/// freshly converted prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontSession {
    id: SessionId,
    catalog: Catalog,
    currency: CurrencySelection,
    criteria: FilterCriteria,
    min_input: BoundInput,
    max_input: BoundInput,
    wishlist: Wishlist,
    cart: Cart,
    checkout: Option<Checkout>,
}

impl StorefrontSession {
    pub fn new(catalog: Catalog) -> Self {
        let currency = CurrencySelection::default();
        let rate = currency.rate();
        let criteria = FilterCriteria::for_rate(rate);
        let min_input = BoundInput::from_value(criteria.price_range.min);
        let max_input = BoundInput::from_value(criteria.price_range.max);
        let id = SessionId::new();
        tracing::debug!(session = %id, "storefront session opened");
        Self {
            id,
            catalog,
            currency,
            criteria,
            min_input,
            max_input,
            wishlist: Wishlist::new(),
            cart: Cart::new(),
            checkout: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // --- currency ---------------------------------------------------------

    pub fn currency(&self) -> Currency {
        self.currency.active()
    }

    pub fn exchange_rate(&self) -> Decimal {
        self.currency.rate()
    }

    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Render a canonical amount in the active currency.
    pub fn format_price(&self, canonical: Decimal) -> String {
        self.currency.format_price(canonical)
    }

    /// Switch the active currency.
    ///
    /// The price-range criteria and both input mirrors are rescaled by
    /// `new_rate / old_rate` inside this call, in that order, before it
    /// returns.
    pub fn set_currency(&mut self, next: Currency) {
        if let Some(change) = self.currency.select(next) {
            let ratio = change.ratio();
            self.criteria.rescale(ratio);
            self.min_input.rescale(ratio);
            self.max_input.rescale(ratio);
            tracing::debug!(
                session = %self.id,
                from = %change.from,
                to = %change.to,
                "currency changed, price filter rescaled"
            );
        }
    }

    // --- filtering --------------------------------------------------------

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Run the filter/sort engine against the current criteria and rate.
    pub fn products(&self) -> Vec<&Product> {
        filter_and_sort(
            self.catalog.products(),
            &self.criteria,
            self.currency.rate(),
        )
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.criteria.sort = sort;
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        self.criteria.toggle_brand(brand);
    }

    pub fn toggle_color(&mut self, color: &str) {
        self.criteria.toggle_color(color);
    }

    pub fn toggle_size(&mut self, size: Decimal) {
        self.criteria.toggle_size(size);
    }

    pub fn min_input(&self) -> &str {
        self.min_input.text()
    }

    pub fn max_input(&self) -> &str {
        self.max_input.text()
    }

    /// Apply a keystroke-level edit to the minimum-bound box.
    ///
    /// Rejected text (anything but digits or empty) leaves all state
    /// untouched; accepted text re-derives the price range from both
    /// mirrors. Returns whether the edit was accepted.
    pub fn set_min_text(&mut self, text: &str) -> bool {
        if !self.min_input.set_text(text) {
            return false;
        }
        self.rederive_price_range();
        true
    }

    /// Counterpart of [`set_min_text`](Self::set_min_text) for the maximum.
    pub fn set_max_text(&mut self, text: &str) -> bool {
        if !self.max_input.set_text(text) {
            return false;
        }
        self.rederive_price_range();
        true
    }

    fn rederive_price_range(&mut self) {
        self.criteria.price_range = PriceRange {
            min: self.min_input.value(),
            max: self.max_input.value(),
        };
    }

    /// The "reset filters" affordance for the empty-result state.
    pub fn reset_filters(&mut self) {
        let rate = self.currency.rate();
        self.criteria.reset(rate);
        self.min_input = BoundInput::from_value(self.criteria.price_range.min);
        self.max_input = BoundInput::from_value(self.criteria.price_range.max);
        tracing::debug!(session = %self.id, "filters reset");
    }

    // --- wishlist ---------------------------------------------------------

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn toggle_wishlist(&mut self, id: ProductId) -> WishlistChange {
        let change = self.wishlist.toggle(id);
        tracing::debug!(session = %self.id, product = %id, ?change, "wishlist toggled");
        change
    }

    // --- cart -------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a catalog product in the given size.
    pub fn add_to_cart(&mut self, id: ProductId, size: Decimal) -> DomainResult<()> {
        let product = self.catalog.get(id).ok_or(DomainError::NotFound)?;
        self.cart.add(product, size)?;
        tracing::debug!(session = %self.id, product = %id, %size, "added to cart");
        Ok(())
    }

    pub fn update_cart_quantity(&mut self, id: ProductId, size: Decimal, delta: i32) {
        self.cart.update_quantity(id, size, delta);
    }

    pub fn remove_from_cart(&mut self, id: ProductId, size: Decimal) {
        self.cart.remove(id, size);
    }

    // --- checkout ---------------------------------------------------------

    pub fn checkout(&self) -> Option<&Checkout> {
        self.checkout.as_ref()
    }

    /// Start a checkout over the current cart.
    pub fn begin_checkout(&mut self) -> DomainResult<()> {
        if matches!(&self.checkout, Some(c) if !c.is_completed()) {
            return Err(DomainError::conflict("a checkout is already in progress"));
        }
        self.checkout = Some(Checkout::begin(&self.cart)?);
        tracing::debug!(session = %self.id, "checkout started");
        Ok(())
    }

    pub fn advance_checkout(&mut self) -> DomainResult<()> {
        self.checkout_mut()?.advance()
    }

    /// Submit the order from the payment step.
    pub fn place_order(&mut self) -> DomainResult<()> {
        self.checkout_mut()?.place_order()?;
        tracing::debug!(session = %self.id, "order submitted for processing");
        Ok(())
    }

    pub fn checkout_back(&mut self) -> DomainResult<()> {
        self.checkout_mut()?.back()
    }

    /// Finish the simulated processing phase and empty the cart.
    pub fn complete_checkout(
        &mut self,
        order_number: OrderNumber,
        placed_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.checkout_mut()?.complete(order_number, placed_at)?;
        self.cart.clear();
        tracing::info!(session = %self.id, order = %order_number, "order placed");
        Ok(())
    }

    fn checkout_mut(&mut self) -> DomainResult<&mut Checkout> {
        self.checkout
            .as_mut()
            .ok_or_else(|| DomainError::invariant("no checkout in progress"))
    }
}
