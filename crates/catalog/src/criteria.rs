//! Filter criteria owned by the browsing session.
//!
//! One `FilterCriteria` value lives for a browsing session; empty selection
//! sets are wildcards, and the price range is denominated in the *active
//! display currency*, so a currency change must rescale it (see
//! [`FilterCriteria::rescale`]).

use std::collections::BTreeSet;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::product::MAX_CANONICAL_PRICE;

/// Sort order for the filtered result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Descending by id; higher id = newer arrival (no creation-date field
    /// exists in the catalog).
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

/// Category selection: one named category or the wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Inclusive price bounds in the active display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Default span for a given exchange rate: `[0, 2000 * rate]`.
    pub fn full_span(rate: Decimal) -> Self {
        Self {
            min: Decimal::ZERO,
            max: MAX_CANONICAL_PRICE * rate,
        }
    }

    pub fn contains(&self, converted_price: Decimal) -> bool {
        self.min <= converted_price && converted_price <= self.max
    }

    /// Rescale both bounds by `new_rate / old_rate` so bounds typed in the
    /// old currency stay numerically meaningful in the new one.
    pub fn rescaled(&self, ratio: Decimal) -> Self {
        Self {
            min: self.min * ratio,
            max: self.max * ratio,
        }
    }
}

/// The combined filter state for the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub brands: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<Decimal>,
    pub price_range: PriceRange,
    pub sort: SortMode,
}

impl FilterCriteria {
    /// Initial state for a session whose active currency has `rate`:
    /// everything wildcarded, full price span, newest first.
    pub fn for_rate(rate: Decimal) -> Self {
        Self {
            category: CategoryFilter::All,
            brands: BTreeSet::new(),
            colors: BTreeSet::new(),
            sizes: BTreeSet::new(),
            price_range: PriceRange::full_span(rate),
            sort: SortMode::default(),
        }
    }

    /// Restore the initial state (the "reset filters" affordance).
    pub fn reset(&mut self, rate: Decimal) {
        *self = Self::for_rate(rate);
    }

    /// Apply a currency change: rescale the price bounds in place.
    ///
    /// Must run in the same update cycle as the currency switch, before the
    /// next filter recomputation reads the new rate.
    pub fn rescale(&mut self, ratio: Decimal) {
        self.price_range = self.price_range.rescaled(ratio);
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
    }

    pub fn toggle_color(&mut self, color: &str) {
        if !self.colors.remove(color) {
            self.colors.insert(color.to_string());
        }
    }

    pub fn toggle_size(&mut self, size: Decimal) {
        if !self.sizes.remove(&size) {
            self.sizes.insert(size);
        }
    }
}

/// Validate-on-keystroke text mirror of one price bound.
///
/// Only empty text or ASCII digits are ever stored; a rejected edit leaves
/// the previous text untouched. An empty mirror evaluates to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundInput {
    text: String,
}

impl BoundInput {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mirror seeded from a numeric value, rounded to whole display units.
    pub fn from_value(value: Decimal) -> Self {
        Self {
            text: round_whole(value).to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Numeric value of the mirror; empty text is zero, and digit runs too
    /// large for `u64` saturate rather than reject the typed text.
    pub fn value(&self) -> Decimal {
        if self.text.is_empty() {
            return Decimal::ZERO;
        }
        self.text
            .parse::<u64>()
            .map_or(Decimal::from(u64::MAX), Decimal::from)
    }

    /// Replace the text if it is a valid bound (empty or all digits).
    ///
    /// Returns whether the edit was accepted.
    pub fn set_text(&mut self, text: &str) -> bool {
        let valid = text.bytes().all(|b| b.is_ascii_digit());
        if valid {
            self.text = text.to_string();
        }
        valid
    }

    /// Rescale a non-empty mirror by the currency-change ratio, rounding to
    /// whole display units. Empty mirrors stay empty.
    pub fn rescale(&mut self, ratio: Decimal) {
        if !self.text.is_empty() {
            self.text = round_whole(self.value() * ratio).to_string();
        }
    }
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
