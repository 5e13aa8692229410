//! Active currency selection and change notification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Notification that the active currency moved from one value to another.
///
/// Emitted by [`CurrencySelection::select`]; the owner of currency-relative
/// derived state (e.g. a price-range filter) applies it before the next
/// filter recomputation so stale bounds are never compared against freshly
/// converted prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyChange {
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyChange {
    /// Multiplier taking an amount denominated in the old display currency
    /// into the new one.
    pub fn ratio(&self) -> Decimal {
        self.to.rate() / self.from.rate()
    }
}

/// The single active display currency for a browsing session.
///
/// Mutated only through [`select`](Self::select); there is no error path
/// because the currency set is a closed enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySelection {
    active: Currency,
}

impl CurrencySelection {
    pub fn new(initial: Currency) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Currency {
        self.active
    }

    /// Current exchange rate of the active currency against canonical units.
    pub fn rate(&self) -> Decimal {
        self.active.rate()
    }

    pub fn symbol(&self) -> &'static str {
        self.active.symbol()
    }

    /// Render a canonical amount in the active currency.
    pub fn format_price(&self, canonical: Decimal) -> String {
        self.active.format_price(canonical)
    }

    /// Switch the active currency.
    ///
    /// Returns the change to propagate to dependents, or `None` when the
    /// selection did not actually move.
    pub fn select(&mut self, next: Currency) -> Option<CurrencyChange> {
        if next == self.active {
            return None;
        }
        let change = CurrencyChange {
            from: self.active,
            to: next,
        };
        self.active = next;
        Some(change)
    }
}
