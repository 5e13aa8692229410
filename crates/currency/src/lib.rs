//! `solezone-currency` — currency normalization.
//!
//! Single source of truth for which display currency is active, what its
//! exchange rate against the canonical (USD) price unit is, and how a
//! canonical amount is rendered for it.

pub mod currency;
pub mod format;
pub mod selection;

pub use currency::Currency;
pub use selection::{CurrencyChange, CurrencySelection};
