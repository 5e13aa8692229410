//! `solezone-checkout` — simulated multi-step checkout.

pub mod checkout;

pub use checkout::{Checkout, CheckoutState, CheckoutStep, CheckoutTotals, OrderNumber};
