//! `solezone-cart` — the shopping cart.

pub mod cart;

pub use cart::{Cart, CartLine};
