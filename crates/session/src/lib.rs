//! `solezone-session` — the single owner of all mutable storefront state.
//!
//! Every mutation of the active currency, filter criteria, wishlist, cart,
//! or checkout goes through [`StorefrontSession`]. In a single-threaded
//! event loop no locking is needed; a multi-threaded embedder must route
//! updates through one owning task to preserve the currency-change ordering
//! guarantee.

pub mod session;
pub mod wishlist;

pub use session::StorefrontSession;
pub use wishlist::{Wishlist, WishlistChange};
