//! `solezone-catalog` — product catalog and the filter/sort engine.
//!
//! The catalog is an immutable collection supplied at startup; the engine is
//! a pure function over it. Criteria are owned by the presenting session and
//! passed in on every recomputation (the catalog is small, full
//! recomputation is the correct design, not a compromise).

pub mod criteria;
pub mod demo;
pub mod filter;
pub mod product;

pub use criteria::{BoundInput, CategoryFilter, FilterCriteria, PriceRange, SortMode};
pub use filter::filter_and_sort;
pub use product::{Catalog, Product, MAX_CANONICAL_PRICE};
