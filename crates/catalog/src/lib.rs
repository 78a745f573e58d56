//! Catalog module: the fixed set of producible bakery items.
//!
//! Pure data (no IO, no behaviour beyond lookups).

pub mod catalog;
pub mod ingredient;
pub mod product;

pub use catalog::Catalog;
pub use ingredient::Ingredient;
pub use product::{Product, Recipe};
