//! Inventory module: raw-material stock, production capacity and unit economics.
//!
//! Stock and capacity are consumed destructively within one planning run and
//! can never go negative; every deduction is checked before it is applied.

pub mod capacity;
pub mod costs;
pub mod stock;

pub use capacity::Capacity;
pub use costs::UnitCosts;
pub use stock::Stock;
