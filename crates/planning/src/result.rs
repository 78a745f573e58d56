use serde::Serialize;
use thiserror::Error;

use bakeryplan_core::DomainError;
use bakeryplan_inventory::Stock;

use crate::allocation::AllocationLine;
use crate::forecast::Forecast;
use crate::promotion::Promotion;

/// Outcome of one planning run: what to bake, how much, and what to push.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionPlan {
    pub forecast: Forecast,
    /// Allocations in commit (score) order.
    pub plan: Vec<PlanEntry>,
    #[serde(rename = "remainingStock")]
    pub remaining_stock: Stock,
    #[serde(rename = "remainingCapacity")]
    pub remaining_capacity: u64,
}

impl ProductionPlan {
    pub fn total_quantity(&self) -> u64 {
        self.plan.iter().map(|e| e.quantity).sum()
    }

    pub fn entry(&self, key: &str) -> Option<&PlanEntry> {
        self.plan.iter().find(|e| e.key == key)
    }
}

/// One allocated product. Never mutated once pushed into a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    /// Display name.
    pub product: String,
    pub key: String,
    pub quantity: u64,
    /// Selling price minus ingredient cost; negative for loss-making items.
    #[serde(rename = "profitPerUnit")]
    pub profit_per_unit: f64,
    pub expected_leftover: u64,
    pub selling_price: f64,
    /// Ingredient cost per unit, rounded to 2 decimals.
    pub product_cost: f64,
    /// `profit / price` rounded to 2 decimals (0 when the price is 0).
    pub gp_margin: f64,
    pub promotion_suggestion: Option<Promotion>,
}

impl PlanEntry {
    pub fn new(line: &AllocationLine, forecast: u64) -> Self {
        let price = line.product.price;
        let gp_margin = if price > 0.0 {
            round2(line.profit_per_unit / price)
        } else {
            0.0
        };
        Self {
            product: line.product.name.clone(),
            key: line.product.key.clone(),
            quantity: line.quantity,
            profit_per_unit: line.profit_per_unit,
            expected_leftover: line.quantity.saturating_sub(forecast),
            selling_price: price,
            product_cost: round2(line.unit_cost),
            gp_margin,
            promotion_suggestion: None,
        }
    }

    pub fn with_promotion(mut self, promotion: Option<Promotion>) -> Self {
        self.promotion_suggestion = promotion;
        self
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("invalid planning configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
