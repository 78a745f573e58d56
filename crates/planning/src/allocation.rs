//! Profit-density ranking and greedy allocation.
//!
//! Model:
//! - Score every product by `profit / scarcity`, where scarcity sums the share of
//!   each ingredient's current stock one unit would consume.
//! - Walk products best-first (stable, so ties keep catalog order).
//! - Commit up to `batch_share` of the remaining capacity per product (at least
//!   `min_batch`), clipped by what stock and capacity can actually cover.
//!
//! Single pass, no backtracking: a product skipped for lack of stock is not revisited.

use tracing::debug;

use bakeryplan_catalog::{Catalog, Product};
use bakeryplan_core::DomainResult;
use bakeryplan_inventory::{Capacity, Stock};

use crate::config::AllocationConfig;

/// A product with its unit economics and ranking score against a given stock.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub unit_cost: f64,
    pub profit: f64,
    pub scarcity: f64,
    pub score: f64,
}

/// Units committed for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationLine {
    pub product: Product,
    pub quantity: u64,
    pub unit_cost: f64,
    pub profit_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// In commit order.
    pub lines: Vec<AllocationLine>,
    pub remaining_stock: Stock,
    pub remaining_capacity: Capacity,
}

impl Allocation {
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AllocationPlanner<'a> {
    config: &'a AllocationConfig,
}

impl<'a> AllocationPlanner<'a> {
    pub fn new(config: &'a AllocationConfig) -> Self {
        Self { config }
    }

    pub fn score<'p>(&self, product: &'p Product, stock: &Stock) -> ScoredProduct<'p> {
        let unit_cost = self.config.unit_costs.cost_of(&product.recipe);
        let profit = product.price - unit_cost;
        let scarcity: f64 = product
            .recipe
            .iter()
            .map(|(ingredient, per_unit)| {
                per_unit as f64 / self.stock_divisor(stock.available(ingredient))
            })
            .sum();
        ScoredProduct {
            product,
            unit_cost,
            profit,
            scarcity,
            score: profit / self.scarcity_denominator(scarcity),
        }
    }

    /// Products best-first. Equal scores keep catalog order.
    pub fn rank<'p>(&self, catalog: &'p Catalog, stock: &Stock) -> Vec<ScoredProduct<'p>> {
        let mut scored: Vec<ScoredProduct<'p>> = catalog
            .products()
            .iter()
            .map(|p| self.score(p, stock))
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Greedily commit production against `stock` and `capacity`.
    ///
    /// Stock and capacity are consumed by value and returned in the result; the
    /// caller's copies are untouched.
    pub fn allocate(
        &self,
        catalog: &Catalog,
        mut stock: Stock,
        mut capacity: Capacity,
    ) -> DomainResult<Allocation> {
        let ranked = self.rank(catalog, &stock);
        let mut lines = Vec::new();

        for candidate in &ranked {
            if capacity.is_exhausted() {
                break;
            }
            let product = candidate.product;
            let max_units = stock
                .max_units(&product.recipe)
                .map_or(capacity.remaining(), |units| units.min(capacity.remaining()));
            if max_units == 0 {
                debug!(
                    product = %product.key,
                    score = candidate.score,
                    "skipped: insufficient stock"
                );
                continue;
            }

            let quantity = max_units.min(self.batch_limit(capacity.remaining()));
            if quantity == 0 {
                debug!(product = %product.key, score = candidate.score, "skipped: empty batch");
                continue;
            }
            stock.consume(&product.recipe, quantity)?;
            capacity.consume(quantity)?;

            debug!(
                product = %product.key,
                score = candidate.score,
                quantity,
                capacity_left = capacity.remaining(),
                "allocated"
            );
            lines.push(AllocationLine {
                product: product.clone(),
                quantity,
                unit_cost: candidate.unit_cost,
                profit_per_unit: candidate.profit,
            });
        }

        Ok(Allocation {
            lines,
            remaining_stock: stock,
            remaining_capacity: capacity,
        })
    }

    /// Per-product ceiling: a share of what is left, but never below the minimum batch.
    pub fn batch_limit(&self, remaining_capacity: u64) -> u64 {
        let share = (remaining_capacity as f64 * self.config.batch_share).floor() as u64;
        share.max(self.config.min_batch)
    }

    fn stock_divisor(&self, available: u64) -> f64 {
        available.max(self.config.stock_floor) as f64
    }

    fn scarcity_denominator(&self, scarcity: f64) -> f64 {
        if scarcity > 0.0 {
            scarcity
        } else {
            self.config.scarcity_epsilon
        }
    }
}
