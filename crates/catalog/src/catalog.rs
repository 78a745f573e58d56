use serde::Serialize;

use bakeryplan_core::{DomainError, DomainResult};

use crate::product::{Product, Recipe};

/// Read-only, ordered list of producible items.
///
/// Catalog order is significant: it is the tie-break when two products score
/// equally during allocation, and the order of the forecast in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for (idx, p) in products.iter().enumerate() {
            if p.key.trim().is_empty() {
                return Err(DomainError::validation("product key cannot be empty"));
            }
            if products[..idx].iter().any(|q| q.key == p.key) {
                return Err(DomainError::validation(format!(
                    "duplicate product key '{}'",
                    p.key
                )));
            }
            if !(p.price.is_finite() && p.price >= 0.0) {
                return Err(DomainError::validation(format!(
                    "price of '{}' must be a finite non-negative number",
                    p.key
                )));
            }
            if !(p.baseline_demand.is_finite() && p.baseline_demand >= 0.0) {
                return Err(DomainError::validation(format!(
                    "baseline demand of '{}' must be a finite non-negative number",
                    p.key
                )));
            }
        }
        Ok(Self { products })
    }

    /// The bakery's fixed product line.
    pub fn bakery() -> Self {
        Self {
            products: vec![
                Product::new(
                    "croissant",
                    "Croissant",
                    50.0,
                    Recipe::new(50, 30, 10, 1),
                    120.0,
                ),
                Product::new(
                    "butter_cookie",
                    "Butter Cookie",
                    15.0,
                    Recipe::new(20, 15, 10, 0),
                    300.0,
                ),
                Product::new(
                    "taiwan_cake",
                    "Taiwanese Egg Cake",
                    40.0,
                    Recipe::new(30, 5, 25, 2),
                    80.0,
                ),
                Product::new(
                    "brownie",
                    "Brownie",
                    55.0,
                    Recipe::new(25, 20, 30, 1),
                    90.0,
                ),
                Product::new(
                    "pound_cake",
                    "Pound Cake",
                    80.0,
                    Recipe::new(100, 10, 15, 1),
                    60.0,
                ),
                Product::new(
                    "macaron",
                    "Macaron",
                    25.0,
                    Recipe::new(15, 8, 20, 2),
                    45.0,
                ),
                Product::new(
                    "choco_cake",
                    "Chocolate Cake",
                    65.0,
                    Recipe::new(35, 25, 35, 2),
                    70.0,
                ),
                Product::new(
                    "fruit_tart",
                    "Fruit Tart",
                    45.0,
                    Recipe::new(40, 20, 15, 1),
                    55.0,
                ),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.key == key)
    }

    pub fn require(&self, key: &str) -> DomainResult<&Product> {
        self.get(key)
            .ok_or_else(|| DomainError::not_found(format!("product {key}")))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bakery()
    }
}
