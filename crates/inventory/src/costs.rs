use serde::{Deserialize, Serialize};

use bakeryplan_catalog::{Ingredient, Recipe};
use bakeryplan_core::{DomainError, DomainResult};

/// Purchase cost per recipe unit of each ingredient, in currency units.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCosts {
    pub flour: f64,
    pub butter: f64,
    pub sugar: f64,
    pub eggs: f64,
}

impl UnitCosts {
    pub fn of(&self, ingredient: Ingredient) -> f64 {
        match ingredient {
            Ingredient::Flour => self.flour,
            Ingredient::Butter => self.butter,
            Ingredient::Sugar => self.sugar,
            Ingredient::Eggs => self.eggs,
        }
    }

    /// Ingredient cost of one unit of `recipe`.
    pub fn cost_of(&self, recipe: &Recipe) -> f64 {
        recipe
            .iter()
            .map(|(ingredient, per_unit)| per_unit as f64 * self.of(ingredient))
            .sum()
    }

    pub fn validate(&self) -> DomainResult<()> {
        for ingredient in Ingredient::ALL {
            let cost = self.of(ingredient);
            if !(cost.is_finite() && cost >= 0.0) {
                return Err(DomainError::validation(format!(
                    "unit cost of {ingredient} must be a finite non-negative number"
                )));
            }
        }
        Ok(())
    }
}

impl Default for UnitCosts {
    fn default() -> Self {
        Self {
            flour: 0.05,
            butter: 0.2,
            sugar: 0.04,
            eggs: 5.0,
        }
    }
}
