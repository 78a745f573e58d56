use serde::{Deserialize, Serialize};

use crate::ingredient::Ingredient;

/// Per-unit ingredient requirements of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub flour: u64,
    pub butter: u64,
    pub sugar: u64,
    pub eggs: u64,
}

impl Recipe {
    pub const fn new(flour: u64, butter: u64, sugar: u64, eggs: u64) -> Self {
        Self {
            flour,
            butter,
            sugar,
            eggs,
        }
    }

    /// Quantity of `ingredient` needed for one unit.
    pub fn requires(&self, ingredient: Ingredient) -> u64 {
        match ingredient {
            Ingredient::Flour => self.flour,
            Ingredient::Butter => self.butter,
            Ingredient::Sugar => self.sugar,
            Ingredient::Eggs => self.eggs,
        }
    }

    /// Iterate `(ingredient, per-unit quantity)` over every tracked ingredient.
    pub fn iter(&self) -> impl Iterator<Item = (Ingredient, u64)> + '_ {
        Ingredient::ALL.into_iter().map(|i| (i, self.requires(i)))
    }
}

/// A producible catalog item. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub key: String,
    pub name: String,
    /// Unit selling price in currency units.
    pub price: f64,
    pub recipe: Recipe,
    /// Baseline popularity; the forecast's multiplicative base.
    pub baseline_demand: f64,
}

impl Product {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        recipe: Recipe,
        baseline_demand: f64,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            price,
            recipe,
            baseline_demand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_lookup_matches_fields() {
        let recipe = Recipe::new(50, 30, 10, 1);
        assert_eq!(recipe.requires(Ingredient::Flour), 50);
        assert_eq!(recipe.requires(Ingredient::Eggs), 1);
        let total: u64 = recipe.iter().map(|(_, q)| q).sum();
        assert_eq!(total, 91);
    }

    #[test]
    fn recipe_serializes_as_ingredient_map() {
        let json = serde_json::to_value(Recipe::new(20, 15, 10, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"flour": 20, "butter": 15, "sugar": 10, "eggs": 0})
        );
    }
}
