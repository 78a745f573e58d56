use serde::{Deserialize, Serialize};

use bakeryplan_catalog::{Ingredient, Recipe};
use bakeryplan_core::{DomainError, DomainResult};

/// Available raw materials, in recipe units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    flour: u64,
    butter: u64,
    sugar: u64,
    eggs: u64,
}

impl Stock {
    pub const DEFAULT_FLOUR: u64 = 50_000;
    pub const DEFAULT_BUTTER: u64 = 15_000;
    pub const DEFAULT_SUGAR: u64 = 40_000;
    pub const DEFAULT_EGGS: u64 = 300;

    pub fn new(flour: u64, butter: u64, sugar: u64, eggs: u64) -> Self {
        Self {
            flour,
            butter,
            sugar,
            eggs,
        }
    }

    pub fn available(&self, ingredient: Ingredient) -> u64 {
        match ingredient {
            Ingredient::Flour => self.flour,
            Ingredient::Butter => self.butter,
            Ingredient::Sugar => self.sugar,
            Ingredient::Eggs => self.eggs,
        }
    }

    fn slot_mut(&mut self, ingredient: Ingredient) -> &mut u64 {
        match ingredient {
            Ingredient::Flour => &mut self.flour,
            Ingredient::Butter => &mut self.butter,
            Ingredient::Sugar => &mut self.sugar,
            Ingredient::Eggs => &mut self.eggs,
        }
    }

    /// Builder-style override of a single ingredient.
    pub fn with(mut self, ingredient: Ingredient, quantity: u64) -> Self {
        *self.slot_mut(ingredient) = quantity;
        self
    }

    /// Units of `recipe` producible from this stock alone.
    ///
    /// Ingredients the recipe does not use impose no limit; `None` means no
    /// ingredient constrains production at all.
    pub fn max_units(&self, recipe: &Recipe) -> Option<u64> {
        recipe
            .iter()
            .filter(|(_, per_unit)| *per_unit > 0)
            .map(|(ingredient, per_unit)| self.available(ingredient) / per_unit)
            .min()
    }

    /// Deduct `units * recipe` from every ingredient.
    ///
    /// All-or-nothing: if any ingredient would go negative, stock is left untouched.
    pub fn consume(&mut self, recipe: &Recipe, units: u64) -> DomainResult<()> {
        let mut next = *self;
        for (ingredient, per_unit) in recipe.iter() {
            let needed = per_unit.checked_mul(units).ok_or_else(|| {
                DomainError::invariant(format!("{ingredient} requirement overflows"))
            })?;
            let slot = next.slot_mut(ingredient);
            *slot = slot.checked_sub(needed).ok_or_else(|| {
                DomainError::invariant(format!(
                    "{ingredient} cannot go negative (available {}, needed {needed})",
                    self.available(ingredient)
                ))
            })?;
        }
        *self = next;
        Ok(())
    }
}

impl Default for Stock {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_FLOUR,
            Self::DEFAULT_BUTTER,
            Self::DEFAULT_SUGAR,
            Self::DEFAULT_EGGS,
        )
    }
}
