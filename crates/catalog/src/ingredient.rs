use core::str::FromStr;
use serde::{Deserialize, Serialize};

use bakeryplan_core::DomainError;

/// Raw materials tracked by stock, recipes and unit costs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Flour,
    Butter,
    Sugar,
    Eggs,
}

impl Ingredient {
    /// Every tracked ingredient, in wire order.
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Flour,
        Ingredient::Butter,
        Ingredient::Sugar,
        Ingredient::Eggs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ingredient::Flour => "flour",
            Ingredient::Butter => "butter",
            Ingredient::Sugar => "sugar",
            Ingredient::Eggs => "eggs",
        }
    }
}

impl core::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ingredient {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flour" => Ok(Ingredient::Flour),
            "butter" => Ok(Ingredient::Butter),
            "sugar" => Ok(Ingredient::Sugar),
            "eggs" | "egg" => Ok(Ingredient::Eggs),
            other => Err(DomainError::validation(format!(
                "unknown ingredient '{other}' (expected one of: flour, butter, sugar, eggs)"
            ))),
        }
    }
}
