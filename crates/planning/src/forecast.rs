use serde::ser::{Serialize, SerializeMap, Serializer};

use bakeryplan_catalog::Catalog;

use crate::config::ForecastConfig;
use crate::context::DemandContext;

/// Predicted demand for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastEntry {
    pub key: String,
    pub name: String,
    pub quantity: u64,
}

/// Predicted demand per product, in catalog order.
///
/// Serialises as a `display name -> quantity` map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Forecast {
    entries: Vec<ForecastEntry>,
}

impl Forecast {
    pub fn entries(&self) -> &[ForecastEntry] {
        &self.entries
    }

    /// Forecast for a product key; products absent from the forecast have zero demand.
    pub fn quantity_for(&self, key: &str) -> u64 {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map_or(0, |e| e.quantity)
    }

    pub fn by_name(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.quantity)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }
}

impl Serialize for Forecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.quantity)?;
        }
        map.end()
    }
}

/// Multiplicative demand model:
/// `round(baseline * day * weather * branch * special * scaling)`, floored at zero.
#[derive(Debug, Clone, Copy)]
pub struct DemandForecaster<'a> {
    config: &'a ForecastConfig,
}

impl<'a> DemandForecaster<'a> {
    pub fn new(config: &'a ForecastConfig) -> Self {
        Self { config }
    }

    /// Combined multiplier applied to every baseline for `context`.
    pub fn context_factors(&self, context: &DemandContext) -> [f64; 5] {
        let day = if context.is_weekend() {
            self.config.weekend_factor
        } else {
            1.0
        };
        let special = if context.special_day {
            self.config.special_day_factor
        } else {
            1.0
        };
        [
            day,
            self.config.weather.factor(&context.weather),
            self.config.branch.factor(&context.branch),
            special,
            self.config.scaling_factor,
        ]
    }

    pub fn forecast(&self, context: &DemandContext, catalog: &Catalog) -> Forecast {
        let factors = self.context_factors(context);
        let entries = catalog
            .products()
            .iter()
            .map(|product| {
                let raw = factors
                    .iter()
                    .fold(product.baseline_demand, |acc, factor| acc * factor);
                ForecastEntry {
                    key: product.key.clone(),
                    name: product.name.clone(),
                    quantity: to_units(raw),
                }
            })
            .collect();
        Forecast { entries }
    }
}

/// Round half-to-even and clip at zero.
fn to_units(raw: f64) -> u64 {
    let rounded = raw.round_ties_even();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    }
}
