//! Immutable planning tables.
//!
//! Built once at process start and handed to the job by reference; nothing in
//! this crate reads a global table.

use serde::{Deserialize, Serialize};

use bakeryplan_inventory::UnitCosts;

use crate::context::{Branch, Weather};
use crate::result::PlanningError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    pub forecast: ForecastConfig,
    pub allocation: AllocationConfig,
    pub promotion: PromotionConfig,
}

impl PlanningConfig {
    pub fn validate(&self) -> Result<(), PlanningError> {
        self.forecast.validate()?;
        self.allocation.validate()?;
        self.promotion.validate()
    }
}

/// Demand multipliers. Unrecognised weather or branch values use 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub weekend_factor: f64,
    pub special_day_factor: f64,
    /// Converts baseline popularity into an absolute unit forecast.
    pub scaling_factor: f64,
    pub weather: WeatherMultipliers,
    pub branch: BranchMultipliers,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            weekend_factor: 1.2,
            special_day_factor: 1.3,
            scaling_factor: 0.3,
            weather: WeatherMultipliers::default(),
            branch: BranchMultipliers::default(),
        }
    }
}

impl ForecastConfig {
    fn validate(&self) -> Result<(), PlanningError> {
        let factors = [
            ("weekend_factor", self.weekend_factor),
            ("special_day_factor", self.special_day_factor),
            ("scaling_factor", self.scaling_factor),
            ("weather.sun", self.weather.sun),
            ("weather.rain", self.weather.rain),
            ("weather.overcast", self.weather.overcast),
            ("weather.cloudy", self.weather.cloudy),
            ("branch.a", self.branch.a),
            ("branch.b", self.branch.b),
            ("branch.c", self.branch.c),
        ];
        for (name, value) in factors {
            ensure_non_negative(name, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherMultipliers {
    pub sun: f64,
    pub rain: f64,
    pub overcast: f64,
    pub cloudy: f64,
}

impl WeatherMultipliers {
    pub fn factor(&self, weather: &Weather) -> f64 {
        match weather {
            Weather::Sun => self.sun,
            Weather::Rain => self.rain,
            Weather::Overcast => self.overcast,
            Weather::Cloudy => self.cloudy,
            Weather::Unrecognized(_) => 1.0,
        }
    }
}

impl Default for WeatherMultipliers {
    fn default() -> Self {
        Self {
            sun: 1.1,
            rain: 0.7,
            overcast: 0.9,
            cloudy: 0.95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchMultipliers {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl BranchMultipliers {
    pub fn factor(&self, branch: &Branch) -> f64 {
        match branch {
            Branch::A => self.a,
            Branch::B => self.b,
            Branch::C => self.c,
            Branch::Other(_) => 1.0,
        }
    }
}

impl Default for BranchMultipliers {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1.2,
            c: 0.8,
        }
    }
}

/// Scoring and greedy-commit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    pub unit_costs: UnitCosts,
    /// Share of the *remaining* capacity one product may take, in (0, 1].
    pub batch_share: f64,
    /// Smallest batch committed when stock and capacity allow it.
    pub min_batch: u64,
    /// Lower clamp applied to stock before dividing by it when scoring.
    pub stock_floor: u64,
    /// Denominator used when a recipe has zero scarcity weight.
    pub scarcity_epsilon: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            unit_costs: UnitCosts::default(),
            batch_share: 0.35,
            min_batch: 10,
            stock_floor: 1,
            scarcity_epsilon: 1e-6,
        }
    }
}

impl AllocationConfig {
    fn validate(&self) -> Result<(), PlanningError> {
        self.unit_costs
            .validate()
            .map_err(|e| PlanningError::InvalidConfig(e.to_string()))?;
        if !(self.batch_share.is_finite() && self.batch_share > 0.0 && self.batch_share <= 1.0) {
            return Err(PlanningError::InvalidConfig(
                "batch_share must be in (0, 1]".to_string(),
            ));
        }
        if self.min_batch == 0 {
            return Err(PlanningError::InvalidConfig(
                "min_batch must be >= 1".to_string(),
            ));
        }
        if self.stock_floor == 0 {
            return Err(PlanningError::InvalidConfig(
                "stock_floor must be >= 1".to_string(),
            ));
        }
        if !(self.scarcity_epsilon.is_finite() && self.scarcity_epsilon > 0.0) {
            return Err(PlanningError::InvalidConfig(
                "scarcity_epsilon must be a finite positive number".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionConfig {
    /// Leftover/forecast ratio above which a discount is suggested.
    pub discount_leftover_ratio: f64,
    /// Leftover units above which an urgent-sale hint is emitted.
    pub urgent_leftover_threshold: u64,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            discount_leftover_ratio: 0.3,
            urgent_leftover_threshold: 10,
        }
    }
}

impl PromotionConfig {
    fn validate(&self) -> Result<(), PlanningError> {
        ensure_non_negative("discount_leftover_ratio", self.discount_leftover_ratio)
    }
}

fn ensure_non_negative(name: &str, value: f64) -> Result<(), PlanningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanningError::InvalidConfig(format!(
            "{name} must be a finite non-negative number"
        )))
    }
}
