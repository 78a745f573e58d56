//! `bakeryplan-planning`
//!
//! **Responsibility:** the production-planning decision for one run.
//!
//! - [`forecast`]: multiplicative demand model per product.
//! - [`allocation`]: profit-density ranking and greedy capacity/stock commitment.
//! - [`promotion`]: rule-based selling hints per allocated product.
//! - [`job`]: chains the three into a [`ProductionPlan`].
//!
//! Everything here is pure and deterministic. Inputs (including the calendar
//! date) are supplied by callers; nothing reads clocks, files or the network.

pub mod allocation;
pub mod config;
pub mod context;
pub mod forecast;
pub mod job;
pub mod promotion;
pub mod result;

pub use allocation::{Allocation, AllocationLine, AllocationPlanner, ScoredProduct};
pub use config::{
    AllocationConfig, BranchMultipliers, ForecastConfig, PlanningConfig, PromotionConfig,
    WeatherMultipliers,
};
pub use context::{Branch, DemandContext, Weather};
pub use forecast::{DemandForecaster, Forecast, ForecastEntry};
pub use job::{PlanningInput, PlanningJob, ProductionPlanJob};
pub use promotion::{Promotion, PromotionAdvisor};
pub use result::{PlanEntry, PlanningError, ProductionPlan};
