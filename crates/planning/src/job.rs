use tracing::{info, instrument};

use bakeryplan_catalog::Catalog;
use bakeryplan_inventory::{Capacity, Stock};

use crate::allocation::AllocationPlanner;
use crate::config::PlanningConfig;
use crate::context::DemandContext;
use crate::forecast::DemandForecaster;
use crate::promotion::PromotionAdvisor;
use crate::result::{PlanEntry, PlanningError, ProductionPlan};

/// A self-contained planning computation.
///
/// Inputs are provided by callers; jobs never read clocks or external state.
pub trait PlanningJob {
    type Input;
    type Output;

    /// The input snapshot the job will plan against.
    fn input(&self) -> &Self::Input;

    /// Execute the job. Must be deterministic for a given input.
    fn run(&self) -> Result<Self::Output, PlanningError>;
}

/// Everything that varies between planning runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningInput {
    pub context: DemandContext,
    pub stock: Stock,
    pub capacity: Capacity,
}

impl PlanningInput {
    pub fn new(context: DemandContext) -> Self {
        Self {
            context,
            stock: Stock::default(),
            capacity: Capacity::default(),
        }
    }

    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Forecast, allocate, then attach promotions.
#[derive(Debug, Clone)]
pub struct ProductionPlanJob<'a> {
    config: &'a PlanningConfig,
    catalog: &'a Catalog,
    input: PlanningInput,
}

impl<'a> ProductionPlanJob<'a> {
    pub fn new(config: &'a PlanningConfig, catalog: &'a Catalog, input: PlanningInput) -> Self {
        Self {
            config,
            catalog,
            input,
        }
    }
}

impl PlanningJob for ProductionPlanJob<'_> {
    type Input = PlanningInput;
    type Output = ProductionPlan;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    #[instrument(skip_all, fields(
        date = %self.input.context.date,
        weather = %self.input.context.weather,
        branch = %self.input.context.branch,
        special_day = self.input.context.special_day,
        capacity = self.input.capacity.remaining(),
    ))]
    fn run(&self) -> Result<ProductionPlan, PlanningError> {
        self.config.validate()?;
        let context = &self.input.context;

        let forecast =
            DemandForecaster::new(&self.config.forecast).forecast(context, self.catalog);

        let allocation = AllocationPlanner::new(&self.config.allocation).allocate(
            self.catalog,
            self.input.stock,
            self.input.capacity,
        )?;

        let advisor = PromotionAdvisor::new(&self.config.promotion);
        let plan: Vec<PlanEntry> = allocation
            .lines
            .iter()
            .map(|line| {
                let demand = forecast.quantity_for(&line.product.key);
                let entry = PlanEntry::new(line, demand);
                let promotion = advisor.advise(&entry, demand, context.special_day);
                entry.with_promotion(promotion)
            })
            .collect();

        info!(
            products = plan.len(),
            units = allocation.total_quantity(),
            forecast_units = forecast.total(),
            capacity_left = allocation.remaining_capacity.remaining(),
            promotions = plan.iter().filter(|e| e.promotion_suggestion.is_some()).count(),
            "production plan computed"
        );

        Ok(ProductionPlan {
            forecast,
            plan,
            remaining_stock: allocation.remaining_stock,
            remaining_capacity: allocation.remaining_capacity.remaining(),
        })
    }
}
