use serde::{Serialize, Serializer};

use crate::config::PromotionConfig;
use crate::result::PlanEntry;

/// Selling hint attached to a plan entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// Overstock relative to demand.
    Discount,
    /// Special day: pair with a drink.
    CoffeeBundle,
    /// Large absolute leftover.
    SellUrgently,
}

impl Promotion {
    pub fn message(&self) -> &'static str {
        match self {
            Promotion::Discount => "Suggested promotion: 20% discount",
            Promotion::CoffeeBundle => "Bundle with coffee",
            Promotion::SellUrgently => "Sell urgently, ingredients may run low",
        }
    }
}

impl Serialize for Promotion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Rule-based promotion picker. Rules are checked in order; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct PromotionAdvisor<'a> {
    config: &'a PromotionConfig,
}

impl<'a> PromotionAdvisor<'a> {
    pub fn new(config: &'a PromotionConfig) -> Self {
        Self { config }
    }

    pub fn advise(&self, entry: &PlanEntry, forecast: u64, special_day: bool) -> Option<Promotion> {
        let leftover = entry.expected_leftover;
        if forecast > 0 && leftover as f64 / forecast as f64 > self.config.discount_leftover_ratio {
            Some(Promotion::Discount)
        } else if special_day {
            Some(Promotion::CoffeeBundle)
        } else if leftover > self.config.urgent_leftover_threshold {
            Some(Promotion::SellUrgently)
        } else {
            None
        }
    }
}
