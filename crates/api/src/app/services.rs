//! Shared state behind every handler.

use std::sync::Arc;

use tracing::{info, warn};

use bakeryplan_catalog::Catalog;
use bakeryplan_core::PlanRunId;
use bakeryplan_planning::{PlanningConfig, PlanningError, PlanningJob, ProductionPlanJob};

use crate::app::dto::{PlanRequest, PlanResponse};
use crate::clock::Clock;

pub struct AppServices {
    config: PlanningConfig,
    catalog: Catalog,
    clock: Arc<dyn Clock>,
}

impl AppServices {
    /// Rejects invalid configuration up front so request handling never sees it.
    pub fn new(
        config: PlanningConfig,
        catalog: Catalog,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, PlanningError> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            clock,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Normalise a raw request body and plan against it.
    pub fn plan(&self, body: &[u8]) -> Result<PlanResponse, PlanningError> {
        let PlanRequest { input, report } = PlanRequest::from_bytes(body, self.clock.as_ref());
        let id = PlanRunId::new();

        if !report.is_clean() {
            let fields: Vec<&str> = report.issues.iter().map(|i| i.field.as_str()).collect();
            warn!(%id, ?fields, "request fields defaulted");
        }

        let result = ProductionPlanJob::new(&self.config, &self.catalog, input).run()?;
        info!(%id, units = result.total_quantity(), "plan served");

        Ok(PlanResponse {
            ok: true,
            id,
            result,
            validation: report,
        })
    }
}
