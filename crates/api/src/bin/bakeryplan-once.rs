//! One-shot planner: reads a request from stdin and writes the plan to stdout.
//!
//! Logs go to stderr so stdout stays a single JSON document.

use std::io::{Read, Write};
use std::sync::Arc;

use anyhow::Context;

use bakeryplan_api::app::services::AppServices;
use bakeryplan_api::clock::SystemClock;
use bakeryplan_api::config::ApiConfig;
use bakeryplan_catalog::Catalog;

fn main() -> anyhow::Result<()> {
    bakeryplan_observability::init_stderr();

    let config = ApiConfig::from_env()?;
    let services = AppServices::new(config.planning, Catalog::bakery(), Arc::new(SystemClock))
        .context("invalid planning configuration")?;

    let mut body = Vec::new();
    std::io::stdin()
        .read_to_end(&mut body)
        .context("failed to read request from stdin")?;

    let response = services.plan(&body)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response.result)?;
    writeln!(stdout)?;
    Ok(())
}
