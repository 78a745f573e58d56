//! Process configuration from the environment.

use anyhow::Context;

use bakeryplan_planning::PlanningConfig;

pub const ADDR_ENV: &str = "BAKERYPLAN_ADDR";
pub const PLANNING_CONFIG_ENV: &str = "BAKERYPLAN_CONFIG";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub addr: String,
    pub planning: PlanningConfig,
}

impl ApiConfig {
    /// Read `BAKERYPLAN_ADDR` and the optional `BAKERYPLAN_CONFIG` JSON file.
    ///
    /// Fields missing from the file keep their built-in defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        let planning = match std::env::var(PLANNING_CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read planning config {path}"))?;
                let planning = parse_planning_config(&raw)
                    .with_context(|| format!("invalid planning config {path}"))?;
                tracing::info!(path = %path, "loaded planning config");
                planning
            }
            Err(_) => PlanningConfig::default(),
        };

        Ok(Self { addr, planning })
    }
}

pub fn parse_planning_config(raw: &str) -> anyhow::Result<PlanningConfig> {
    let planning: PlanningConfig = serde_json::from_str(raw)?;
    planning.validate()?;
    Ok(planning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_merge_with_defaults() {
        let raw = r#"{
            "forecast": {"weather": {"sun": 1.2, "rain": 0.6, "overcast": 0.9, "cloudy": 0.95}}
        }"#;
        let planning = parse_planning_config(raw).unwrap();
        assert_eq!(planning.forecast.weather.sun, 1.2);
        assert_eq!(planning.forecast.weekend_factor, 1.2);
        assert_eq!(planning.allocation, PlanningConfig::default().allocation);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(parse_planning_config(r#"{"allocation": {"batch_share": 0}}"#).is_err());
        assert!(parse_planning_config(r#"{"allocation": {"min_batch": 0}}"#).is_err());
        assert!(parse_planning_config("not json").is_err());
    }
}
