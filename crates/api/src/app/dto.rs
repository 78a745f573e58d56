//! Request normalisation and response DTOs.
//!
//! Planning never fails on bad input: every field falls back to its default.
//! What was defaulted (or kept but not understood) is recorded in a
//! [`ValidationReport`] that travels back with the plan.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};

use bakeryplan_core::PlanRunId;
use bakeryplan_inventory::{Capacity, Stock};
use bakeryplan_planning::{Branch, DemandContext, PlanningInput, ProductionPlan, Weather};

use crate::clock::Clock;

pub const DEFAULT_BRANCH: &str = "Branch A";
pub const DEFAULT_WEATHER: &str = "sun";

// -------------------------
// Validation report
// -------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Absent; the default was used.
    Missing,
    /// Present but unusable; the default was used.
    Invalid,
    /// Accepted as-is but outside the known set; treated as neutral.
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub issue: IssueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.field == field)
    }

    fn push(&mut self, field: &str, issue: IssueKind, detail: Option<String>) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            issue,
            detail,
        });
    }

    fn missing(&mut self, field: &str) {
        self.push(field, IssueKind::Missing, None);
    }

    fn invalid(&mut self, field: &str, detail: impl Into<String>) {
        self.push(field, IssueKind::Invalid, Some(detail.into()));
    }

    fn unrecognized(&mut self, field: &str, value: &str) {
        self.push(
            field,
            IssueKind::Unrecognized,
            Some(format!("'{value}' is not a known value; neutral multiplier applied")),
        );
    }
}

// -------------------------
// Request
// -------------------------

/// A request after defaulting: always plannable.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub input: PlanningInput,
    pub report: ValidationReport,
}

impl PlanRequest {
    /// Parse a raw request body. An empty body is an empty request.
    pub fn from_bytes(body: &[u8], clock: &dyn Clock) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::from_value(&Value::Object(Map::new()), clock);
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value, clock),
            Err(e) => {
                let mut request = Self::from_value(&Value::Object(Map::new()), clock);
                request
                    .report
                    .issues
                    .insert(0, body_issue(format!("unparsable JSON: {e}")));
                request
            }
        }
    }

    pub fn from_value(body: &Value, clock: &dyn Clock) -> Self {
        let mut report = ValidationReport::default();
        let empty = Map::new();

        let root = match body {
            Value::Object(map) => map,
            other => {
                report.issues.push(body_issue(format!(
                    "expected a JSON object, got {}",
                    json_kind(other)
                )));
                &empty
            }
        };

        let inputs = match root.get("inputs") {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(map)) => map,
            Some(other) => {
                report.invalid(
                    "inputs",
                    format!("expected an object, got {}", json_kind(other)),
                );
                &empty
            }
        };

        let stock = Stock::new(
            read_quantity(inputs, "flour", Stock::DEFAULT_FLOUR, &mut report),
            read_quantity(inputs, "butter", Stock::DEFAULT_BUTTER, &mut report),
            read_quantity(inputs, "sugar", Stock::DEFAULT_SUGAR, &mut report),
            read_quantity(inputs, "eggs", Stock::DEFAULT_EGGS, &mut report),
        );
        let capacity = Capacity::new(read_quantity(
            inputs,
            "capacity",
            Capacity::DEFAULT,
            &mut report,
        ));

        let branch = match read_string(root, "branch", &mut report) {
            Some(raw) => {
                let branch = Branch::parse(&raw);
                if !branch.is_recognized() {
                    report.unrecognized("branch", &raw);
                }
                branch
            }
            None => Branch::parse(DEFAULT_BRANCH),
        };

        let weather = match read_string(root, "weather", &mut report) {
            Some(raw) => {
                let weather = Weather::parse(&raw);
                if !weather.is_recognized() {
                    report.unrecognized("weather", &raw);
                }
                weather
            }
            None => Weather::parse(DEFAULT_WEATHER),
        };

        let special_day = match root.get("special_day") {
            None | Some(Value::Null) => {
                report.missing("special_day");
                false
            }
            Some(Value::Bool(flag)) => *flag,
            Some(other) => {
                report.invalid(
                    "special_day",
                    format!("expected a boolean, got {}", json_kind(other)),
                );
                false
            }
        };

        let date = match read_string(root, "date", &mut report) {
            Some(raw) => parse_date(&raw).unwrap_or_else(|| {
                report.invalid(
                    "date",
                    format!("'{raw}' is not an ISO-8601 date; using the current date"),
                );
                clock.now().date()
            }),
            None => clock.now().date(),
        };

        let context = DemandContext::new(date)
            .with_weather(weather)
            .with_branch(branch)
            .with_special_day(special_day);

        Self {
            input: PlanningInput::new(context)
                .with_stock(stock)
                .with_capacity(capacity),
            report,
        }
    }
}

fn body_issue(detail: String) -> FieldIssue {
    FieldIssue {
        field: "body".to_string(),
        issue: IssueKind::Invalid,
        detail: Some(detail),
    }
}

fn read_quantity(
    inputs: &Map<String, Value>,
    name: &str,
    default: u64,
    report: &mut ValidationReport,
) -> u64 {
    let field = format!("inputs.{name}");
    match inputs.get(name) {
        None | Some(Value::Null) => {
            report.missing(&field);
            default
        }
        Some(value) => match as_quantity(value) {
            Some(quantity) => quantity,
            None => {
                report.invalid(
                    &field,
                    format!("expected a non-negative integer, got {value}"),
                );
                default
            }
        },
    }
}

/// Non-negative integers, integral floats (`300.0`) and numeric strings (`"300"`).
fn as_quantity(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn read_string(
    root: &Map<String, Value>,
    field: &str,
    report: &mut ValidationReport,
) -> Option<String> {
    match root.get(field) {
        None | Some(Value::Null) => {
            report.missing(field);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            report.invalid(field, format!("expected a string, got {}", json_kind(other)));
            None
        }
    }
}

/// Calendar date of an ISO-8601 date or date-time, in the timestamp's own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// -------------------------
// Response
// -------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub ok: bool,
    pub id: PlanRunId,
    pub result: ProductionPlan,
    pub validation: ValidationReport,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use bakeryplan_catalog::Ingredient;

    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        // A Wednesday.
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        )
    }

    fn full_request() -> Value {
        json!({
            "inputs": {"flour": 1000, "butter": 500, "sugar": 800, "eggs": 12, "capacity": 40},
            "branch": "Branch B",
            "date": "2024-05-04T09:00:00+07:00",
            "weather": "rain",
            "special_day": true
        })
    }

    #[test]
    fn complete_request_is_clean() {
        let request = PlanRequest::from_value(&full_request(), &clock());
        assert!(request.report.is_clean(), "{:?}", request.report);

        let input = &request.input;
        assert_eq!(input.stock, Stock::new(1000, 500, 800, 12));
        assert_eq!(input.capacity.remaining(), 40);
        assert_eq!(input.context.branch, Branch::B);
        assert_eq!(input.context.weather, Weather::Rain);
        assert!(input.context.special_day);
        assert!(input.context.is_weekend());
    }

    #[test]
    fn empty_request_uses_documented_defaults() {
        let request = PlanRequest::from_bytes(b"", &clock());
        let input = &request.input;
        assert_eq!(input.stock, Stock::default());
        assert_eq!(input.capacity.remaining(), 2_000);
        assert_eq!(input.context.branch, Branch::A);
        assert_eq!(input.context.weather, Weather::Sun);
        assert!(!input.context.special_day);
        assert_eq!(input.context.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let missing: Vec<&str> = request
            .report
            .issues
            .iter()
            .map(|i| {
                assert_eq!(i.issue, IssueKind::Missing);
                i.field.as_str()
            })
            .collect();
        assert_eq!(
            missing,
            vec![
                "inputs.flour",
                "inputs.butter",
                "inputs.sugar",
                "inputs.eggs",
                "inputs.capacity",
                "branch",
                "weather",
                "special_day",
                "date",
            ]
        );
    }

    #[test]
    fn zero_stock_is_kept() {
        let request = PlanRequest::from_value(&json!({"inputs": {"flour": 0}}), &clock());
        assert_eq!(request.input.stock.available(Ingredient::Flour), 0);
        assert!(request.report.issue("inputs.flour").is_none());
    }

    #[test]
    fn bad_numbers_fall_back_with_a_report() {
        let body = json!({
            "inputs": {"flour": -5, "butter": "abc", "sugar": 12.5, "eggs": "24", "capacity": 300.0}
        });
        let request = PlanRequest::from_value(&body, &clock());
        let stock = request.input.stock;
        assert_eq!(stock.available(Ingredient::Flour), Stock::DEFAULT_FLOUR);
        assert_eq!(stock.available(Ingredient::Butter), Stock::DEFAULT_BUTTER);
        assert_eq!(stock.available(Ingredient::Sugar), Stock::DEFAULT_SUGAR);
        assert_eq!(stock.available(Ingredient::Eggs), 24);
        assert_eq!(request.input.capacity.remaining(), 300);

        for field in ["inputs.flour", "inputs.butter", "inputs.sugar"] {
            assert_eq!(request.report.issue(field).unwrap().issue, IssueKind::Invalid);
        }
        assert!(request.report.issue("inputs.eggs").is_none());
    }

    #[test]
    fn unparsable_date_uses_clock() {
        let mut body = full_request();
        body["date"] = json!("next tuesday");
        let request = PlanRequest::from_value(&body, &clock());
        assert_eq!(request.input.context.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(request.report.issue("date").unwrap().issue, IssueKind::Invalid);
    }

    #[test]
    fn unknown_weather_and_branch_are_kept_but_reported() {
        let mut body = full_request();
        body["weather"] = json!("snow");
        body["branch"] = json!("Branch Z");
        let request = PlanRequest::from_value(&body, &clock());
        assert_eq!(request.input.context.weather, Weather::Unrecognized("snow".into()));
        assert_eq!(request.input.context.branch, Branch::Other("Branch Z".into()));
        assert_eq!(request.report.issue("weather").unwrap().issue, IssueKind::Unrecognized);
        assert_eq!(request.report.issue("branch").unwrap().issue, IssueKind::Unrecognized);
    }

    #[test]
    fn wrong_types_are_invalid() {
        let body = json!({"inputs": [1, 2], "special_day": "yes", "weather": 3});
        let request = PlanRequest::from_value(&body, &clock());
        assert_eq!(request.report.issue("inputs").unwrap().issue, IssueKind::Invalid);
        assert_eq!(request.report.issue("special_day").unwrap().issue, IssueKind::Invalid);
        assert_eq!(request.report.issue("weather").unwrap().issue, IssueKind::Invalid);
        assert!(!request.input.context.special_day);
        assert_eq!(request.input.context.weather, Weather::Sun);
    }

    #[test]
    fn garbage_body_is_an_empty_request() {
        let request = PlanRequest::from_bytes(b"{not json", &clock());
        assert_eq!(request.report.issues[0].field, "body");
        assert_eq!(request.input.stock, Stock::default());

        let request = PlanRequest::from_value(&json!([1, 2, 3]), &clock());
        assert_eq!(request.report.issue("body").unwrap().issue, IssueKind::Invalid);
    }

    #[test]
    fn date_formats() {
        let saturday = NaiveDate::from_ymd_opt(2024, 5, 4);
        assert_eq!(parse_date("2024-05-04"), saturday);
        assert_eq!(parse_date("2024-05-04T23:59:59"), saturday);
        assert_eq!(parse_date("2024-05-04T10:15:30.250"), saturday);
        assert_eq!(parse_date("2024-05-04 10:15:30"), saturday);
        assert_eq!(parse_date("2024-05-04T10:15"), saturday);
        assert_eq!(parse_date("2024-05-04T01:00:00Z"), saturday);
        // Local date in the timestamp's own offset, not UTC.
        assert_eq!(parse_date("2024-05-04T01:00:00+07:00"), saturday);
        assert_eq!(parse_date("04/05/2024"), None);
    }
}
