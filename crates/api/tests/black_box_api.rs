use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde_json::{json, Value};

use bakeryplan_api::app::{build_app, services::AppServices};
use bakeryplan_api::clock::FixedClock;
use bakeryplan_catalog::Catalog;
use bakeryplan_planning::PlanningConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, pinned to a Wednesday and bound to an ephemeral port.
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        );
        let services =
            AppServices::new(PlanningConfig::default(), Catalog::bakery(), Arc::new(clock))
                .expect("default config is valid");
        let app = build_app(Arc::new(services));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn plan(&self, body: impl Into<reqwest::Body>) -> (StatusCode, Value) {
        let res = reqwest::Client::new()
            .post(format!("{}/plan", self.base_url))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn issue_fields(body: &Value) -> Vec<String> {
    body["validation"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["field"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_request_plans_with_defaults() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.plan("{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["id"].as_str().is_some());

    let result = &body["result"];
    assert_eq!(result["forecast"]["Croissant"], 40);
    assert_eq!(result["forecast"]["Butter Cookie"], 99);
    assert_eq!(result["remainingCapacity"], 1_105);
    assert_eq!(
        result["remainingStock"],
        json!({"flour": 8_100, "butter": 3_075, "sugar": 29_550, "eggs": 0})
    );

    let plan = result["plan"].as_array().unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0]["product"], "Pound Cake");
    assert_eq!(plan[0]["quantity"], 300);
    assert_eq!(plan[0]["expected_leftover"], 280);
    assert_eq!(plan[0]["promotion_suggestion"], "Suggested promotion: 20% discount");
    assert_eq!(plan[1]["product"], "Butter Cookie");
    assert_eq!(plan[1]["quantity"], 595);

    let fields = issue_fields(&body);
    assert!(fields.contains(&"inputs.flour".to_string()));
    assert!(fields.contains(&"date".to_string()));
}

#[tokio::test]
async fn no_flour_gives_an_empty_plan() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.plan(json!({"inputs": {"flour": 0}}).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["plan"], json!([]));
    assert_eq!(body["result"]["remainingCapacity"], 2_000);
    assert_eq!(body["result"]["remainingStock"]["flour"], 0);
    // Forecast is independent of stock.
    assert_eq!(body["result"]["forecast"]["Croissant"], 40);
}

#[tokio::test]
async fn weekend_date_lifts_forecast() {
    let srv = TestServer::spawn().await;
    let (_, body) = srv
        .plan(
            json!({"date": "2024-05-04T09:30:00", "weather": "sun", "branch": "Branch A"})
                .to_string(),
        )
        .await;
    assert_eq!(body["result"]["forecast"]["Croissant"], 48);
}

#[tokio::test]
async fn small_capacity_caps_the_plan() {
    let srv = TestServer::spawn().await;
    let (_, body) = srv.plan(json!({"inputs": {"capacity": 5}}).to_string()).await;

    let plan = body["result"]["plan"].as_array().unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0]["key"], "pound_cake");
    assert_eq!(plan[0]["quantity"], 5);
    assert_eq!(body["result"]["remainingCapacity"], 0);
}

#[tokio::test]
async fn garbage_body_is_planned_and_reported() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.plan("this is not json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(issue_fields(&body)[0], "body");
    assert_eq!(body["result"]["forecast"]["Croissant"], 40);
}

#[tokio::test]
async fn catalog_lists_every_product() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/catalog", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let products: Value = res.json().await.unwrap();
    assert_eq!(products.as_array().unwrap().len(), 8);
    assert_eq!(products[0]["key"], "croissant");

    let res = client
        .get(format!("{}/catalog/brownie", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let brownie: Value = res.json().await.unwrap();
    assert_eq!(brownie["recipe"]["eggs"], 1);

    let res = client
        .get(format!("{}/catalog/eclair", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: Value = res.json().await.unwrap();
    assert_eq!(err["error"], "not_found");
}
