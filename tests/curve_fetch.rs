//! Curve fetch, blocking-error retry, and historical-date tests against a
//! mock backend.

use chrono::NaiveDate;
use curvetrader_sdk::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn curve_body(date: &str) -> serde_json::Value {
    json!({
        "date": date,
        "chart_data": [
            { "term": "1m", "Yield": 5.4 },
            { "term": "1Y", "Yield": 5.1 },
            { "term": "10Y", "Yield": 4.3 }
        ]
    })
}

#[tokio::test]
async fn fetch_replaces_stored_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(curve_body("2025-09-18T00:00:00")))
        .mount(&server)
        .await;

    let client = TreasuryClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();

    assert!(client.curve().latest().await.is_none());
    let snapshot = client.curve().fetch().await.unwrap();
    assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2025, 9, 18).unwrap());
    assert_eq!(snapshot.points.len(), 3);

    let stored = client.curve().latest().await.unwrap();
    assert_eq!(stored, snapshot);
}

#[tokio::test]
async fn failed_fetch_blocks_workflow_until_retry_succeeds() {
    let server = MockServer::start().await;
    // First attempt fails, the retry succeeds.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(curve_body("2025-09-18")))
        .mount(&server)
        .await;

    let client = TreasuryClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();
    let mut workflow = OrderWorkflow::new();

    let err = client.curve().fetch().await.unwrap_err();
    workflow.curve_unavailable(&err);
    assert!(matches!(workflow.state(), WorkflowState::CurveError { .. }));

    // A failed fetch leaves no snapshot behind.
    assert!(client.curve().latest().await.is_none());

    workflow.retry_curve(&client).await;
    assert_eq!(*workflow.state(), WorkflowState::Idle);
    assert!(client.curve().latest().await.is_some());
}

#[tokio::test]
async fn retry_failure_stays_blocked() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("still down"))
        .mount(&server)
        .await;

    let client = TreasuryClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();
    let mut workflow = OrderWorkflow::new();

    let err = client.curve().fetch().await.unwrap_err();
    workflow.curve_unavailable(&err);
    workflow.retry_curve(&client).await;
    assert!(matches!(workflow.state(), WorkflowState::CurveError { .. }));
}

#[tokio::test]
async fn historical_dates_and_by_date_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/treasury/dates/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dates": ["2025-09-18T00:00:00", "2025-09-17T00:00:00"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/treasury/2025-09-17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(curve_body("2025-09-17T00:00:00")))
        .mount(&server)
        .await;

    let client = TreasuryClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();

    let dates = client.curve().available_dates().await.unwrap();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2025, 9, 18).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 17).unwrap()
        ]
    );

    let day = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap();
    let snapshot = client.curve().for_date(day).await.unwrap();
    assert_eq!(snapshot.date, day);
    // Historical lookups never touch the stored "today" snapshot.
    assert!(client.curve().latest().await.is_none());
}

#[tokio::test]
async fn malformed_success_body_is_a_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = TreasuryClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();
    match client.curve().fetch().await {
        Err(FetchError::Payload(_)) => {}
        other => panic!("expected payload error, got {:?}", other),
    }
    assert!(client.curve().latest().await.is_none());
}

#[tokio::test]
async fn unknown_date_surfaces_as_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/treasury/2024-12-31"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "No treasury data found for date 2024-12-31"
        })))
        .mount(&server)
        .await;

    let client = TreasuryClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    match client.curve().for_date(day).await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected 404 status error, got {:?}", other),
    }
}
