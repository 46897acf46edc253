use advisory_server::{api::app_router, build_state, config::Config};
use advisory_storage_memory::clients::{DEMO_HOUSEHOLD_ID, DEMO_PROSPECT_ID};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

async fn build_test_router(config: &Config) -> Router {
    let state = build_state(config).await.unwrap();
    app_router(state, config).unwrap()
}

async fn seeded_router() -> Router {
    build_test_router(&Config::default()).await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn healthz_works() {
    let app = seeded_router().await;
    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn metrics_for_unknown_client_is_not_found() {
    let app = seeded_router().await;
    let (status, body) = send(&app, Method::POST, "/api/v1/clients/nobody/metrics", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn metrics_for_client_without_record_is_not_found() {
    let app = seeded_router().await;
    let uri = format!("/api/v1/clients/{}/metrics", DEMO_PROSPECT_ID);
    let (status, _) = send(&app, Method::POST, &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_for_seeded_client_include_advisories() {
    let app = seeded_router().await;
    let uri = format!("/api/v1/clients/{}/metrics", DEMO_HOUSEHOLD_ID);
    let (status, body) = send(&app, Method::POST, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["derivedMetrics"]["totalIncome"].as_f64(), Some(11000.0));
    assert_eq!(body["derivedMetrics"]["totalExpenses"].as_f64(), Some(6100.0));
    let kinds: Vec<&str> = body["advisories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["HIGH_DEBT_TO_INCOME"]);
}

#[tokio::test]
async fn client_lifecycle() {
    let app = build_test_router(&Config {
        seed_demo_data: false,
        ..Config::default()
    })
    .await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({ "name": "Avery Chen", "email": "avery@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "active");

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/clients/{}/financials", id),
        Some(json!({ "salary": "4000", "housing": 1000, "cashSavings": "abc", "hasWill": "true" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, analysis) = send(
        &app,
        Method::POST,
        &format!("/api/v1/clients/{}/metrics", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analysis["derivedMetrics"]["netIncome"].as_f64(), Some(3000.0));
    assert_eq!(analysis["advisories"][0]["kind"], "LOW_EMERGENCY_FUND");

    let (status, listed) = send(&app, Method::GET, "/api/v1/clients?search=AVERY", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/api/v1/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_client_is_rejected() {
    let app = seeded_router().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({ "name": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn duplicate_client_id_conflicts() {
    let app = seeded_router().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({ "id": DEMO_HOUSEHOLD_ID, "name": "Someone Else" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_status_filter_is_bad_request() {
    let app = seeded_router().await;
    let (status, _) = send(&app, Method::GET, "/api/v1/clients?status=archived", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, prospects) =
        send(&app, Method::GET, "/api/v1/clients?status=Prospect", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prospects.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn preview_metrics_for_empty_record() {
    let app = seeded_router().await;
    let (status, body) = send(&app, Method::POST, "/api/v1/metrics/preview", Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advisories"].as_array().unwrap().len(), 1);
    assert_eq!(body["advisories"][0]["kind"], "NO_WILL");
}

#[tokio::test]
async fn report_csv_is_served_as_text() {
    let app = seeded_router().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/clients/{}/report.csv", DEMO_HOUSEHOLD_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/csv"));
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("section,item,amount"));
}

#[tokio::test]
async fn data_file_persists_between_states() {
    let tmp = tempdir().unwrap();
    let config = Config {
        data_file: Some(tmp.path().join("clients.json")),
        ..Config::default()
    };

    let app = build_test_router(&config).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({ "id": "c-42", "name": "Rowan Ilves" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/clients/c-42/financials",
        Some(json!({ "salary": "12345678901234567.89", "housing": 0.1, "hasWill": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    drop(app);

    let reloaded = build_test_router(&config).await;
    let (status, client) = send(&reloaded, Method::GET, "/api/v1/clients/c-42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(client["name"], "Rowan Ilves");
    assert_eq!(client["financialData"]["salary"], "12345678901234567.89");
    assert_eq!(client["financialData"]["housing"], "0.1");

    let (_, all) = send(&reloaded, Method::GET, "/api/v1/clients", None).await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn report_csv_file_name_is_sanitized() {
    let app = build_test_router(&Config {
        seed_demo_data: false,
        ..Config::default()
    })
    .await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({
            "id": "q\"a\u{0007}",
            "name": "Quinn Abara",
            "financialData": { "salary": 1000 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/clients/q%22a%07/report.csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"report-q_a_.csv\""
    );
}
