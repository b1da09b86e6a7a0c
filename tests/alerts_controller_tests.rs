use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use pricehawk::{AppState, config, routes, services::scraper::ScraperClient, store::Store};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_state() -> AppState {
    let mut settings = config::load();
    settings.data_file = std::env::temp_dir()
        .join(format!("pricehawk-test-{}.json", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    settings.scrape_delay_min_ms = 0;
    settings.scrape_delay_max_ms = 0;

    let store = Store::open(&settings.data_file);
    let scraper = ScraperClient::new(0, 0);
    let (events_tx, _events_rx) = tokio::sync::broadcast::channel::<String>(16);

    AppState {
        store,
        settings,
        scraper,
        events_tx,
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_product(app: &Router, name: &str, your: f64, competitor: f64, threshold: Value) -> Value {
    let body = json!({
        "name": name,
        "yourPrice": your,
        "competitorPrice": competitor,
        "alertThreshold": threshold,
    });

    let res = app
        .clone()
        .oneshot(json_request("POST", "/products", body))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    response_json(res).await
}

async fn run_check(app: &Router) -> Value {
    let res = app
        .clone()
        .oneshot(empty_request("POST", "/alerts/check"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    response_json(res).await
}

#[tokio::test]
async fn check_raises_once_with_diff_in_message() {
    let state = test_state();
    let app = routes::app(state);

    let product = create_product(&app, "Widget", 100.0, 80.0, json!(15.0)).await;

    let created = run_check(&app).await;
    let created = created.as_array().unwrap();
    assert_eq!(created.len(), 1);

    let alert = &created[0];
    assert_eq!(alert["type"], "price_alert");
    assert_eq!(alert["productId"], product["id"]);
    assert_eq!(alert["productName"], "Widget");
    assert_eq!(alert["yourPrice"], json!(100.0));
    assert_eq!(alert["competitorPrice"], json!(80.0));
    assert_eq!(alert["read"], json!(false));
    assert_eq!(alert["triggered"], json!(false));
    assert_eq!(alert["resolved"], json!(false));
    assert!(alert["message"].as_str().unwrap().contains("20.00"));

    // idempotent until something changes
    let again = run_check(&app).await;
    assert_eq!(again.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn resolving_the_alert_rearms_detection() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "Widget", 100.0, 80.0, json!(15.0)).await;

    let created = run_check(&app).await;
    let alert_id = created[0]["id"].as_str().unwrap().to_string();

    assert_eq!(run_check(&app).await.as_array().unwrap().len(), 0);

    let res = app
        .clone()
        .oneshot(empty_request("POST", &format!("/alerts/{alert_id}/resolve")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let resolved = response_json(res).await;
    assert_eq!(resolved["resolved"], json!(true));

    let rearmed = run_check(&app).await;
    assert_eq!(rearmed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn diff_below_threshold_raises_nothing() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "Widget", 100.0, 90.0, json!(15.0)).await;

    assert_eq!(run_check(&app).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn diff_equal_to_threshold_raises() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "Widget", 100.0, 85.0, json!(15.0)).await;

    assert_eq!(run_check(&app).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn zero_or_missing_threshold_disables_alerting() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "Zeroed", 100.0, 10.0, json!(0.0)).await;

    let body = json!({ "name": "Bare", "yourPrice": 100.0, "competitorPrice": 10.0 });
    let res = app
        .clone()
        .oneshot(json_request("POST", "/products", body))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    assert_eq!(run_check(&app).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn gap_in_either_direction_raises() {
    let state = test_state();
    let app = routes::app(state);

    // competitor is more expensive; |your - competitor| still crosses
    create_product(&app, "Undercut", 80.0, 100.0, json!(15.0)).await;

    let created = run_check(&app).await;
    assert_eq!(created.as_array().unwrap().len(), 1);
    assert!(created[0]["message"].as_str().unwrap().contains("20.00"));
}

#[tokio::test]
async fn mark_read_flips_only_the_read_flag() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "Widget", 100.0, 80.0, json!(15.0)).await;
    let created = run_check(&app).await;
    let alert_id = created[0]["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(empty_request("POST", &format!("/alerts/{alert_id}/read")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let alert = response_json(res).await;
    assert_eq!(alert["read"], json!(true));
    assert_eq!(alert["resolved"], json!(false));
}

#[tokio::test]
async fn get_by_id_returns_the_alert() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "Widget", 100.0, 80.0, json!(15.0)).await;
    let created = run_check(&app).await;
    let alert_id = created[0]["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(empty_request("GET", &format!("/alerts/{alert_id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let alert = response_json(res).await;
    assert_eq!(alert["id"].as_str().unwrap(), alert_id);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/alerts/no-such-id"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mark_read_unknown_id_returns_404() {
    let state = test_state();
    let app = routes::app(state);

    let res = app
        .clone()
        .oneshot(empty_request("POST", "/alerts/no-such-id/read"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_alert() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "Widget", 100.0, 80.0, json!(15.0)).await;
    let created = run_check(&app).await;
    let alert_id = created[0]["id"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/alerts/{alert_id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/alerts"))
        .await
        .unwrap();
    let alerts = response_json(res).await;
    assert_eq!(alerts.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn check_covers_every_qualifying_product_in_one_sweep() {
    let state = test_state();
    let app = routes::app(state);

    create_product(&app, "A", 100.0, 80.0, json!(15.0)).await;
    create_product(&app, "B", 50.0, 10.0, json!(20.0)).await;
    create_product(&app, "C", 50.0, 49.0, json!(20.0)).await;

    let created = run_check(&app).await;
    assert_eq!(created.as_array().unwrap().len(), 2);
}
