//! Integration Tests for the Calendar API
//!
//! Tests full request/response cycle for each endpoint, including an
//! end-to-end scrape against a stub upstream served on a loopback port.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use chrono::{Duration, NaiveDate};
use commitscrape::{api::create_router, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_app(config: Config) -> Router {
    create_router(AppState::from_config(config))
}

/// Configuration pointing at an upstream that refuses connections.
fn offline_config() -> Config {
    Config {
        source_url: "http://127.0.0.1:9".to_string(),
        allowed_users: "|a|b|".to_string(),
        ..Config::default()
    }
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_response(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let json = body_to_json(response.into_body()).await;
    (status, json)
}

/// Serves `document` for every `/users/:user/contributions` request on a
/// loopback port; returns the base URL.
async fn spawn_upstream(document: String) -> String {
    let app = Router::new().route(
        "/users/:user/contributions",
        get(move || {
            let document = document.clone();
            async move { document }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A full-year upstream document: 371 day cells (53 weeks), all empty.
fn empty_year_document() -> String {
    let start = NaiveDate::from_ymd_opt(2021, 1, 3).unwrap();
    let rects: String = (0..371)
        .map(|i| {
            let date = (start + Duration::days(i)).format("%Y-%m-%d");
            format!(
                "<rect data-level=\"0\" data-count=\"0\" data-date=\"{}\"></rect>",
                date
            )
        })
        .collect();
    format!(
        "<html><body><div class=\"js-calendar-graph\"><svg>{}</svg></div></body></html>",
        rects
    )
}

fn column_count(html: &str) -> usize {
    html.matches("commitscrape-col\"").count()
}

// == Parameter Validation Tests ==

#[tokio::test]
async fn test_columns_zero_is_rejected() {
    let (status, json) = get_response(create_app(offline_config()), "/?columns=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["err"].as_str().unwrap(),
        "columns must be a number between 0 and 52"
    );
}

#[tokio::test]
async fn test_columns_above_bound_is_rejected() {
    let (status, json) = get_response(create_app(offline_config()), "/?columns=53").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["err"].as_str().unwrap().contains("between 0 and 52"));
}

#[tokio::test]
async fn test_columns_non_numeric_is_rejected() {
    let (status, _) = get_response(create_app(offline_config()), "/?columns=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unlisted_user_is_rejected() {
    let (status, json) =
        get_response(create_app(offline_config()), "/?user=unlisted").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["err"].as_str().unwrap(), "unauthorized user");
}

#[tokio::test]
async fn test_validation_happens_before_fetch() {
    // Both violations together still come back as the columns error,
    // immediately, without touching the (unreachable) upstream
    let (status, _) =
        get_response(create_app(offline_config()), "/?columns=99&user=unlisted").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Fetch Failure Tests ==

#[tokio::test]
async fn test_unreachable_upstream_yields_empty_html() {
    let (status, json) = get_response(create_app(offline_config()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["html"].as_str().unwrap(), "");
}

#[tokio::test]
async fn test_upstream_404_yields_empty_html() {
    // The stub serves contributions only; the default user path exists but
    // a route miss on a different path shape gives a non-200
    let base = spawn_upstream("irrelevant".to_string()).await;
    let config = Config {
        source_url: format!("{}/missing", base),
        ..Config::default()
    };

    let (status, json) = get_response(create_app(config), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["html"].as_str().unwrap(), "");
}

#[tokio::test]
async fn test_malformed_upstream_is_server_error() {
    let base = spawn_upstream("<html><body>no calendar here</body></html>".to_string()).await;
    let config = Config {
        source_url: base,
        ..Config::default()
    };

    let (status, json) = get_response(create_app(config), "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["err"].as_str().unwrap().contains("calendar markup"));
}

// == End-to-End Scrape Tests ==

#[tokio::test]
async fn test_end_to_end_empty_year() {
    let base = spawn_upstream(empty_year_document()).await;
    let config = Config {
        source_url: base,
        expire: 300,
        ..Config::default()
    };
    let app = create_app(config);

    // Full scrape: 371 cells become 53 columns
    let (status, json) = get_response(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = json["html"].as_str().unwrap();
    assert_eq!(column_count(html), 53);
    assert!(html.contains("No contributions on Jan 03 2021"));
    assert!(html.contains("No contributions on Jan 08 2022"));
    assert!(html.contains("<style>"));

    // Trimmed request is served from the cached untrimmed copy
    let (status, json) = get_response(app, "/?columns=5").await;
    assert_eq!(status, StatusCode::OK);

    let html = json["html"].as_str().unwrap();
    assert_eq!(column_count(html), 5);
    // Only the trailing five weeks survive
    assert!(!html.contains("data-date=\"2021-01-03\""));
    assert!(html.contains("data-date=\"2022-01-08\""));
    assert!(html.contains("No contributions on"));
}

#[tokio::test]
async fn test_trimming_is_never_persisted() {
    let base = spawn_upstream(empty_year_document()).await;
    let config = Config {
        source_url: base,
        ..Config::default()
    };
    let app = create_app(config);

    // First request trims the fresh scrape
    let (_, json) = get_response(app.clone(), "/?columns=3").await;
    assert_eq!(column_count(json["html"].as_str().unwrap()), 3);

    // The cached copy is still the full grid
    let (_, json) = get_response(app.clone(), "/").await;
    assert_eq!(column_count(json["html"].as_str().unwrap()), 53);

    // And a different trim works against it
    let (_, json) = get_response(app, "/?columns=10").await;
    assert_eq!(column_count(json["html"].as_str().unwrap()), 10);
}

#[tokio::test]
async fn test_allowed_user_is_scraped_separately() {
    let base = spawn_upstream(empty_year_document()).await;
    let config = Config {
        source_url: base,
        allowed_users: "|a|b|".to_string(),
        ..Config::default()
    };
    let app = create_app(config);

    let (status, json) = get_response(app, "/?user=a&columns=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(column_count(json["html"].as_str().unwrap()), 2);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_response(create_app(offline_config()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
