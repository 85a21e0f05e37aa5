use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use tracing_test::traced_test;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::Config;
use crate::global::Global;
use crate::http::app;

fn global(server: &MockServer) -> Arc<Global> {
    let mut config = Config::default();
    config.upstream.player_api = format!("{}/player", server.uri());
    config.upstream.icon_api = format!("{}/icon", server.uri());
    config.upstream.player_timeout_secs = 2;
    config.upstream.icon_timeout_secs = 1;
    Global::init(config).unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
#[traced_test]
async fn form_page_lists_regions() {
    let server = MockServer::start().await;

    let resp = app(global(&server)).oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    let html = body_string(resp).await;
    assert!(html.contains(r#"<form method="post" action="/""#));
    assert!(html.contains(r#"<option value="latam">Latin America</option>"#));
}

#[tokio::test]
#[traced_test]
async fn submit_renders_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("uid", "123456789"))
        .and(query_param("region", "ind"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AccountInfo": { "AccountName": "NepDevs", "AccountLevel": 68, "BrMaxRank": 500 },
            "captainBasicInfo": { "EquippedWeapon": [907104822, 907104822] }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(query_param("item_id", "907104822"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resp = app(global(&server))
        .oneshot(form_post("uid=123456789&region=ind"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("NepDevs"));
    assert!(html.contains("Diamond I"));
    assert!(html.contains(r#"<option value="ind" selected>India</option>"#));
    assert_eq!(html.matches("/icon?item_id=907104822").count(), 2);
}

#[tokio::test]
#[traced_test]
async fn submit_shows_fetch_failed_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let resp = app(global(&server))
        .oneshot(form_post("uid=1&region=sg"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Failed to fetch player data. Please check the UID and try again."));
}

#[tokio::test]
#[traced_test]
async fn submit_shows_invalid_response_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let html = body_string(
        app(global(&server))
            .oneshot(form_post("uid=1&region=sg"))
            .await
            .unwrap(),
    )
    .await;

    assert!(html.contains("Invalid response from API"));
}

#[tokio::test]
#[traced_test]
async fn submit_without_uid_skips_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let html = body_string(
        app(global(&server))
            .oneshot(form_post("uid=++&region=sg"))
            .await
            .unwrap(),
    )
    .await;

    assert!(html.contains("Please enter a UID"));
}

#[tokio::test]
#[traced_test]
async fn api_player_returns_raw_body() {
    let server = MockServer::start().await;
    let body = json!({ "AccountInfo": { "AccountName": "raw" }, "extra": [1, 2, 3] });

    Mock::given(method("GET"))
        .and(query_param("uid", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let resp = app(global(&server))
        .oneshot(get("/api/player?uid=42&region=us"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json, body);
}

#[tokio::test]
#[traced_test]
async fn api_player_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = app(global(&server));

    let resp = app.clone().oneshot(get("/api/player?region=us")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["error_code"], 4001);

    let resp = app.oneshot(get("/api/player?uid=1&region=us")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["error_code"], 5001);
}

#[tokio::test]
#[traced_test]
async fn api_info_and_regions() {
    let server = MockServer::start().await;
    let app = app(global(&server));

    let resp = app.clone().oneshot(get("/api")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));

    let resp = app.oneshot(get("/api/regions")).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 15);
    assert_eq!(json[0], json!({ "code": "bd", "name": "Bangladesh" }));
}

#[tokio::test]
#[traced_test]
async fn unknown_route_is_json_404() {
    let server = MockServer::start().await;

    let resp = app(global(&server)).oneshot(get("/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["error_code"], 4040);
}

#[tokio::test]
#[traced_test]
async fn responses_are_compressed_when_accepted() {
    let server = MockServer::start().await;

    let req = Request::builder()
        .uri("/api/regions")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap();
    let resp = app(global(&server)).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_ENCODING], "gzip");
    assert!(resp.headers().contains_key("x-request-id"));
    assert!(logs_contain("response"));
}
