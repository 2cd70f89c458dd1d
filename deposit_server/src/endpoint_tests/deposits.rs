use actix_web::{http::StatusCode, test::TestRequest};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock,
    MockServer,
    ResponseTemplate,
};

use super::helpers::{gateway_config, send_request};

#[actix_web::test]
async fn health_check_works() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    let (status, body) = send_request(gateway_config(&server), TestRequest::get().uri("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn create_qr_round_trip() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orkut/createqr"))
        .and(body_partial_json(json!({"username": "merchant", "token": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "QR created",
            "results": {"qr": "https://img.example.com/qr/abc.png", "expired": "2024-05-01 18:13:21"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = TestRequest::post().uri("/api/createqr").set_json(json!({"amount": 50_000}));
    let (status, body) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert!(data["deposit_id"].as_str().unwrap().starts_with("DEPO-"));
    let amount = data["amount"].as_i64().unwrap();
    let offset = data["offset"].as_i64().unwrap();
    assert!((0..=10).contains(&offset));
    assert_eq!(amount, 50_000 + offset);
    assert_eq!(data["qr_url"], "https://img.example.com/qr/abc.png");
    assert_eq!(data["expires_at"], "2024-05-01 18:13:21");
}

#[actix_web::test]
async fn create_qr_rejects_non_positive_amounts() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let req = TestRequest::post().uri("/api/createqr").set_json(json!({"amount": 0}));
    let (status, body) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("positive"));
}

#[actix_web::test]
async fn create_qr_folds_gateway_rejections_into_the_envelope() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orkut/createqr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 401,
            "message": "Invalid token"
        })))
        .mount(&server)
        .await;

    let req = TestRequest::post().uri("/api/createqr").set_json(json!({"amount": 50_000}));
    let (status, body) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("Invalid token"));
}

#[actix_web::test]
async fn check_pay_reports_a_settled_deposit() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    let paid_at = (Utc::now() - Duration::seconds(30)).format("%Y-%m-%d %H:%M:%S").to_string();
    Mock::given(method("POST"))
        .and(path("/api/orkut/checkpay"))
        .and(body_partial_json(json!({"count": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Success",
            "results": {"histories": [{"date": paid_at, "type": "IN", "kredit": "50.007"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = TestRequest::post().uri("/api/checkpay").set_json(json!({"amount": 50_007}));
    let (status, body) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "paid");
    assert_eq!(body["data"]["amount"], 50_007);
}

#[actix_web::test]
async fn check_pay_reports_pending_when_nothing_matches() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    let stale = (Utc::now() - Duration::minutes(10)).format("%Y-%m-%d %H:%M:%S").to_string();
    Mock::given(method("POST"))
        .and(path("/api/orkut/checkpay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "message": "Success",
            "results": {"histories": [
                {"date": stale, "type": "IN", "kredit": "50.007"},
                {"date": Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(), "type": "OUT", "kredit": "50.007"}
            ]}
        })))
        .mount(&server)
        .await;

    let req = TestRequest::post().uri("/api/checkpay").set_json(json!({"amount": 50_007}));
    let (status, body) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({"status": "pending"}));
}

#[actix_web::test]
async fn check_pay_reports_gateway_trouble_as_data() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orkut/checkpay"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let req = TestRequest::post().uri("/api/checkpay").set_json(json!({"amount": 50_007}));
    let (status, body) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("503"));
}

#[actix_web::test]
async fn missing_credentials_degrade_into_error_envelopes() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
    let mut config = gateway_config(&server);
    config.username = None;
    config.token = None;

    let req = TestRequest::post().uri("/api/createqr").set_json(json!({"amount": 50_000}));
    let (status, body) = send_request(config, req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("DPG_ZENITSU_USERNAME"));
}

#[actix_web::test]
async fn purchase_always_acknowledges() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    let req = TestRequest::post()
        .uri("/api/purchase")
        .set_json(json!({"deposit_id": "DEPO-8F3K2M9QX1", "amount": 50_007}));
    let (status, body) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("DEPO-8F3K2M9QX1"));
}

#[actix_web::test]
async fn malformed_bodies_are_bad_requests() {
    env_logger::try_init().ok();
    let server = MockServer::start().await;
    let req = TestRequest::post().uri("/api/createqr").set_json(json!({"amount": "fifty thousand"}));
    let (status, _) = send_request(gateway_config(&server), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
