use std::time::Duration;

use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, App};
use deposit_engine::PaymentReconciler;
use dpg_common::Secret;
use wiremock::MockServer;
use zenitsu_tools::{ZenitsuApi, ZenitsuConfig};

use crate::routes::{check_pay, create_qr, health, purchase};

// Gateway settings that point at a wiremock instance instead of the real Zenitsu API.
pub fn gateway_config(server: &MockServer) -> ZenitsuConfig {
    ZenitsuConfig {
        base_url: server.uri(),
        username: Some(Secret::new("merchant".to_string())),
        token: Some(Secret::new("hunter2".to_string())),
        timeout: Duration::from_secs(1),
    }
}

/// Runs one request through a freshly built app wired to the given gateway settings.
pub async fn send_request(config: ZenitsuConfig, req: TestRequest) -> (StatusCode, String) {
    let api = ZenitsuApi::new(config).unwrap();
    let reconciler = PaymentReconciler::new(api);
    let app = App::new()
        .app_data(web::Data::new(reconciler))
        .service(health)
        .service(web::scope("/api").service(create_qr).service(check_pay).service(purchase));
    let service = test::init_service(app).await;
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}
