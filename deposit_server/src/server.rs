use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use deposit_engine::PaymentReconciler;
use zenitsu_tools::ZenitsuApi;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{check_pay, create_qr, health, purchase},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let api =
        ZenitsuApi::new(config.zenitsu_config.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, api)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, api: ZenitsuApi) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let reconciler = PaymentReconciler::new(api.clone());
        let api_scope = web::scope("/api").service(create_qr).service(check_pay).service(purchase);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("dps::access_log"))
            .app_data(web::Data::new(reconciler))
            .service(health)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
