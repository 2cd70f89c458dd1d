//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Gateway trouble is not an HTTP fault: `createqr` and `checkpay` always answer `200` with an
//! envelope the polling client can branch on. Only malformed requests surface as 4xx responses,
//! via [`ServerError`].
use actix_web::{get, post, web, HttpResponse, Responder};
use deposit_engine::{PaymentReconciler, PaymentStatus};
use log::*;
use zenitsu_tools::ZenitsuApi;

use crate::{
    data_objects::{DepositRequest, JsonResponse, PaymentStatusResponse, PurchaseRequest, QrIssueResponse, SettledPaymentData},
    errors::ServerError,
};

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Create QR  ----------------------------------------------------
/// Route handler for the createqr endpoint
///
/// Takes the nominal deposit amount, applies the disambiguating surcharge, and asks the gateway
/// for a QR code. The response data echoes the surcharged amount; it is the amount the customer
/// must transfer and the amount to poll `checkpay` with.
#[post("/createqr")]
pub async fn create_qr(
    body: web::Json<DepositRequest>,
    reconciler: web::Data<PaymentReconciler<ZenitsuApi>>,
) -> Result<HttpResponse, ServerError> {
    let amount = body.into_inner().amount;
    debug!("💻️ POST createqr for {amount} rupiah");
    if amount.value() <= 0 {
        return Err(ServerError::InvalidRequestBody(format!("Deposit amounts must be positive, not {amount}")));
    }
    let response = match reconciler.issue_deposit_qr(amount).await {
        Ok(deposit) => HttpResponse::Ok().json(QrIssueResponse::from(deposit)),
        Err(e) => {
            info!("💻️ Could not issue a QR code for {amount} rupiah. {e}");
            HttpResponse::Ok().json(JsonResponse::failure(e))
        },
    };
    Ok(response)
}

//----------------------------------------------   Check payment  ----------------------------------------------------
/// Route handler for the checkpay endpoint
///
/// Sweeps the latest account mutations for a recent incoming credit of exactly the given amount.
/// Clients poll this endpoint until it answers `paid`, or give up.
#[post("/checkpay")]
pub async fn check_pay(
    body: web::Json<DepositRequest>,
    reconciler: web::Data<PaymentReconciler<ZenitsuApi>>,
) -> Result<HttpResponse, ServerError> {
    let amount = body.into_inner().amount;
    debug!("💻️ POST checkpay for {amount} rupiah");
    if amount.value() <= 0 {
        return Err(ServerError::InvalidRequestBody(format!("Deposit amounts must be positive, not {amount}")));
    }
    let response = match reconciler.check_payment(amount).await {
        Ok(PaymentStatus::Paid { amount, paid_at }) => {
            PaymentStatusResponse::Paid { data: SettledPaymentData { amount, paid_at } }
        },
        Ok(PaymentStatus::Pending) => PaymentStatusResponse::Pending,
        Err(e) => {
            info!("💻️ Could not sweep the statement for {amount} rupiah. {e}");
            PaymentStatusResponse::Error { message: e.to_string() }
        },
    };
    Ok(HttpResponse::Ok().json(response))
}

//----------------------------------------------   Purchase  ----------------------------------------------------
/// Route handler for the purchase endpoint
///
/// Fulfilment happens outside this service, so the handler only acknowledges the call and leaves
/// a trail in the logs for the operator.
#[post("/purchase")]
pub async fn purchase(body: web::Json<PurchaseRequest>) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    info!("🧾️ Purchase against deposit {} over {} rupiah acknowledged", request.deposit_id, request.amount);
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!(
        "Purchase against deposit {} was recorded",
        request.deposit_id
    ))))
}
