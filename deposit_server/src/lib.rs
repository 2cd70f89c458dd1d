//! # Deposit payment server
//! This module hosts the HTTP surface for the deposit payment gateway. It is responsible for:
//! Accepting QR issuance requests from storefront clients and relaying them to the Zenitsu gateway.
//! Answering payment polls by sweeping the gateway's account statement.
//! Acknowledging fulfilment calls once a deposit has settled.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/createqr`: Issues a payment QR code over a surcharged deposit amount.
//! * `/api/checkpay`: Reports whether a matching payment has landed yet.
//! * `/api/purchase`: Logs and acknowledges a fulfilment call.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
