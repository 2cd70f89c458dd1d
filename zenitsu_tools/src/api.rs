use std::sync::Arc;

use bytes::Bytes;
use dpg_common::Rupiah;
use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ZenitsuConfig,
    data_objects::{HistoryResults, QrCodeResults, ZenitsuEnvelope},
    IssuedQr,
    TransactionRecord,
    ZenitsuApiError,
};

#[derive(Clone)]
pub struct ZenitsuApi {
    config: ZenitsuConfig,
    client: Arc<Client>,
}

impl ZenitsuApi {
    pub fn new(config: ZenitsuConfig) -> Result<Self, ZenitsuApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ZenitsuApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn post_query<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ZenitsuApiError> {
        let url = self.url(path);
        trace!("Sending gateway query: {url}");
        let response =
            self.client.post(url).json(body).send().await.map_err(|e| ZenitsuApiError::Transport(e.to_string()))?;
        if response.status().is_success() {
            trace!("Gateway query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| ZenitsuApiError::JsonError(e.to_string()))
        } else {
            let status = i64::from(response.status().as_u16());
            let message = response.text().await.map_err(|e| ZenitsuApiError::Transport(e.to_string()))?;
            Err(ZenitsuApiError::Rejected { status, message })
        }
    }

    /// Asks the gateway for a payment QR code over `amount` rupiah, tagged with `deposit_id`.
    ///
    /// The amount crosses the wire as a plain decimal string without separators. The returned
    /// `IssuedQr` echoes the id and amount from the caller, so they are consistent even if the
    /// gateway response omits them.
    pub async fn create_qr(&self, deposit_id: &str, amount: Rupiah) -> Result<IssuedQr, ZenitsuApiError> {
        #[derive(Serialize)]
        struct CreateQrRequest<'a> {
            username: &'a str,
            token: &'a str,
            idtrx: &'a str,
            amount: String,
        }
        let (username, token) = self.config.credentials()?;
        let body = CreateQrRequest { username, token, idtrx: deposit_id, amount: amount.value().to_string() };
        debug!("Requesting QR for deposit {deposit_id} ({amount} rupiah)");
        let envelope = self.post_query::<ZenitsuEnvelope<QrCodeResults>, _>("/api/orkut/createqr", &body).await?;
        let results = envelope.into_results()?;
        info!("Issued QR for deposit {deposit_id}");
        Ok(IssuedQr { deposit_id: deposit_id.to_string(), amount, qr_url: results.qr, expires_at: results.expired })
    }

    /// Fetches the most recent `count` account mutations, newest first, as the gateway reports
    /// them. Records are returned unfiltered; matching against expected payments happens upstream.
    pub async fn transaction_history(&self, count: u32) -> Result<Vec<TransactionRecord>, ZenitsuApiError> {
        #[derive(Serialize)]
        struct HistoryRequest<'a> {
            username: &'a str,
            token: &'a str,
            count: u32,
        }
        let (username, token) = self.config.credentials()?;
        let body = HistoryRequest { username, token, count };
        debug!("Fetching the last {count} account mutations");
        let envelope = self.post_query::<ZenitsuEnvelope<HistoryResults>, _>("/api/orkut/checkpay", &body).await?;
        let histories = envelope.into_results()?.histories;
        debug!("Fetched {} account mutations", histories.len());
        Ok(histories)
    }

    /// Downloads the QR image behind a previously issued `qr_url`.
    pub async fn download_qr(&self, qr_url: &str) -> Result<Bytes, ZenitsuApiError> {
        debug!("Downloading QR image from {qr_url}");
        let response = self.client.get(qr_url).send().await.map_err(|e| ZenitsuApiError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            let status = i64::from(response.status().as_u16());
            let message = response.text().await.map_err(|e| ZenitsuApiError::Transport(e.to_string()))?;
            return Err(ZenitsuApiError::Rejected { status, message });
        }
        response.bytes().await.map_err(|e| ZenitsuApiError::Transport(e.to_string()))
    }
}
