//! Low-level HTTP client — `CurveHttp`.
//!
//! One method per API endpoint. Returns wire types; conversion to domain
//! types happens in the sub-clients. Non-success responses keep the raw body
//! so the order layer can interpret rejection payloads.

use crate::domain::curve::wire::{CurveDatesResponse, CurveResponse};
use crate::domain::order::wire::{OrderCreateBody, OrderWire};
use crate::error::FetchError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Low-level client for the treasury curve REST API.
///
/// No request timeout is set: failure detection relies on the transport
/// resolving, and callers issue a fresh request to retry.
#[derive(Clone)]
pub struct CurveHttp {
    base_url: String,
    client: Client,
}

impl CurveHttp {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Curve ────────────────────────────────────────────────────────────

    pub async fn get_curve(&self) -> Result<CurveResponse, FetchError> {
        let url = format!("{}/", self.base_url);
        self.get(&url).await
    }

    pub async fn get_curve_dates(&self) -> Result<CurveDatesResponse, FetchError> {
        let url = format!("{}/treasury/dates/", self.base_url);
        self.get(&url).await
    }

    pub async fn get_curve_for_date(&self, date: &str) -> Result<CurveResponse, FetchError> {
        let url = format!("{}/treasury/{}", self.base_url, date);
        self.get(&url).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_orders(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<OrderWire>, FetchError> {
        let mut url = format!("{}/orders/", self.base_url);
        let mut params = Vec::new();
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if let Some(o) = offset {
            params.push(format!("offset={}", o));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }
        self.get(&url).await
    }

    pub async fn post_order(&self, body: &OrderCreateBody) -> Result<OrderWire, FetchError> {
        let url = format!("{}/orders/", self.base_url);
        self.post(&url, body).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");
        let resp = self.client.get(url).send().await?;
        Self::decode(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        tracing::debug!(%url, "POST");
        let resp = self.client.post(url).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, FetchError> {
        let status = resp.status();
        if status.is_success() {
            // A response arrived; a body that fails to deserialize is a
            // payload problem, not a transport one.
            return resp
                .json::<T>()
                .await
                .map_err(|e| FetchError::Payload(e.to_string()));
        }

        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        let body = resp.text().await.unwrap_or_default();
        Err(FetchError::Status {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
