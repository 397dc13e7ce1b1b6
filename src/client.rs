//! High-level client — `TreasuryClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the shared snapshot state, and the accessors.

use crate::domain::curve::client::Curve;
use crate::domain::curve::CurveSnapshot;
use crate::domain::order::client::Orders;
use crate::error::SdkError;
use crate::http::CurveHttp;

use async_lock::RwLock;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::curve::client::Curve as CurveClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors per domain: `client.curve()`,
/// `client.orders()`. Curve and order requests are independent and may be in
/// flight concurrently.
pub struct TreasuryClient {
    pub(crate) http: CurveHttp,
    /// Last successful curve snapshot; replaced atomically on fetch.
    pub(crate) curve_state: Arc<RwLock<Option<CurveSnapshot>>>,
}

impl TreasuryClient {
    pub fn builder() -> TreasuryClientBuilder {
        TreasuryClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn curve(&self) -> Curve<'_> {
        Curve { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }
}

impl Clone for TreasuryClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            curve_state: self.curve_state.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TreasuryClientBuilder {
    base_url: String,
}

impl Default for TreasuryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl TreasuryClientBuilder {
    /// The single configured origin the client targets.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<TreasuryClient, SdkError> {
        Ok(TreasuryClient {
            http: CurveHttp::new(&self.base_url),
            curve_state: Arc::new(RwLock::new(None)),
        })
    }
}
