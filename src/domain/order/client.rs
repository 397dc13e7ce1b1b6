//! Orders sub-client — list and submit with refresh-after-write.

use super::{convert, wire, Order, OrderRequest};
use crate::client::TreasuryClient;
use crate::error::{FetchError, SubmissionError};

pub struct Orders<'a> {
    pub(crate) client: &'a TreasuryClient,
}

/// Outcome of a successful submission.
///
/// The created order is never synthesized locally; the authoritative list is
/// re-read instead. A failed re-read must not mask the confirmed submission,
/// so it is carried here rather than as an `Err`.
#[derive(Debug)]
pub enum RefreshAfterWrite {
    /// The post-write read succeeded; this list is the sole source of truth.
    Refreshed(Vec<Order>),
    /// The order was accepted but the follow-up read failed.
    RefreshFailed(FetchError),
}

impl<'a> Orders<'a> {
    /// Fetch all orders, newest first.
    pub async fn list(&self) -> Result<Vec<Order>, FetchError> {
        let wires = self.client.http.get_orders(None, None).await?;
        Ok(wires.into_iter().map(Order::from).collect())
    }

    /// Fetch one page of orders.
    pub async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Order>, FetchError> {
        let wires = self
            .client
            .http
            .get_orders(Some(limit), Some(offset))
            .await?;
        Ok(wires.into_iter().map(Order::from).collect())
    }

    /// Submit an order.
    ///
    /// On acceptance the server's list is re-read immediately and returned;
    /// the client never appends a speculative entry. On rejection the
    /// response body is interpreted into a displayable message.
    pub async fn submit(&self, request: &OrderRequest) -> Result<RefreshAfterWrite, SubmissionError> {
        let body = wire::OrderCreateBody::from(request);
        match self.client.http.post_order(&body).await {
            Ok(created) => {
                tracing::debug!(id = created.id, term = %created.term, "order accepted");
            }
            Err(err) => {
                let err = convert::submission_error(err);
                tracing::warn!(error = %err, "order submission failed");
                return Err(err);
            }
        }

        match self.list().await {
            Ok(orders) => Ok(RefreshAfterWrite::Refreshed(orders)),
            Err(err) => {
                tracing::warn!(error = %err, "post-submission refresh failed");
                Ok(RefreshAfterWrite::RefreshFailed(err))
            }
        }
    }
}
