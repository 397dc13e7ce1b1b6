//! Curve sub-client — fetch today's snapshot, query history.

use super::CurveSnapshot;
use crate::client::TreasuryClient;
use crate::error::FetchError;
use chrono::NaiveDate;

pub struct Curve<'a> {
    pub(crate) client: &'a TreasuryClient,
}

impl<'a> Curve<'a> {
    /// Fetch today's curve and replace the client-held snapshot.
    ///
    /// The write lock is held across the request, so at most one fetch is in
    /// flight per client and readers never observe a partially replaced
    /// snapshot. Retrying is the caller's decision; a failed fetch leaves the
    /// previous snapshot in place.
    pub async fn fetch(&self) -> Result<CurveSnapshot, FetchError> {
        let mut slot = self.client.curve_state.write().await;
        let resp = self.client.http.get_curve().await?;
        let snapshot =
            CurveSnapshot::try_from(resp).map_err(|e| FetchError::Payload(e.to_string()))?;
        tracing::debug!(date = %snapshot.date, points = snapshot.points.len(), "curve snapshot replaced");
        *slot = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// The last successfully fetched snapshot, if any.
    pub async fn latest(&self) -> Option<CurveSnapshot> {
        self.client.curve_state.read().await.clone()
    }

    /// Dates for which the backend holds curve data, newest first.
    pub async fn available_dates(&self) -> Result<Vec<NaiveDate>, FetchError> {
        let resp = self.client.http.get_curve_dates().await?;
        resp.dates
            .iter()
            .map(|raw| {
                super::convert::parse_curve_date(raw)
                    .map_err(|e| FetchError::Payload(e.to_string()))
            })
            .collect()
    }

    /// Fetch the curve for a specific historical date.
    ///
    /// Does not touch the stored "today" snapshot.
    pub async fn for_date(&self, date: NaiveDate) -> Result<CurveSnapshot, FetchError> {
        let resp = self.client.http.get_curve_for_date(&date.to_string()).await?;
        CurveSnapshot::try_from(resp).map_err(|e| FetchError::Payload(e.to_string()))
    }
}
