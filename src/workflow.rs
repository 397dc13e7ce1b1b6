//! Order-entry workflow — the state machine behind the submission form.
//!
//! `Idle` → `FormOpen` (point selected) → `Submitting` → back to `Idle` on
//! success or `FormOpen` on rejection, plus a blocking `CurveError` state
//! with a retry path. `submit` takes `&mut self` and holds it across the
//! gateway call, so a second submission cannot be issued while one is
//! outstanding.

use crate::client::TreasuryClient;
use crate::domain::curve::CurvePoint;
use crate::domain::order::{OrderHistory, OrderRequest, RefreshAfterWrite};
use crate::error::FetchError;
use crate::shared::parse_amount;

/// Where the workflow currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// Nothing selected, no form shown.
    Idle,
    /// A curve point is selected and the entry form is open.
    FormOpen {
        point: CurvePoint,
        /// The amount as the user typed it; retained across a rejection.
        amount: String,
        /// A local-validation or submission error to display in the form.
        error: Option<String>,
    },
    /// A submission is outstanding.
    Submitting { point: CurvePoint, amount: String },
    /// The curve could not be loaded; blocks everything until a retry works.
    CurveError { message: String },
}

/// State machine coordinating point selection, form entry, submission, and
/// history refresh. Owns the displayed order history.
pub struct OrderWorkflow {
    state: WorkflowState,
    history: OrderHistory,
    /// Inline message that survives a state change, e.g. a failed
    /// post-submission refresh that must not mask the confirmed order.
    notice: Option<String>,
}

impl OrderWorkflow {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Idle,
            history: OrderHistory::new(),
            notice: None,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// A point on the chart was clicked: open (or re-open) the entry form.
    ///
    /// Ignored while a submission is outstanding or the curve is in error.
    pub fn point_clicked(&mut self, point: CurvePoint) {
        match self.state {
            WorkflowState::Idle | WorkflowState::FormOpen { .. } => {
                self.state = WorkflowState::FormOpen {
                    point,
                    amount: String::new(),
                    error: None,
                };
            }
            WorkflowState::Submitting { .. } | WorkflowState::CurveError { .. } => {}
        }
    }

    /// Close the form, clearing any displayed submission error.
    pub fn cancel(&mut self) {
        if matches!(self.state, WorkflowState::FormOpen { .. }) {
            self.state = WorkflowState::Idle;
        }
    }

    /// Submit the entered amount for the selected point.
    ///
    /// Only acts in `FormOpen`. An amount that does not parse to a finite
    /// positive value keeps the form open with a validation message and never
    /// reaches the gateway. On acceptance the history is replaced from the
    /// server's refreshed list and the workflow returns to `Idle`; on
    /// rejection the form re-opens with the error and the entered amount.
    pub async fn submit(&mut self, client: &TreasuryClient, amount: &str) {
        let point = match &self.state {
            WorkflowState::FormOpen { point, .. } => point.clone(),
            _ => return,
        };

        let quantity = match parse_amount(amount) {
            Ok(q) => q,
            Err(err) => {
                self.state = WorkflowState::FormOpen {
                    point,
                    amount: amount.to_string(),
                    error: Some(err.to_string()),
                };
                return;
            }
        };
        // parse_amount already guarantees quantity > 0.
        let request = match OrderRequest::new(point.term.clone(), quantity) {
            Ok(r) => r,
            Err(err) => {
                self.state = WorkflowState::FormOpen {
                    point,
                    amount: amount.to_string(),
                    error: Some(err.to_string()),
                };
                return;
            }
        };

        self.state = WorkflowState::Submitting {
            point: point.clone(),
            amount: amount.to_string(),
        };

        match client.orders().submit(&request).await {
            Ok(RefreshAfterWrite::Refreshed(orders)) => {
                self.history.replace(orders);
                self.notice = None;
                self.state = WorkflowState::Idle;
            }
            Ok(RefreshAfterWrite::RefreshFailed(err)) => {
                // The order is confirmed; surface the stale history inline.
                self.notice = Some(format!("order accepted; history refresh failed: {}", err));
                self.state = WorkflowState::Idle;
            }
            Err(err) => {
                // Show the interpreted message itself, without error-enum framing.
                let display = match err {
                    crate::error::SubmissionError::Rejected(msg) => msg,
                    other => other.to_string(),
                };
                self.state = WorkflowState::FormOpen {
                    point,
                    amount: amount.to_string(),
                    error: Some(display),
                };
            }
        }
    }

    /// Re-read the authoritative order list and replace the history.
    pub async fn refresh_orders(&mut self, client: &TreasuryClient) -> Result<(), FetchError> {
        let orders = client.orders().list().await?;
        self.history.replace(orders);
        Ok(())
    }

    /// The curve failed to load: block everything behind a retryable error.
    pub fn curve_unavailable(&mut self, err: &FetchError) {
        self.state = WorkflowState::CurveError {
            message: err.to_string(),
        };
    }

    /// Retry the curve fetch from the blocking error state.
    pub async fn retry_curve(&mut self, client: &TreasuryClient) {
        if !matches!(self.state, WorkflowState::CurveError { .. }) {
            return;
        }
        match client.curve().fetch().await {
            Ok(_) => self.state = WorkflowState::Idle,
            Err(err) => {
                self.state = WorkflowState::CurveError {
                    message: err.to_string(),
                };
            }
        }
    }
}

impl Default for OrderWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
