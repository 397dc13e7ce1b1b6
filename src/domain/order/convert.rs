//! Conversions: order wire types → domain types, and rejection
//! interpretation.
//!
//! `submission_error` is the single place that understands the backend's
//! rejection shapes; the workflow and calculator never see the wire format.

use super::wire;
use super::{Order, OrderRequest};
use crate::error::{FetchError, SubmissionError};

/// Boilerplate the validation layer prepends to custom messages.
const VALIDATION_MSG_PREFIX: &str = "Value error, ";

impl From<wire::OrderWire> for Order {
    fn from(w: wire::OrderWire) -> Self {
        Order {
            id: w.id,
            term: w.term,
            yield_percent: w.yield_value,
            quantity: w.quantity,
            issue_date: w.issue_date,
            purchase_timestamp: w.purchase_timestamp,
            maturity_date: w.maturity_date,
        }
    }
}

impl From<&OrderRequest> for wire::OrderCreateBody {
    fn from(req: &OrderRequest) -> Self {
        wire::OrderCreateBody {
            term: req.term().clone(),
            quantity: req.quantity(),
        }
    }
}

/// Translate a failed `POST /orders/` into a [`SubmissionError`].
pub(crate) fn submission_error(err: FetchError) -> SubmissionError {
    match err {
        FetchError::Status {
            status,
            status_text,
            body,
        } => SubmissionError::Rejected(rejection_message(status, &status_text, &body)),
        other => SubmissionError::Transport(other.to_string()),
    }
}

/// Extract a display message from a rejection body.
///
/// A structured validation list yields the entry messages, each with the
/// boilerplate prefix stripped, joined with a comma. A plain string reason is
/// used verbatim. Anything else falls back to `<status> <status-text>`.
fn rejection_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<wire::RejectionBody>(body) {
        match payload.detail {
            wire::RejectionDetail::Message(msg) => return msg,
            wire::RejectionDetail::Fields(entries) if !entries.is_empty() => {
                return entries
                    .iter()
                    .map(|e| {
                        e.msg
                            .strip_prefix(VALIDATION_MSG_PREFIX)
                            .unwrap_or(&e.msg)
                            .to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
            }
            wire::RejectionDetail::Fields(_) => {}
        }
    }
    format!("{} {}", status, status_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(status: u16, status_text: &str, body: &str) -> String {
        match submission_error(FetchError::Status {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }) {
            SubmissionError::Rejected(msg) => msg,
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_single_entry_strips_prefix_without_artifacts() {
        let body = r#"{"detail":[{"loc":["body","quantity"],"msg":"Value error, Quantity must be greater than zero","type":"value_error"}]}"#;
        let msg = rejected(422, "Unprocessable Entity", body);
        assert_eq!(msg, "Quantity must be greater than zero");
        assert!(!msg.contains(','));
    }

    #[test]
    fn test_multiple_entries_joined_with_comma() {
        let body = r#"{"detail":[
            {"loc":["body","term"],"msg":"Value error, Term must be a valid curve point","type":"value_error"},
            {"loc":["body","quantity"],"msg":"Input should be greater than 0","type":"greater_than"}
        ]}"#;
        assert_eq!(
            rejected(422, "Unprocessable Entity", body),
            "Term must be a valid curve point, Input should be greater than 0"
        );
    }

    #[test]
    fn test_string_detail_used_verbatim() {
        let body = r#"{"detail":"Yield 9.1 is too far from the market yield 4.1"}"#;
        assert_eq!(
            rejected(400, "Bad Request", body),
            "Yield 9.1 is too far from the market yield 4.1"
        );
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status_line() {
        assert_eq!(
            rejected(500, "Internal Server Error", "<html>boom</html>"),
            "500 Internal Server Error"
        );
    }

    #[test]
    fn test_empty_entry_list_falls_back() {
        assert_eq!(
            rejected(422, "Unprocessable Entity", r#"{"detail":[]}"#),
            "422 Unprocessable Entity"
        );
    }

    #[test]
    fn test_transport_failure_wraps_description() {
        let err = submission_error(FetchError::Payload("connection refused".to_string()));
        match err {
            SubmissionError::Transport(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
