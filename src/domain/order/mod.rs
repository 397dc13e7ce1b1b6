//! Order domain — simulated fixed-income orders against curve points.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::error::LocalValidationError;
use crate::shared::TermCode;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use client::RefreshAfterWrite;
pub use state::OrderHistory;

/// A server-created order. Immutable after creation; `yield_percent` is
/// whatever the server captured at acceptance, independent of any value the
/// client displayed at selection time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub term: TermCode,
    pub yield_percent: Decimal,
    pub quantity: Decimal,
    pub issue_date: NaiveDate,
    pub purchase_timestamp: NaiveDateTime,
    pub maturity_date: NaiveDate,
}

/// Ephemeral submission input: a term plus a positive dollar quantity.
///
/// Construction is the only way in, so a non-positive quantity can never
/// reach the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    term: TermCode,
    quantity: Decimal,
}

impl OrderRequest {
    pub fn new(term: TermCode, quantity: Decimal) -> Result<Self, LocalValidationError> {
        if quantity <= Decimal::ZERO {
            return Err(LocalValidationError::NotPositive);
        }
        Ok(Self { term, quantity })
    }

    pub fn term(&self) -> &TermCode {
        &self.term
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_rejects_non_positive_quantity() {
        assert_eq!(
            OrderRequest::new("1Y".into(), Decimal::ZERO),
            Err(LocalValidationError::NotPositive)
        );
        assert_eq!(
            OrderRequest::new("1Y".into(), Decimal::from(-100)),
            Err(LocalValidationError::NotPositive)
        );
    }

    #[test]
    fn test_order_request_accepts_positive_quantity() {
        let req = OrderRequest::new("1Y".into(), Decimal::from(2000)).unwrap();
        assert_eq!(req.term().as_str(), "1Y");
        assert_eq!(req.quantity(), Decimal::from(2000));
    }
}
