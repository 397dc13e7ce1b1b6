//! Wire types for the order endpoints.
//!
//! The rejection payload shapes are a versioned external contract; nothing
//! outside this module and `convert` depends on them.

use crate::shared::TermCode;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One order as `GET /orders/` and a successful `POST /orders/` return it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderWire {
    pub id: i64,
    pub term: TermCode,
    pub yield_value: Decimal,
    pub quantity: Decimal,
    pub issue_date: NaiveDate,
    pub purchase_timestamp: NaiveDateTime,
    pub maturity_date: NaiveDate,
}

/// `POST /orders/` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderCreateBody {
    pub term: TermCode,
    pub quantity: Decimal,
}

/// Non-success `POST /orders/` body: `{ "detail": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectionBody {
    pub detail: RejectionDetail,
}

/// The `detail` field is either one plain reason string or a list of
/// field-level validation entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RejectionDetail {
    Fields(Vec<FieldError>),
    Message(String),
}

/// One structured validation entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}
