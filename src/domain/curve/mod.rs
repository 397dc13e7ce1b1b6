//! Curve domain — the daily treasury yield-curve snapshot.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::TermCode;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One term/yield pair on the curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurvePoint {
    pub term: TermCode,
    pub yield_percent: Decimal,
}

/// The complete curve for one as-of date.
///
/// `points` keeps the server-provided order; terms are unique within one
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveSnapshot {
    pub date: NaiveDate,
    pub points: Vec<CurvePoint>,
}

impl CurveSnapshot {
    /// Look up a point by its term code.
    pub fn point(&self, term: &TermCode) -> Option<&CurvePoint> {
        self.points.iter().find(|p| &p.term == term)
    }
}

/// Validation failures converting a curve payload into a snapshot.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CurveDataError {
    #[error("unrecognized curve date: {0:?}")]
    BadDate(String),
}
