//! Wire types for curve responses.

use crate::shared::TermCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One chart point as the backend sends it. `Yield` is capitalized on the
/// wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurvePointWire {
    pub term: TermCode,
    #[serde(rename = "Yield")]
    pub yield_percent: Decimal,
}

/// `GET /` and `GET /treasury/{date}` response.
///
/// The date arrives as a string: either a bare ISO date or a naive ISO
/// datetime, depending on how the source feed stamped the row. Conversion to
/// [`super::CurveSnapshot`] handles both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveResponse {
    pub date: String,
    pub chart_data: Vec<CurvePointWire>,
}

/// `GET /treasury/dates/` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveDatesResponse {
    pub dates: Vec<String>,
}
