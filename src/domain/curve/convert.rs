//! Conversion: CurveResponse → CurveSnapshot.

use super::wire;
use super::{CurveDataError, CurvePoint, CurveSnapshot};
use chrono::{NaiveDate, NaiveDateTime};

impl TryFrom<wire::CurveResponse> for CurveSnapshot {
    type Error = CurveDataError;

    fn try_from(source: wire::CurveResponse) -> Result<Self, Self::Error> {
        let date = parse_curve_date(&source.date)?;
        let points = source
            .chart_data
            .into_iter()
            .map(|p| CurvePoint {
                term: p.term,
                yield_percent: p.yield_percent,
            })
            .collect();
        Ok(CurveSnapshot { date, points })
    }
}

/// Accept either `YYYY-MM-DD` or a naive ISO datetime (`YYYY-MM-DDTHH:MM:SS`),
/// the two stampings observed from the backend.
pub(crate) fn parse_curve_date(raw: &str) -> Result<NaiveDate, CurveDataError> {
    if let Ok(d) = raw.parse::<NaiveDate>() {
        return Ok(d);
    }
    raw.parse::<NaiveDateTime>()
        .map(|dt| dt.date())
        .map_err(|_| CurveDataError::BadDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::TermCode;
    use rust_decimal::Decimal;

    fn response(date: &str) -> wire::CurveResponse {
        wire::CurveResponse {
            date: date.to_string(),
            chart_data: vec![
                wire::CurvePointWire {
                    term: TermCode::from("1Y"),
                    yield_percent: Decimal::new(51, 1),
                },
                wire::CurvePointWire {
                    term: TermCode::from("2Y"),
                    yield_percent: Decimal::new(49, 1),
                },
            ],
        }
    }

    #[test]
    fn test_bare_date() {
        let snap = CurveSnapshot::try_from(response("2024-06-03")).unwrap();
        assert_eq!(snap.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn test_naive_datetime_date() {
        let snap = CurveSnapshot::try_from(response("2025-09-18T00:00:00")).unwrap();
        assert_eq!(snap.date, NaiveDate::from_ymd_opt(2025, 9, 18).unwrap());
    }

    #[test]
    fn test_server_order_preserved() {
        let snap = CurveSnapshot::try_from(response("2024-06-03")).unwrap();
        let terms: Vec<_> = snap.points.iter().map(|p| p.term.as_str()).collect();
        assert_eq!(terms, ["1Y", "2Y"]);
        assert_eq!(
            snap.point(&TermCode::from("2Y")).unwrap().yield_percent,
            Decimal::new(49, 1)
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = CurveSnapshot::try_from(response("not-a-date")).unwrap_err();
        assert_eq!(err, CurveDataError::BadDate("not-a-date".to_string()));
    }
}
