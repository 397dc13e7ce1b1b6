//! Maturity date arithmetic.
//!
//! Turns an issue date plus a term code into the maturity date. Day-of-month
//! overflow is resolved by clamping to the last valid day of the target month
//! (2024-01-31 + 1m = 2024-02-29, 2024-02-29 + 1Y = 2025-02-28). The clamp is
//! implemented here rather than delegated to calendar-library normalization,
//! so the rule stays pinned.

use crate::error::TermError;
use crate::shared::TermCode;
use chrono::{Datelike, NaiveDate};

/// Compute the maturity date for an issue date and term code.
///
/// A well-formed code whose maturity lands outside the representable
/// calendar range fails with [`TermError::OutOfRange`] instead of panicking.
pub fn maturity_date(issue: NaiveDate, term: &TermCode) -> Result<NaiveDate, TermError> {
    let span = term.span()?;
    let out_of_range = || TermError::OutOfRange(term.as_str().to_string());

    let months = u32::try_from(span.months()).map_err(|_| out_of_range())?;
    add_months_clamped(issue, months).ok_or_else(out_of_range)
}

/// Advance `date` by `months`, rolling the year over and clamping the day to
/// the last valid day of the target month. `None` when the target month lies
/// outside the supported calendar range.
fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let total = date.month0().checked_add(months)?;
    let year = date.year().checked_add((total / 12) as i32)?;
    let month = total % 12 + 1;

    // At most three steps: the 31st clamps to the 28th in the worst case.
    // If even day 1 is unrepresentable the whole month is out of range.
    let mut day = date.day();
    while day >= 1 {
        if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(d);
        }
        day -= 1;
    }
    None
}
