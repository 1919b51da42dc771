//! Calendar arithmetic for time-based reminders.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How to resolve a day-of-month that does not exist in the target month
/// when adding calendar months (e.g. Jan 31 + 1 month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOverflow {
    /// Clamp to the last day of the target month: Jan 31 + 1 month = Feb 28
    /// (Feb 29 in leap years).
    #[default]
    Clamp,
    /// Spill the excess days into the following month: Jan 31 + 1 month =
    /// Mar 3 (Mar 2 in leap years).
    RollOver,
}

impl std::fmt::Display for MonthOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::RollOver => write!(f, "roll_over"),
        }
    }
}

/// Add `months` calendar months to `date`.
///
/// Returns `None` if the result falls outside the representable date range.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32, overflow: MonthOverflow) -> Option<NaiveDate> {
    match overflow {
        MonthOverflow::Clamp => date.checked_add_months(Months::new(months)),
        MonthOverflow::RollOver => {
            let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
            let year = i32::try_from(total.div_euclid(12)).ok()?;
            let month0 = u32::try_from(total.rem_euclid(12)).ok()?;
            let first_of_month = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
            first_of_month.checked_add_days(Days::new(u64::from(date.day0())))
        }
    }
}

/// Whole months from `from` to `to`, counting only the year and month fields.
///
/// The day of month is ignored, so two dates in the same month are 0 apart
/// and Jan 31 to Feb 1 is 1 month.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let years = to.year() - from.year();
    #[allow(clippy::cast_possible_wrap)]
    let months = to.month() as i32 - from.month() as i32;
    years * 12 + months
}
