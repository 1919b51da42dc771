//! Priority ordering for due statuses.

use std::cmp::Ordering;

use super::engine::DueStatus;

/// Weight applied to months-until-due so it can be compared against
/// distance-until-due in km. One month ranks like 1000 km.
pub const MONTH_WEIGHT: i64 = 1000;

/// How soon a reminder comes due: the smaller of the remaining distance and
/// the weighted remaining months, counting only dimensions that are still
/// positive. `None` means neither dimension has anything left.
#[must_use]
pub fn soonest(status: &DueStatus) -> Option<i64> {
    let by_mileage = Some(status.miles_until_due).filter(|miles| *miles > 0);
    let by_time = status
        .months_until_due
        .map(|months| i64::from(months) * MONTH_WEIGHT)
        .filter(|weighted| *weighted > 0);

    match (by_mileage, by_time) {
        (Some(miles), Some(weighted)) => Some(miles.min(weighted)),
        (miles, weighted) => miles.or(weighted),
    }
}

/// Compare two statuses by priority.
///
/// Never-serviced reminders first, then due ones, then ascending
/// [`soonest`] with `None` last.
#[must_use]
pub fn compare_priority(a: &DueStatus, b: &DueStatus) -> Ordering {
    b.has_no_service_record
        .cmp(&a.has_no_service_record)
        .then_with(|| b.is_due.cmp(&a.is_due))
        .then_with(|| {
            let a_soonest = soonest(a).unwrap_or(i64::MAX);
            let b_soonest = soonest(b).unwrap_or(i64::MAX);
            a_soonest.cmp(&b_soonest)
        })
}

/// Sort statuses by priority. The sort is stable, so ties keep their input
/// order.
pub fn sort_by_priority(statuses: &mut [DueStatus]) {
    statuses.sort_by(compare_priority);
}
