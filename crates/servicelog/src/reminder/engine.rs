//! Service due-date computation.
//!
//! The engine projects a vehicle's reminders, service history, mileage and
//! purchase date onto a prioritised list of [`DueStatus`] records. Nothing is
//! cached: every call derives the statuses from its inputs, so results can
//! never go stale.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::model::{ServiceHistory, ServiceReminder, Vehicle};

use super::calendar::{add_months, months_between, MonthOverflow};
use super::ordering::sort_by_priority;

/// The computed state of one reminder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueStatus {
    /// The reminder this status was derived from.
    #[serde(flatten)]
    pub reminder: ServiceReminder,

    /// Odometer reading at which the next service is due.
    pub next_due_mileage: i64,

    /// Due for any reason.
    pub is_due: bool,

    /// Due because the mileage threshold was reached (or never serviced).
    pub is_due_by_mileage: bool,

    /// Due because the time threshold was reached (or never serviced).
    pub is_due_by_time: bool,

    /// No history entry of this service type exists.
    pub has_no_service_record: bool,

    /// Distance left until due. Negative when overdue.
    pub miles_until_due: i64,

    /// Whole months left until `due_date`, ignoring the day of month.
    pub months_until_due: Option<i32>,

    /// Date the next service is due, when a time interval applies.
    pub due_date: Option<NaiveDate>,

    /// Date of the most recent matching service.
    pub last_service_date: Option<NaiveDate>,
}

/// Aggregate counts over a set of statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DueSummary {
    /// Number of reminders that are due.
    pub overdue_count: usize,
    /// Number of reminders with no matching service record.
    pub no_record_count: usize,
}

impl DueSummary {
    /// Count due and never-serviced reminders.
    #[must_use]
    pub fn from_statuses(statuses: &[DueStatus]) -> Self {
        Self {
            overdue_count: statuses.iter().filter(|s| s.is_due).count(),
            no_record_count: statuses.iter().filter(|s| s.has_no_service_record).count(),
        }
    }

    /// Whether any reminder is due.
    #[must_use]
    pub fn has_any_overdue(&self) -> bool {
        self.overdue_count > 0
    }
}

/// Ordered statuses together with their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueReport {
    /// Statuses, highest priority first.
    pub statuses: Vec<DueStatus>,
    /// Counts over `statuses`.
    pub summary: DueSummary,
}

/// Computes due statuses relative to a fixed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderEngine {
    today: NaiveDate,
    overflow: MonthOverflow,
}

impl Default for ReminderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderEngine {
    /// Create an engine for the current local date with clamping month
    /// arithmetic.
    #[must_use]
    pub fn new() -> Self {
        Self::at(Local::now().date_naive())
    }

    /// Create an engine that treats `today` as the current date.
    #[must_use]
    pub fn at(today: NaiveDate) -> Self {
        Self {
            today,
            overflow: MonthOverflow::default(),
        }
    }

    /// Use the given rule for adding months to day-of-month values that do
    /// not exist in the target month.
    #[must_use]
    pub fn with_month_overflow(mut self, overflow: MonthOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// The date this engine evaluates against.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The month overflow rule in use.
    #[must_use]
    pub fn month_overflow(&self) -> MonthOverflow {
        self.overflow
    }

    /// Compute the prioritised due statuses for one vehicle's reminders.
    ///
    /// Never-serviced reminders come first, then due ones, then the rest by
    /// whichever of distance or time runs out sooner.
    #[must_use]
    pub fn compute_due_statuses(
        &self,
        reminders: &[ServiceReminder],
        history: &[ServiceHistory],
        current_mileage: i64,
        purchase_date: Option<NaiveDate>,
    ) -> Vec<DueStatus> {
        let mut statuses: Vec<DueStatus> = reminders
            .iter()
            .map(|reminder| self.evaluate(reminder, history, current_mileage, purchase_date))
            .collect();

        sort_by_priority(&mut statuses);
        statuses
    }

    /// Compute statuses and summary for a vehicle.
    #[must_use]
    pub fn report(
        &self,
        vehicle: &Vehicle,
        reminders: &[ServiceReminder],
        history: &[ServiceHistory],
    ) -> DueReport {
        let statuses = self.compute_due_statuses(
            reminders,
            history,
            vehicle.current_mileage,
            vehicle.purchase_date,
        );
        let summary = DueSummary::from_statuses(&statuses);
        debug!(
            "Vehicle {}: {} reminders, {} due, {} without record",
            vehicle.id,
            statuses.len(),
            summary.overdue_count,
            summary.no_record_count
        );
        DueReport { statuses, summary }
    }

    fn evaluate(
        &self,
        reminder: &ServiceReminder,
        history: &[ServiceHistory],
        current_mileage: i64,
        purchase_date: Option<NaiveDate>,
    ) -> DueStatus {
        let last_service = latest_matching(history, &reminder.service_type);
        let has_no_service_record = last_service.is_none();

        let last_mileage = last_service.map_or(0, |entry| entry.mileage_at_service);
        // Saturate rather than wrap on unvalidated input.
        let next_due_mileage = last_mileage.saturating_add(reminder.mileage_interval);
        let is_due_by_mileage = has_no_service_record || current_mileage >= next_due_mileage;
        let miles_until_due = next_due_mileage.saturating_sub(current_mileage);

        let mut is_due_by_time = false;
        let mut due_date = None;
        let mut months_until_due = None;

        if let Some(months) = reminder.time_interval() {
            let start = last_service
                .map(|entry| entry.service_date)
                .or(purchase_date);

            match start.map(|start| (start, add_months(start, months, self.overflow))) {
                Some((_, Some(date))) => {
                    is_due_by_time = has_no_service_record || self.today >= date;
                    months_until_due = Some(months_between(self.today, date));
                    due_date = Some(date);
                }
                Some((start, None)) => {
                    warn!(
                        "Reminder {}: {} + {} months is out of range, skipping time check",
                        reminder.id, start, months
                    );
                }
                None => {
                    debug!(
                        "Reminder {}: no service record or purchase date, skipping time check",
                        reminder.id
                    );
                }
            }
        }

        let is_due = has_no_service_record || is_due_by_mileage || is_due_by_time;

        debug!(
            "Reminder {} ({}): next due at {} km, {} km left, due={}",
            reminder.id, reminder.service_type, next_due_mileage, miles_until_due, is_due
        );

        DueStatus {
            reminder: reminder.clone(),
            next_due_mileage,
            is_due,
            is_due_by_mileage,
            is_due_by_time,
            has_no_service_record,
            miles_until_due,
            months_until_due,
            due_date,
            last_service_date: last_service.map(|entry| entry.service_date),
        }
    }
}

/// Find the most recent history entry of the given service type.
///
/// Selection is by `service_date`, not list position. When several entries
/// share the latest date the earliest one in the list wins.
#[must_use]
pub fn latest_matching<'a>(
    history: &'a [ServiceHistory],
    service_type: &str,
) -> Option<&'a ServiceHistory> {
    history
        .iter()
        .filter(|entry| entry.matches_type(service_type))
        .fold(None, |best: Option<&ServiceHistory>, entry| match best {
            Some(current) if current.service_date >= entry.service_date => Some(current),
            _ => Some(entry),
        })
}

/// Compute prioritised due statuses against the current local date.
///
/// Shorthand for [`ReminderEngine::new`] followed by
/// [`ReminderEngine::compute_due_statuses`].
#[must_use]
pub fn compute_due_statuses(
    reminders: &[ServiceReminder],
    history: &[ServiceHistory],
    current_mileage: i64,
    purchase_date: Option<NaiveDate>,
) -> Vec<DueStatus> {
    let engine = ReminderEngine::new();
    engine.compute_due_statuses(reminders, history, current_mileage, purchase_date)
}
