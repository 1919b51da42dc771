//! Reminder tables.
//!
//! Sorting for reminder listings driven by clickable column headers: the first
//! click on a column sorts ascending, the second descending, the third
//! restores the original order.

use std::cmp::Ordering;

use crate::model::{ServiceReminder, Vehicle};

/// Label used for reminders whose vehicle is not in the garage.
pub const UNKNOWN_VEHICLE: &str = "Unknown Vehicle";

/// A sortable column of the reminder table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderColumn {
    /// Service type, compared ignoring case.
    ServiceType,
    /// Vehicle display name, compared ignoring case.
    Vehicle,
    /// Mileage interval.
    MileageInterval,
    /// Time interval in months (unset counts as 0).
    TimeInterval,
    /// Baseline mileage.
    LastServiceMileage,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Current sort of a table. `None` keeps the original order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(ReminderColumn, SortDirection)>,
}

impl SortState {
    /// Unsorted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a header click on `column`.
    ///
    /// Clicking a different column starts ascending on it. Clicking the
    /// active column cycles ascending → descending → unsorted.
    #[must_use]
    pub fn toggle(self, column: ReminderColumn) -> Self {
        let active = match self.active {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
        Self { active }
    }

    /// Return the reminders in this sort order. The sort is stable.
    #[must_use]
    pub fn apply(
        &self,
        reminders: &[ServiceReminder],
        vehicles: &[Vehicle],
    ) -> Vec<ServiceReminder> {
        let mut sorted = reminders.to_vec();
        let Some((column, direction)) = self.active else {
            return sorted;
        };

        sorted.sort_by(|a, b| {
            let ordering = compare_by(column, a, b, vehicles);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        sorted
    }
}

fn compare_by(
    column: ReminderColumn,
    a: &ServiceReminder,
    b: &ServiceReminder,
    vehicles: &[Vehicle],
) -> Ordering {
    match column {
        ReminderColumn::ServiceType => a
            .service_type
            .to_lowercase()
            .cmp(&b.service_type.to_lowercase()),
        ReminderColumn::Vehicle => vehicle_name(vehicles, &a.vehicle_id)
            .to_lowercase()
            .cmp(&vehicle_name(vehicles, &b.vehicle_id).to_lowercase()),
        ReminderColumn::MileageInterval => a.mileage_interval.cmp(&b.mileage_interval),
        ReminderColumn::TimeInterval => a
            .time_interval()
            .unwrap_or(0)
            .cmp(&b.time_interval().unwrap_or(0)),
        ReminderColumn::LastServiceMileage => a.last_service_mileage.cmp(&b.last_service_mileage),
    }
}

/// Display name of the vehicle with the given id.
#[must_use]
pub fn vehicle_name(vehicles: &[Vehicle], vehicle_id: &str) -> String {
    vehicles
        .iter()
        .find(|v| v.id == vehicle_id)
        .map_or_else(|| UNKNOWN_VEHICLE.to_string(), Vehicle::display_name)
}

/// Render a month interval for display: "-", "6 months", "1 year",
/// "1.5 years".
#[must_use]
pub fn format_time_interval(months: Option<u32>) -> String {
    match months {
        None | Some(0) => "-".to_string(),
        Some(1) => "1 month".to_string(),
        Some(m) if m < 12 => format!("{m} months"),
        Some(12) => "1 year".to_string(),
        Some(m) if m % 12 == 0 => format!("{} years", m / 12),
        Some(m) => format!("{:.1} years", f64::from(m) / 12.0),
    }
}
