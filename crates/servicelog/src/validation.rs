//! Input validation for reminder engine inputs.
//!
//! The engine assumes well-formed input. Callers run these checks on data
//! coming from outside (snapshot files, user entry) before evaluating it.

use crate::error::{Error, Result};
use crate::model::{ServiceHistory, ServiceReminder, Vehicle};

/// Largest odometer reading or interval accepted, in km.
pub const MAX_MILEAGE: i64 = 10_000_000;

/// Describe why `value` is not a usable mileage, if it is not.
fn mileage_problem(field: &str, value: i64) -> Option<String> {
    if value < 0 {
        Some(format!("{field} cannot be negative, got {value}"))
    } else if value > MAX_MILEAGE {
        Some(format!("{field} cannot exceed {MAX_MILEAGE}, got {value}"))
    } else {
        None
    }
}

/// Validate a service reminder.
///
/// # Errors
///
/// Returns [`Error::InvalidReminder`] if the service type is blank, the
/// mileage interval is not positive, a baseline or time interval is
/// negative, or a mileage exceeds [`MAX_MILEAGE`].
pub fn validate_reminder(reminder: &ServiceReminder) -> Result<()> {
    if reminder.service_type.trim().is_empty() {
        return Err(Error::invalid_reminder(
            &reminder.id,
            "service_type must not be empty",
        ));
    }

    if reminder.mileage_interval <= 0 {
        return Err(Error::invalid_reminder(
            &reminder.id,
            format!(
                "mileage_interval must be positive, got {}",
                reminder.mileage_interval
            ),
        ));
    }

    for (field, value) in [
        ("mileage_interval", reminder.mileage_interval),
        ("last_service_mileage", reminder.last_service_mileage),
    ] {
        if let Some(message) = mileage_problem(field, value) {
            return Err(Error::invalid_reminder(&reminder.id, message));
        }
    }

    if let Some(months) = reminder.time_interval_months.filter(|m| *m < 0) {
        return Err(Error::invalid_reminder(
            &reminder.id,
            format!("time_interval_months cannot be negative, got {months}"),
        ));
    }

    Ok(())
}

/// Validate a service history entry.
///
/// # Errors
///
/// Returns [`Error::InvalidHistory`] if the service type is blank or the
/// recorded mileage is negative or exceeds [`MAX_MILEAGE`].
pub fn validate_history(entry: &ServiceHistory) -> Result<()> {
    if entry.service_type.trim().is_empty() {
        return Err(Error::invalid_history(
            &entry.id,
            "service_type must not be empty",
        ));
    }

    if let Some(message) = mileage_problem("mileage_at_service", entry.mileage_at_service) {
        return Err(Error::invalid_history(&entry.id, message));
    }

    Ok(())
}

/// Validate a vehicle.
///
/// # Errors
///
/// Returns [`Error::InvalidVehicle`] if the current mileage is negative or
/// exceeds [`MAX_MILEAGE`].
pub fn validate_vehicle(vehicle: &Vehicle) -> Result<()> {
    if let Some(message) = mileage_problem("current_mileage", vehicle.current_mileage) {
        return Err(Error::invalid_vehicle(&vehicle.id, message));
    }

    Ok(())
}
