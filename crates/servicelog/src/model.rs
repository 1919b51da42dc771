//! Core data types for servicelog.
//!
//! This module defines the records handed to the reminder engine: vehicles,
//! recurring service reminders, and completed service history entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle tracked in the garage.
///
/// Only `current_mileage` and `purchase_date` feed the reminder engine; the
/// remaining fields are descriptive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Opaque identifier.
    pub id: String,

    /// Manufacturer, e.g. "Volkswagen".
    #[serde(default)]
    pub make: String,

    /// Model name, e.g. "Golf".
    #[serde(default)]
    pub model: String,

    /// Model year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Engine description.
    #[serde(default)]
    pub engine: String,

    /// Transmission description.
    #[serde(default)]
    pub transmission: String,

    /// Current odometer reading in km.
    pub current_mileage: i64,

    /// Free-form notes.
    #[serde(default)]
    pub notes: String,

    /// Date the vehicle was bought. Anchors time-based reminders that have
    /// never been serviced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    /// When the record was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Human-readable name, e.g. "2014 Volkswagen Golf".
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = [self.make.as_str(), self.model.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        match (self.year, name.is_empty()) {
            (_, true) => self.id.clone(),
            (Some(year), false) => format!("{year} {name}"),
            (None, false) => name,
        }
    }
}

/// A recurring maintenance rule for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReminder {
    /// Opaque identifier.
    pub id: String,

    /// The vehicle this reminder belongs to.
    pub vehicle_id: String,

    /// Label such as "Oil Change". Matched case-insensitively against
    /// [`ServiceHistory::service_type`].
    pub service_type: String,

    /// Distance in km between services.
    pub mileage_interval: i64,

    /// Baseline mileage entered by the user.
    #[serde(default)]
    pub last_service_mileage: i64,

    /// Optional time interval in months. Zero means "not set".
    #[serde(default)]
    pub time_interval_months: Option<i32>,
}

impl ServiceReminder {
    /// The configured time interval, if it is set to a positive value.
    #[must_use]
    pub fn time_interval(&self) -> Option<u32> {
        self.time_interval_months
            .and_then(|months| u32::try_from(months).ok())
            .filter(|months| *months > 0)
    }
}

/// A completed service event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHistory {
    /// Opaque identifier.
    pub id: String,

    /// The vehicle that was serviced.
    pub vehicle_id: String,

    /// What was done, e.g. "oil change".
    pub service_type: String,

    /// Calendar date the work was performed.
    pub service_date: NaiveDate,

    /// Odometer reading at the time of service.
    pub mileage_at_service: i64,

    /// Who did the work.
    #[serde(default)]
    pub mechanic_name: String,

    /// Free-form notes.
    #[serde(default)]
    pub notes: String,

    /// Total cost in EUR.
    #[serde(default)]
    pub total_cost: f64,
}

impl ServiceHistory {
    /// Check whether this entry records the given kind of service.
    ///
    /// Comparison is exact apart from letter case.
    #[must_use]
    pub fn matches_type(&self, service_type: &str) -> bool {
        self.service_type.to_lowercase() == service_type.to_lowercase()
    }
}
