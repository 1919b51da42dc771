//! Garage snapshots.
//!
//! A snapshot is a read-only JSON export of everything the reminder engine
//! needs: vehicles, their reminders and their service history. Records are
//! linked by `vehicle_id`.
//!
//! ```json
//! {
//!   "vehicles": [{ "id": "v1", "current_mileage": 55000, "purchase_date": "2019-04-01" }],
//!   "service_reminders": [
//!     { "id": "r1", "vehicle_id": "v1", "service_type": "Oil Change",
//!       "mileage_interval": 10000, "time_interval_months": 6 }
//!   ],
//!   "service_history": [
//!     { "id": "h1", "vehicle_id": "v1", "service_type": "Oil Change",
//!       "service_date": "2026-05-19", "mileage_at_service": 50000 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::{ServiceHistory, ServiceReminder, Vehicle};
use crate::reminder::{DueReport, ReminderEngine};
use crate::validation::{validate_history, validate_reminder, validate_vehicle};

/// All vehicles with their reminders and service history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Garage {
    /// Tracked vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Reminders for all vehicles.
    pub service_reminders: Vec<ServiceReminder>,
    /// Service history for all vehicles.
    pub service_history: Vec<ServiceHistory>,
}

impl Garage {
    /// Load and validate a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains a record that fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading snapshot from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|source| Error::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;

        let garage = Self::from_json(&contents)?;
        info!(
            "Loaded {} vehicles, {} reminders, {} service records from {}",
            garage.vehicles.len(),
            garage.service_reminders.len(),
            garage.service_history.len(),
            path.display()
        );
        Ok(garage)
    }

    /// Parse and validate a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a record fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let garage: Self = serde_json::from_str(json)?;
        garage.validate()?;
        Ok(garage)
    }

    /// Validate every record in the snapshot.
    ///
    /// Records pointing at an unknown vehicle are logged but accepted.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<()> {
        for vehicle in &self.vehicles {
            validate_vehicle(vehicle)?;
        }
        for reminder in &self.service_reminders {
            validate_reminder(reminder)?;
        }
        for entry in &self.service_history {
            validate_history(entry)?;
        }

        let known: HashSet<&str> = self.vehicles.iter().map(|v| v.id.as_str()).collect();
        for reminder in &self.service_reminders {
            if !known.contains(reminder.vehicle_id.as_str()) {
                warn!(
                    "Reminder {} refers to unknown vehicle {}",
                    reminder.id, reminder.vehicle_id
                );
            }
        }
        for entry in &self.service_history {
            if !known.contains(entry.vehicle_id.as_str()) {
                warn!(
                    "Service record {} refers to unknown vehicle {}",
                    entry.id, entry.vehicle_id
                );
            }
        }

        Ok(())
    }

    /// Look up a vehicle by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VehicleNotFound`] if no vehicle has that id.
    pub fn vehicle(&self, id: &str) -> Result<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::VehicleNotFound(id.to_string()))
    }

    /// The most recently created vehicle.
    ///
    /// Vehicles without a creation time rank oldest; among equals the first
    /// listed wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoVehicles`] if the garage is empty.
    pub fn default_vehicle(&self) -> Result<&Vehicle> {
        self.vehicles
            .iter()
            .rev()
            .max_by_key(|v| v.created_at)
            .ok_or(Error::NoVehicles)
    }

    /// Select a vehicle by id, or the default vehicle when no id is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown or the garage is empty.
    pub fn select_vehicle(&self, id: Option<&str>) -> Result<&Vehicle> {
        match id {
            Some(id) => self.vehicle(id),
            None => self.default_vehicle(),
        }
    }

    /// Reminders configured for a vehicle, in snapshot order.
    #[must_use]
    pub fn reminders_for(&self, vehicle_id: &str) -> Vec<ServiceReminder> {
        self.service_reminders
            .iter()
            .filter(|r| r.vehicle_id == vehicle_id)
            .cloned()
            .collect()
    }

    /// Service history for a vehicle, newest first.
    #[must_use]
    pub fn history_for(&self, vehicle_id: &str) -> Vec<ServiceHistory> {
        let mut history: Vec<ServiceHistory> = self
            .service_history
            .iter()
            .filter(|h| h.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.service_date.cmp(&a.service_date));
        history
    }

    /// Evaluate a vehicle's reminders.
    #[must_use]
    pub fn due_report(&self, vehicle: &Vehicle, engine: &ReminderEngine) -> DueReport {
        let reminders = self.reminders_for(&vehicle.id);
        let history = self.history_for(&vehicle.id);
        engine.report(vehicle, &reminders, &history)
    }
}
