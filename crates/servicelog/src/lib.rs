//! `servicelog` - Vehicle service reminders and maintenance history
//!
//! This library evaluates service reminders against a vehicle's odometer,
//! service history and purchase date, and reports which services are due.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod model;
pub mod reminder;
pub mod snapshot;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{ServiceHistory, ServiceReminder, Vehicle};
pub use reminder::{
    compute_due_statuses, DueReport, DueStatus, DueSummary, MonthOverflow, ReminderEngine,
};
pub use snapshot::Garage;
