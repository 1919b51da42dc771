//! Service reminder evaluation.
//!
//! Given a vehicle's reminders, its service history, current mileage and
//! purchase date, the engine works out which services are due and in what
//! order they should be shown.
//!
//! A reminder is due when:
//!
//! - **No record**: no history entry of the same service type exists.
//! - **Mileage**: the odometer has reached the last service mileage plus the
//!   reminder's interval.
//! - **Time**: the reminder has a month interval and today is on or after the
//!   last service date (or purchase date) plus that many months.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use servicelog::model::{ServiceHistory, ServiceReminder};
//! use servicelog::reminder::ReminderEngine;
//!
//! let reminder = ServiceReminder {
//!     id: "r1".to_string(),
//!     vehicle_id: "v1".to_string(),
//!     service_type: "Oil Change".to_string(),
//!     mileage_interval: 10_000,
//!     last_service_mileage: 0,
//!     time_interval_months: Some(6),
//! };
//! let history = vec![ServiceHistory {
//!     id: "h1".to_string(),
//!     vehicle_id: "v1".to_string(),
//!     service_type: "oil change".to_string(),
//!     service_date: NaiveDate::from_ymd_opt(2026, 5, 19).unwrap(),
//!     mileage_at_service: 50_000,
//!     mechanic_name: String::new(),
//!     notes: String::new(),
//!     total_cost: 0.0,
//! }];
//!
//! let engine = ReminderEngine::at(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//! let statuses = engine.compute_due_statuses(&[reminder], &history, 55_000, None);
//!
//! assert!(!statuses[0].is_due);
//! assert_eq!(statuses[0].next_due_mileage, 60_000);
//! ```

pub mod calendar;
mod engine;
pub mod ordering;

pub use calendar::MonthOverflow;
pub use engine::{
    compute_due_statuses, latest_matching, DueReport, DueStatus, DueSummary, ReminderEngine,
};
pub use ordering::{compare_priority, sort_by_priority, MONTH_WEIGHT};
