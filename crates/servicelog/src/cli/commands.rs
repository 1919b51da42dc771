//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::listing::ReminderColumn;

/// Due command arguments.
#[derive(Debug, Args)]
pub struct DueCommand {
    /// Vehicle id (defaults to the most recently added vehicle)
    pub vehicle: Option<String>,

    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Show every reminder instead of the configured display limit
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Reminders command arguments.
#[derive(Debug, Args)]
pub struct RemindersCommand {
    /// Vehicle id (defaults to all vehicles)
    pub vehicle: Option<String>,

    /// Sort by this column
    #[arg(long, value_enum)]
    pub sort: Option<ReminderColumnArg>,

    /// Sort descending instead of ascending
    #[arg(short, long, requires = "sort")]
    pub desc: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// History command arguments.
#[derive(Debug, Args)]
pub struct HistoryCommand {
    /// Vehicle id (defaults to the most recently added vehicle)
    pub vehicle: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Vehicles command arguments.
#[derive(Debug, Args)]
pub struct VehiclesCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Reminder table column argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReminderColumnArg {
    /// Service type
    ServiceType,
    /// Vehicle name
    Vehicle,
    /// Mileage interval
    Mileage,
    /// Time interval
    Time,
    /// Last service mileage
    LastService,
}

impl From<ReminderColumnArg> for ReminderColumn {
    fn from(arg: ReminderColumnArg) -> Self {
        match arg {
            ReminderColumnArg::ServiceType => Self::ServiceType,
            ReminderColumnArg::Vehicle => Self::Vehicle,
            ReminderColumnArg::Mileage => Self::MileageInterval,
            ReminderColumnArg::Time => Self::TimeInterval,
            ReminderColumnArg::LastService => Self::LastServiceMileage,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
