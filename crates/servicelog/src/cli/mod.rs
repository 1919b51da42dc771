//! Command-line interface for servicelog.
//!
//! This module provides the CLI structure and output rendering for the
//! `svclog` binary.

mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DueCommand, HistoryCommand, OutputFormat, ReminderColumnArg, RemindersCommand,
    VehiclesCommand,
};

/// svclog - Know which services your vehicles are due for
///
/// Reads a garage snapshot (vehicles, service reminders and service history)
/// and reports which reminders are due by mileage or by time.
#[derive(Debug, Parser)]
#[command(name = "svclog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the garage snapshot (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show which services are due for a vehicle
    Due(DueCommand),

    /// List configured service reminders
    Reminders(RemindersCommand),

    /// List service history, newest first
    History(HistoryCommand),

    /// List vehicles
    Vehicles(VehiclesCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
