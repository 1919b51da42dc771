//! `svclog` - CLI for servicelog
//!
//! This binary reads a garage snapshot and reports due services, reminders,
//! service history and vehicles.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use tracing::info;

use servicelog::cli::render::{render_due, render_history, render_reminders, render_vehicles};
use servicelog::cli::{
    Cli, Command, ConfigCommand, DueCommand, HistoryCommand, RemindersCommand, VehiclesCommand,
};
use servicelog::listing::SortState;
use servicelog::{init_logging, Config, Garage, ReminderEngine};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;
    let snapshot_path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| config.snapshot_path());

    let load_garage = || {
        Garage::load(&snapshot_path)
            .with_context(|| format!("failed to load snapshot {}", snapshot_path.display()))
    };

    match cli.command {
        Command::Due(cmd) => handle_due(&config, &load_garage()?, &cmd),
        Command::Reminders(cmd) => handle_reminders(&load_garage()?, &cmd),
        Command::History(cmd) => handle_history(&load_garage()?, &cmd),
        Command::Vehicles(cmd) => handle_vehicles(&load_garage()?, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_due(config: &Config, garage: &Garage, cmd: &DueCommand) -> anyhow::Result<()> {
    let vehicle = garage.select_vehicle(cmd.vehicle.as_deref())?;
    let engine = cmd
        .today
        .map_or_else(ReminderEngine::new, ReminderEngine::at)
        .with_month_overflow(config.reminders.month_overflow);
    info!("Evaluating {} as of {}", vehicle.id, engine.today());

    let report = garage.due_report(vehicle, &engine);
    let limit = (!cmd.all).then_some(config.reminders.display_limit);
    print!("{}", render_due(vehicle, &report, limit, cmd.format)?);
    Ok(())
}

fn handle_reminders(garage: &Garage, cmd: &RemindersCommand) -> anyhow::Result<()> {
    let reminders = match cmd.vehicle.as_deref() {
        Some(id) => garage.reminders_for(&garage.vehicle(id)?.id),
        None => garage.service_reminders.clone(),
    };

    let mut sort = SortState::new();
    if let Some(column) = cmd.sort {
        sort = sort.toggle(column.into());
        if cmd.desc {
            sort = sort.toggle(column.into());
        }
    }

    let sorted = sort.apply(&reminders, &garage.vehicles);
    print!("{}", render_reminders(&sorted, &garage.vehicles, cmd.format)?);
    Ok(())
}

fn handle_history(garage: &Garage, cmd: &HistoryCommand) -> anyhow::Result<()> {
    let vehicle = garage.select_vehicle(cmd.vehicle.as_deref())?;
    let history = garage.history_for(&vehicle.id);
    print!("{}", render_history(&history, cmd.format)?);
    Ok(())
}

fn handle_vehicles(garage: &Garage, cmd: &VehiclesCommand) -> anyhow::Result<()> {
    print!("{}", render_vehicles(&garage.vehicles, cmd.format)?);
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Snapshot]");
                println!("  Path:            {}", config.snapshot_path().display());
                println!();
                println!("[Reminders]");
                println!("  Display limit:   {}", config.reminders.display_limit);
                println!("  Month overflow:  {}", config.reminders.month_overflow);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
