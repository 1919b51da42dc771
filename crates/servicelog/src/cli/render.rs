//! Output rendering for CLI commands.
//!
//! Every renderer returns the text to print so handlers stay thin and output
//! can be tested without capturing stdout.

use serde_json::json;

use crate::listing::{format_time_interval, vehicle_name};
use crate::model::{ServiceHistory, ServiceReminder, Vehicle};
use crate::reminder::{DueReport, DueStatus};

use super::OutputFormat;

/// Format a distance with thousands separators, e.g. `61,000`.
#[must_use]
pub fn format_km(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Overdue banner text, if anything is due.
#[must_use]
pub fn overdue_banner(report: &DueReport) -> Option<String> {
    report.summary.has_any_overdue().then(|| {
        format!(
            "Overdue Service: {} service(s) overdue for maintenance",
            report.summary.overdue_count
        )
    })
}

/// Render due statuses for a vehicle, showing at most `limit` entries.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_due(
    vehicle: &Vehicle,
    report: &DueReport,
    limit: Option<usize>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    let total = report.statuses.len();
    let shown = &report.statuses[..limit.map_or(total, |limit| limit.min(total))];

    if format == OutputFormat::Json {
        let value = json!({
            "vehicle_id": vehicle.id,
            "current_mileage": vehicle.current_mileage,
            "statuses": shown,
            "overdue_count": report.summary.overdue_count,
            "no_record_count": report.summary.no_record_count,
            "has_any_overdue": report.summary.has_any_overdue(),
        });
        return serde_json::to_string_pretty(&value);
    }

    let mut lines = vec![format!(
        "{} at {} km",
        vehicle.display_name(),
        format_km(vehicle.current_mileage)
    )];
    lines.extend(overdue_banner(report));
    if report.statuses.is_empty() {
        lines.push("No service reminders configured.".to_string());
        return Ok(join_lines(&lines));
    }
    lines.push(String::new());

    match format {
        OutputFormat::Table => {
            let rows = shown
                .iter()
                .map(|s| {
                    vec![
                        s.reminder.service_type.clone(),
                        format_km(s.next_due_mileage),
                        format_km(s.miles_until_due),
                        s.due_date.map_or_else(|| "-".to_string(), |d| d.to_string()),
                        s.last_service_date
                            .map_or_else(|| "never".to_string(), |d| d.to_string()),
                        status_label(s).to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            lines.extend(table(
                &["Service", "Due at (km)", "Left (km)", "Due date", "Last service", "Status"],
                &rows,
            ));
        }
        OutputFormat::Plain | OutputFormat::Json => lines.extend(shown.iter().map(due_line)),
    }

    let hidden = total - shown.len();
    if hidden > 0 {
        lines.push(format!("... and {hidden} more (use --all to show)"));
    }
    Ok(join_lines(&lines))
}

fn status_label(status: &DueStatus) -> &'static str {
    if status.has_no_service_record {
        "NO RECORD"
    } else if status.is_due {
        "DUE"
    } else {
        "ok"
    }
}

fn due_line(status: &DueStatus) -> String {
    let due_on = status
        .due_date
        .map(|date| format!(" or on {date}"))
        .unwrap_or_default();
    let left = if status.is_due {
        String::new()
    } else {
        format!(" ({} km left)", format_km(status.miles_until_due))
    };

    format!(
        "[{}] {}: due at {} km{due_on}{left}",
        status_label(status),
        status.reminder.service_type,
        format_km(status.next_due_mileage)
    )
}

/// Render a reminder table.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_reminders(
    reminders: &[ServiceReminder],
    vehicles: &[Vehicle],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reminders),
        _ if reminders.is_empty() => Ok("No reminders found\n".to_string()),
        OutputFormat::Table => {
            let rows = reminders
                .iter()
                .map(|r| {
                    vec![
                        r.service_type.clone(),
                        vehicle_name(vehicles, &r.vehicle_id),
                        format_km(r.mileage_interval),
                        format_time_interval(r.time_interval()),
                        format_km(r.last_service_mileage),
                    ]
                })
                .collect::<Vec<_>>();
            Ok(join_lines(&table(
                &["Service", "Vehicle", "Every (km)", "Every", "Last service (km)"],
                &rows,
            )))
        }
        OutputFormat::Plain => {
            let lines: Vec<String> = reminders
                .iter()
                .map(|r| {
                    format!(
                        "{} ({}): every {} km / {}",
                        r.service_type,
                        vehicle_name(vehicles, &r.vehicle_id),
                        format_km(r.mileage_interval),
                        format_time_interval(r.time_interval())
                    )
                })
                .collect();
            Ok(join_lines(&lines))
        }
    }
}

/// Render service history with its total cost.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_history(
    history: &[ServiceHistory],
    format: OutputFormat,
) -> serde_json::Result<String> {
    let total: f64 = history.iter().map(|h| h.total_cost).sum();

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "service_history": history,
            "total_cost": total,
        })),
        _ if history.is_empty() => Ok("No service records\n".to_string()),
        OutputFormat::Table => {
            let rows = history
                .iter()
                .map(|h| {
                    vec![
                        h.service_date.to_string(),
                        h.service_type.clone(),
                        format_km(h.mileage_at_service),
                        h.mechanic_name.clone(),
                        format!("{:.2}", h.total_cost),
                    ]
                })
                .collect::<Vec<_>>();
            let mut lines = table(
                &["Date", "Service", "Mileage (km)", "Mechanic", "Cost (EUR)"],
                &rows,
            );
            lines.push(format!("Total: {total:.2} EUR"));
            Ok(join_lines(&lines))
        }
        OutputFormat::Plain => {
            let mut lines: Vec<String> = history
                .iter()
                .map(|h| {
                    format!(
                        "{} {} at {} km, {:.2} EUR",
                        h.service_date,
                        h.service_type,
                        format_km(h.mileage_at_service),
                        h.total_cost
                    )
                })
                .collect();
            lines.push(format!("Total: {total:.2} EUR"));
            Ok(join_lines(&lines))
        }
    }
}

/// Render the vehicle list.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_vehicles(vehicles: &[Vehicle], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(vehicles),
        _ if vehicles.is_empty() => Ok("No vehicles\n".to_string()),
        OutputFormat::Table => {
            let rows = vehicles
                .iter()
                .map(|v| {
                    vec![
                        v.id.clone(),
                        v.display_name(),
                        format_km(v.current_mileage),
                        v.purchase_date.map_or_else(|| "-".to_string(), |d| d.to_string()),
                    ]
                })
                .collect::<Vec<_>>();
            Ok(join_lines(&table(
                &["Id", "Vehicle", "Mileage (km)", "Purchased"],
                &rows,
            )))
        }
        OutputFormat::Plain => {
            let lines: Vec<String> = vehicles
                .iter()
                .map(|v| format!("{}: {}", v.id, v.display_name()))
                .collect();
            Ok(join_lines(&lines))
        }
    }
}

/// Join lines, terminating each with a newline.
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Lay out rows as left-aligned columns under a header and a rule.
fn table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    [header, rule]
        .iter()
        .chain(rows)
        .map(|cells| table_row(cells, &widths))
        .collect()
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::ReminderEngine;
    use chrono::NaiveDate;

    fn vehicle() -> Vehicle {
        Vehicle {
            id: "v1".to_string(),
            make: "Skoda".to_string(),
            model: "Octavia".to_string(),
            year: Some(2019),
            engine: String::new(),
            transmission: String::new(),
            current_mileage: 61_000,
            notes: String::new(),
            purchase_date: NaiveDate::from_ymd_opt(2019, 4, 1),
            created_at: None,
        }
    }

    fn reminder(id: &str, service_type: &str, interval: i64) -> ServiceReminder {
        ServiceReminder {
            id: id.to_string(),
            vehicle_id: "v1".to_string(),
            service_type: service_type.to_string(),
            mileage_interval: interval,
            last_service_mileage: 0,
            time_interval_months: Some(6),
        }
    }

    fn history() -> Vec<ServiceHistory> {
        vec![
            ServiceHistory {
                id: "h1".to_string(),
                vehicle_id: "v1".to_string(),
                service_type: "Oil Change".to_string(),
                service_date: NaiveDate::from_ymd_opt(2026, 5, 19).unwrap(),
                mileage_at_service: 50_000,
                mechanic_name: "Garage Nord".to_string(),
                notes: String::new(),
                total_cost: 89.5,
            },
            ServiceHistory {
                id: "h2".to_string(),
                vehicle_id: "v1".to_string(),
                service_type: "Brake Pads".to_string(),
                service_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                mileage_at_service: 60_000,
                mechanic_name: String::new(),
                notes: String::new(),
                total_cost: 210.0,
            },
        ]
    }

    fn report() -> DueReport {
        let engine = ReminderEngine::at(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let reminders = vec![
            reminder("oil", "Oil Change", 10_000),
            reminder("brakes", "Brake Pads", 30_000),
            reminder("coolant", "Coolant", 60_000),
        ];
        engine.report(&vehicle(), &reminders, &history())
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(0), "0");
        assert_eq!(format_km(999), "999");
        assert_eq!(format_km(1_000), "1,000");
        assert_eq!(format_km(61_000), "61,000");
        assert_eq!(format_km(1_234_567), "1,234,567");
        assert_eq!(format_km(-1_500), "-1,500");
    }

    #[test]
    fn test_overdue_banner() {
        let banner = overdue_banner(&report()).unwrap();
        assert_eq!(banner, "Overdue Service: 2 service(s) overdue for maintenance");

        let empty = ReminderEngine::at(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .report(&vehicle(), &[], &[]);
        assert!(overdue_banner(&empty).is_none());
    }

    #[test]
    fn test_render_due_plain() {
        let out = render_due(&vehicle(), &report(), None, OutputFormat::Plain).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "2019 Skoda Octavia at 61,000 km");
        assert!(lines[1].starts_with("Overdue Service: 2"));
        assert!(lines[3].starts_with("[NO RECORD] Coolant"));
        assert!(lines[4].starts_with("[DUE] Oil Change: due at 60,000 km"));
        assert_eq!(
            lines[5],
            "[ok] Brake Pads: due at 90,000 km or on 2027-03-01 (29,000 km left)"
        );
    }

    #[test]
    fn test_render_due_limit() {
        let out = render_due(&vehicle(), &report(), Some(1), OutputFormat::Plain).unwrap();
        assert!(out.contains("Coolant"));
        assert!(!out.contains("Brake Pads"));
        assert!(out.contains("and 2 more"));
    }

    #[test]
    fn test_render_due_table() {
        let out = render_due(&vehicle(), &report(), None, OutputFormat::Table).unwrap();
        assert!(out.contains("Service"));
        assert!(out.contains("NO RECORD"));
        assert!(out.contains("never"));
        assert!(out.contains("2026-11-19"));
    }

    #[test]
    fn test_render_due_json() {
        let out = render_due(&vehicle(), &report(), Some(2), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["vehicle_id"], "v1");
        assert_eq!(value["statuses"].as_array().unwrap().len(), 2);
        assert_eq!(value["overdue_count"], 2);
        assert_eq!(value["no_record_count"], 1);
        assert_eq!(value["has_any_overdue"], true);
        assert_eq!(value["statuses"][0]["service_type"], "Coolant");
    }

    #[test]
    fn test_render_due_no_reminders() {
        let empty = ReminderEngine::at(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .report(&vehicle(), &[], &[]);
        let out = render_due(&vehicle(), &empty, None, OutputFormat::Plain).unwrap();
        assert!(out.contains("No service reminders configured."));
        assert!(!out.contains("Overdue"));
    }

    #[test]
    fn test_render_reminders() {
        let reminders = vec![reminder("oil", "Oil Change", 10_000)];
        let vehicles = vec![vehicle()];

        let out = render_reminders(&reminders, &vehicles, OutputFormat::Table).unwrap();
        assert!(out.contains("2019 Skoda Octavia"));
        assert!(out.contains("10,000"));
        assert!(out.contains("6 months"));

        let out = render_reminders(&reminders, &[], OutputFormat::Plain).unwrap();
        assert_eq!(out, "Oil Change (Unknown Vehicle): every 10,000 km / 6 months\n");

        let out = render_reminders(&[], &vehicles, OutputFormat::Table).unwrap();
        assert_eq!(out, "No reminders found\n");
    }

    #[test]
    fn test_render_history() {
        let out = render_history(&history(), OutputFormat::Table).unwrap();
        assert!(out.contains("Garage Nord"));
        assert!(out.contains("Total: 299.50 EUR"));

        let out = render_history(&history(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["service_history"].as_array().unwrap().len(), 2);
        assert_eq!(value["total_cost"], 299.5);

        let out = render_history(&[], OutputFormat::Plain).unwrap();
        assert_eq!(out, "No service records\n");
    }

    #[test]
    fn test_render_vehicles() {
        let out = render_vehicles(&[vehicle()], OutputFormat::Plain).unwrap();
        assert_eq!(out, "v1: 2019 Skoda Octavia\n");

        let out = render_vehicles(&[vehicle()], OutputFormat::Table).unwrap();
        assert!(out.contains("2019-04-01"));
        assert!(out.contains("61,000"));
    }

    #[test]
    fn test_table_alignment() {
        let lines = table(
            &["A", "Long header"],
            &[vec!["wide cell".to_string(), "x".to_string()]],
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "A          Long header");
        assert_eq!(lines[1], "---------  -----------");
        assert_eq!(lines[2], "wide cell  x");
    }
}
