//! Output formatting module

use kursy_app::BoardSnapshot;
use kursy_domain::{Candidates, Course};
use kursy_types::{OutputFormat, Result};

const NAME_WIDTH: usize = 26;
const CELL_WIDTH: usize = 18;

pub fn print_board(format: OutputFormat, snapshot: &BoardSnapshot) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    let (occupied, total) = snapshot.fill();
    println!("\nAssignment Board - {}", snapshot.date);
    println!("=================================");
    if let Some(ref slot) = snapshot.active_slot {
        println!("Active slot: {}", slot);
    }

    let mut header = format!("{:<width$}", "Auto", width = NAME_WIDTH);
    for course in &snapshot.courses {
        header.push_str(&format!(" {:<width$}", course.label(), width = CELL_WIDTH));
    }
    println!("{}", header);
    println!("{}", "-".repeat(NAME_WIDTH + (CELL_WIDTH + 1) * snapshot.courses.len()));

    for row in &snapshot.vehicles {
        let marker = if row.serviceable { "  " } else { "! " };
        let mut line = format!(
            "{}{:<width$}",
            marker,
            truncate_str(&row.display_name, NAME_WIDTH - 2),
            width = NAME_WIDTH - 2
        );
        for assignment in &row.assignments {
            let cell = assignment.as_deref().unwrap_or("-");
            line.push_str(&format!(" {:<width$}", truncate_str(cell, CELL_WIDTH), width = CELL_WIDTH));
        }
        println!("{}", line);
    }

    println!();
    println!("Filled: {}/{} slots", occupied, total);
    if snapshot.vehicles.iter().any(|v| !v.serviceable) {
        println!("! = vehicle out of service");
    }
    Ok(())
}

pub fn print_drivers(format: OutputFormat, snapshot: &BoardSnapshot) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&snapshot.drivers)?);
        return Ok(());
    }

    println!("\n{:<24} {:<12} {:<22} {}", "Kierowca", "Kategorie", "Status", "Na dzień");
    println!("{}", "-".repeat(72));
    for driver in &snapshot.drivers {
        let effective = if driver.effective_status == driver.status {
            "".to_string()
        } else {
            driver.effective_status.label().to_string()
        };
        println!(
            "{:<24} {:<12} {:<22} {}",
            truncate_str(&driver.name, 24),
            driver.qualifications.join(","),
            driver.status.label(),
            effective
        );
    }
    Ok(())
}

pub fn print_vehicles(format: OutputFormat, snapshot: &BoardSnapshot) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&snapshot.vehicles)?);
        return Ok(());
    }

    println!("\n{:<26} {:<12} {}", "Auto", "Wymagania", "Stan");
    println!("{}", "-".repeat(52));
    for vehicle in &snapshot.vehicles {
        let requirements = if vehicle.required_qualifications.is_empty() {
            "-".to_string()
        } else {
            vehicle.required_qualifications.join(",")
        };
        println!(
            "{:<26} {:<12} {}",
            truncate_str(&vehicle.display_name, 26),
            requirements,
            if vehicle.serviceable { "sprawne" } else { "niesprawne" }
        );
    }
    Ok(())
}

pub fn print_courses(format: OutputFormat, courses: &[Course]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(courses)?);
        return Ok(());
    }
    for (idx, course) in courses.iter().enumerate() {
        println!("{}. {}", idx + 1, course);
    }
    Ok(())
}

pub fn print_candidates(format: OutputFormat, candidates: &Candidates) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(candidates)?);
        return Ok(());
    }

    println!("\nCandidates for {} / {}", candidates.vehicle, candidates.course);
    if candidates.is_empty() {
        println!("  (no eligible drivers)");
        return Ok(());
    }
    for option in candidates.options() {
        match option {
            None => println!("  - (unassign)"),
            Some(name) => println!("  - {}", name),
        }
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
