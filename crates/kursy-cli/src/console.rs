//! Interactive operator console
//!
//! One command per line, arguments split like a shell so names with spaces
//! can be quoted: `assign XYZ987 "I kurs" "Anna Nowak"`.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use kursy_app::Session;
use kursy_domain::Course;
use kursy_types::{DriverStatus, Error, OutputFormat, Result};

use crate::output::{print_board, print_candidates, print_courses, print_drivers, print_vehicles};

const HELP: &str = "\
Commands:
  board                          show the assignment board
  drivers | vehicles | courses   list entities
  candidates VEHICLE COURSE      drivers that may take the slot
  assign VEHICLE COURSE DRIVER   place a driver
  clear VEHICLE COURSE           empty a slot
  select VEHICLE COURSE          make a slot active
  assign-active DRIVER           place a driver in the active slot
  assign-free DRIVER             place a driver in the first free slot
  status DRIVER STATUS           available | sick | on-leave (dostepny | choroba | urlop)
  service VEHICLE on|off         mark a vehicle operational or out of service
  date YYYY-MM-DD                change the planning date
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Board,
    Drivers,
    Vehicles,
    Courses,
    Candidates { vehicle: String, course: Course },
    Assign { vehicle: String, course: Course, driver: String },
    Clear { vehicle: String, course: Course },
    Select { vehicle: String, course: Course },
    AssignActive { driver: String },
    AssignFree { driver: String },
    Status { driver: String, status: DriverStatus },
    Service { vehicle: String, serviceable: bool },
    Date(NaiveDate),
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parse split words; the error is a usage message
    pub fn parse(words: &[String]) -> std::result::Result<Self, String> {
        let (name, args) = words
            .split_first()
            .ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let command = match (name.as_str(), args.as_slice()) {
            ("board", []) => ConsoleCommand::Board,
            ("drivers", []) => ConsoleCommand::Drivers,
            ("vehicles", []) => ConsoleCommand::Vehicles,
            ("courses", []) => ConsoleCommand::Courses,
            ("candidates", [vehicle, course]) => ConsoleCommand::Candidates {
                vehicle: vehicle.to_string(),
                course: parse_course(course)?,
            },
            ("assign", [vehicle, course, driver]) => ConsoleCommand::Assign {
                vehicle: vehicle.to_string(),
                course: parse_course(course)?,
                driver: driver.to_string(),
            },
            ("clear", [vehicle, course]) => ConsoleCommand::Clear {
                vehicle: vehicle.to_string(),
                course: parse_course(course)?,
            },
            ("select", [vehicle, course]) => ConsoleCommand::Select {
                vehicle: vehicle.to_string(),
                course: parse_course(course)?,
            },
            ("assign-active", [driver]) => ConsoleCommand::AssignActive {
                driver: driver.to_string(),
            },
            ("assign-free", [driver]) => ConsoleCommand::AssignFree {
                driver: driver.to_string(),
            },
            ("status", [driver, status]) => ConsoleCommand::Status {
                driver: driver.to_string(),
                status: status.parse().map_err(|e: Error| e.to_string())?,
            },
            ("service", [vehicle, state]) => ConsoleCommand::Service {
                vehicle: vehicle.to_string(),
                serviceable: parse_switch(state)?,
            },
            ("date", [date]) => ConsoleCommand::Date(
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|_| format!("invalid date: {} (expected YYYY-MM-DD)", date))?,
            ),
            ("help", _) | ("?", _) => ConsoleCommand::Help,
            ("quit", _) | ("exit", _) => ConsoleCommand::Quit,
            (other, _) => {
                return Err(format!("unknown command or wrong arguments: {} (try 'help')", other))
            }
        };
        Ok(command)
    }
}

fn parse_course(text: &str) -> std::result::Result<Course, String> {
    text.parse().map_err(|e: Error| e.to_string())
}

fn parse_switch(text: &str) -> std::result::Result<bool, String> {
    match text.to_lowercase().as_str() {
        "on" | "sprawne" | "true" | "yes" => Ok(true),
        "off" | "niesprawne" | "false" | "no" => Ok(false),
        _ => Err(format!("expected on|off, got: {}", text)),
    }
}

/// Read commands from stdin until `quit` or end of input
pub fn run_console(session: &mut Session, today: NaiveDate, format: OutputFormat) -> Result<()> {
    let mut today = today;
    println!("Kursy console - planning date {}. Type 'help' for commands.", today);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let words = match shell_words::split(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {}", e);
                prompt()?;
                continue;
            }
        };
        if words.is_empty() {
            prompt()?;
            continue;
        }

        match ConsoleCommand::parse(&words) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) = apply(session, &mut today, format, command) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(usage) => eprintln!("{}", usage),
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn apply(
    session: &mut Session,
    today: &mut NaiveDate,
    format: OutputFormat,
    command: ConsoleCommand,
) -> Result<()> {
    match command {
        ConsoleCommand::Board => print_board(format, &session.snapshot(*today))?,
        ConsoleCommand::Drivers => print_drivers(format, &session.snapshot(*today))?,
        ConsoleCommand::Vehicles => print_vehicles(format, &session.snapshot(*today))?,
        ConsoleCommand::Courses => print_courses(format, session.list_courses())?,
        ConsoleCommand::Candidates { vehicle, course } => {
            print_candidates(format, &session.eligible_candidates(&vehicle, course, *today)?)?
        }
        ConsoleCommand::Assign {
            vehicle,
            course,
            driver,
        } => {
            let result = session.assign(&vehicle, course, Some(&driver), *today);
            report_assignment(session, *today, format, &vehicle, course, &driver, result)?;
        }
        ConsoleCommand::Clear { vehicle, course } => {
            match session.assign(&vehicle, course, None, *today)? {
                Some(previous) => println!("{} / {}: cleared ({})", vehicle, course, previous),
                None => println!("{} / {}: already empty", vehicle, course),
            }
        }
        ConsoleCommand::Select { vehicle, course } => {
            session.select_slot(&vehicle, course)?;
            println!("Active slot: {} / {}", vehicle, course);
        }
        ConsoleCommand::AssignActive { driver } => {
            let slot = session.active_slot().cloned().ok_or(Error::NoActiveSlot)?;
            let result = session.assign_to_active(&driver, *today);
            report_assignment(session, *today, format, &slot.vehicle, slot.course, &driver, result)?;
        }
        ConsoleCommand::AssignFree { driver } => {
            let slot = session.assign_first_free(&driver, *today)?;
            println!("{}: {}", slot, driver);
        }
        ConsoleCommand::Status { driver, status } => {
            session.set_driver_status(&driver, status)?;
            println!("{}: {}", driver, status.label());
        }
        ConsoleCommand::Service {
            vehicle,
            serviceable,
        } => {
            session.set_vehicle_serviceable(&vehicle, serviceable)?;
            println!(
                "{}: {}",
                vehicle,
                if serviceable { "sprawne" } else { "niesprawne" }
            );
        }
        ConsoleCommand::Date(date) => {
            *today = date;
            println!("Planning date: {}", today);
        }
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

/// Print the outcome of an assignment; a rejected driver is followed by
/// the slot's current candidates so the operator can pick again.
fn report_assignment(
    session: &Session,
    today: NaiveDate,
    format: OutputFormat,
    vehicle: &str,
    course: Course,
    driver: &str,
    result: Result<Option<String>>,
) -> Result<()> {
    match result {
        Ok(Some(previous)) if previous != driver => {
            println!("{} / {}: {} (replaced {})", vehicle, course, driver, previous)
        }
        Ok(_) => println!("{} / {}: {}", vehicle, course, driver),
        Err(e @ Error::IneligibleAssignment { .. }) => {
            eprintln!("Error: {}", e);
            print_candidates(format, &session.eligible_candidates(vehicle, course, today)?)?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        shell_words::split(line).unwrap()
    }

    #[test]
    fn test_parse_assign_with_quoted_names() {
        let command = ConsoleCommand::parse(&words(r#"assign XYZ987 "I kurs" "Anna Nowak""#)).unwrap();
        assert_eq!(
            command,
            ConsoleCommand::Assign {
                vehicle: "XYZ987".to_string(),
                course: Course::First,
                driver: "Anna Nowak".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_status() {
        let command = ConsoleCommand::parse(&words(r#"status "Anna Nowak" choroba"#)).unwrap();
        assert_eq!(
            command,
            ConsoleCommand::Status {
                driver: "Anna Nowak".to_string(),
                status: DriverStatus::Sick,
            }
        );
        assert!(ConsoleCommand::parse(&words(r#"status "Anna Nowak" delegacja"#)).is_err());
    }

    #[test]
    fn test_parse_service_and_date() {
        assert_eq!(
            ConsoleCommand::parse(&words("service ABC123 off")).unwrap(),
            ConsoleCommand::Service {
                vehicle: "ABC123".to_string(),
                serviceable: false,
            }
        );
        assert_eq!(
            ConsoleCommand::parse(&words("date 2024-06-15")).unwrap(),
            ConsoleCommand::Date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        );
        assert!(ConsoleCommand::parse(&words("date jutro")).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(ConsoleCommand::parse(&words("assign XYZ987")).is_err());
        assert!(ConsoleCommand::parse(&words("candidates XYZ987 \"IV kurs\"")).is_err());
        assert!(ConsoleCommand::parse(&words("teleport")).is_err());
        assert!(ConsoleCommand::parse(&[]).is_err());
    }

    #[test]
    fn test_parse_quit_and_help() {
        assert_eq!(ConsoleCommand::parse(&words("exit")).unwrap(), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse(&words("help")).unwrap(), ConsoleCommand::Help);
    }
}
