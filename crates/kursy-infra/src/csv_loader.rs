//! CSV loaders for driver and vehicle lists
//!
//! Files exported from spreadsheets are often Windows-1250 rather than UTF-8;
//! both are accepted. Malformed rows are skipped, never fatal.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use encoding_rs::WINDOWS_1250;
use kursy_domain::service::parse_leave_date;
use kursy_domain::{Driver, Vehicle};
use kursy_types::DriverStatus;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::sample_data::{sample_drivers, sample_vehicles};

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Source file not found: {0}")]
    SourceMissing(String),
}

impl From<CsvLoaderError> for kursy_types::Error {
    fn from(err: CsvLoaderError) -> Self {
        match err {
            CsvLoaderError::IoError(e) => kursy_types::Error::Io(e),
            CsvLoaderError::SourceMissing(path) => kursy_types::Error::DataSourceMissing(path),
            other => kursy_types::Error::CsvLoader(other.to_string()),
        }
    }
}

/// Load drivers from a CSV file with columns
/// `imie,nazwisko,kategorie,status[,urlop_od,urlop_do]`.
///
/// A missing file yields the built-in sample drivers unless `strict` is set.
pub fn load_drivers<P: AsRef<Path>>(path: P, strict: bool) -> Result<Vec<Driver>, CsvLoaderError> {
    let path = path.as_ref();
    let Some(text) = read_source(path, strict)? else {
        return Ok(sample_drivers());
    };

    let mut reader = reader_for(&text);
    let columns = column_index(reader.headers()?);

    let mut drivers = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row_num = row_idx + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(row = row_num, error = %e, "unreadable driver row skipped");
                continue;
            }
        };
        if let Some(driver) = parse_driver(&record, &columns, row_num) {
            drivers.push(driver);
        }
    }

    if drivers.is_empty() {
        warn!(path = %path.display(), "no drivers loaded");
    } else {
        info!(path = %path.display(), count = drivers.len(), "drivers loaded");
    }
    Ok(drivers)
}

/// Load vehicles from a CSV file with columns
/// `rejestracja|nazwa[,kategorie],status[,marka,model]`.
///
/// A missing file yields the built-in sample vehicles unless `strict` is set.
pub fn load_vehicles<P: AsRef<Path>>(path: P, strict: bool) -> Result<Vec<Vehicle>, CsvLoaderError> {
    let path = path.as_ref();
    let Some(text) = read_source(path, strict)? else {
        return Ok(sample_vehicles());
    };

    let mut reader = reader_for(&text);
    let columns = column_index(reader.headers()?);

    let mut vehicles = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row_num = row_idx + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(row = row_num, error = %e, "unreadable vehicle row skipped");
                continue;
            }
        };
        if let Some(vehicle) = parse_vehicle(&record, &columns, row_num) {
            vehicles.push(vehicle);
        }
    }

    if vehicles.is_empty() {
        warn!(path = %path.display(), "no vehicles loaded");
    } else {
        info!(path = %path.display(), count = vehicles.len(), "vehicles loaded");
    }
    Ok(vehicles)
}

/// Read and decode the file; `None` means "use sample data"
fn read_source(path: &Path, strict: bool) -> Result<Option<String>, CsvLoaderError> {
    if !path.is_file() {
        if strict {
            return Err(CsvLoaderError::SourceMissing(path.display().to_string()));
        }
        warn!(path = %path.display(), "file not found, using built-in sample data");
        return Ok(None);
    }
    let bytes = std::fs::read(path)?;
    Ok(Some(decode(bytes)))
}

/// UTF-8 (BOM stripped) or, failing that, Windows-1250
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        },
        Err(e) => {
            let (decoded, _, had_errors) = WINDOWS_1250.decode(e.as_bytes());
            if had_errors {
                warn!("some characters could not be decoded from Windows-1250");
            } else {
                debug!("decoded source as Windows-1250");
            }
            decoded.into_owned()
        }
    }
}

fn reader_for(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

/// Lower-cased header name → column position
fn column_index(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect()
}

fn field<'r>(record: &'r csv::StringRecord, columns: &HashMap<String, usize>, name: &str) -> &'r str {
    columns
        .get(name)
        .and_then(|&idx| record.get(idx))
        .map(str::trim)
        .unwrap_or("")
}

/// "B, C ,C+E" → {B, C, C+E}
fn split_categories(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_driver(
    record: &csv::StringRecord,
    columns: &HashMap<String, usize>,
    row_num: usize,
) -> Option<Driver> {
    let first = field(record, columns, "imie");
    let last = field(record, columns, "nazwisko");
    if first.is_empty() || last.is_empty() {
        warn!(row = row_num, "driver row without first or last name skipped");
        return None;
    }

    let status_text = field(record, columns, "status");
    let Some(status) = DriverStatus::parse(status_text) else {
        warn!(row = row_num, status = status_text, "driver row with unknown status skipped");
        return None;
    };

    let leave_from = field(record, columns, "urlop_od");
    let leave_to = field(record, columns, "urlop_do");
    let leave_start = parse_leave_date(leave_from);
    let leave_end = parse_leave_date(leave_to);
    if (!leave_from.is_empty() && leave_start.is_none()) || (!leave_to.is_empty() && leave_end.is_none()) {
        debug!(row = row_num, leave_from, leave_to, "malformed leave dates ignored");
    }

    Some(Driver {
        name: format!("{} {}", first, last),
        qualifications: split_categories(field(record, columns, "kategorie")),
        status,
        leave_start,
        leave_end,
    })
}

/// Vehicle status text → serviceable flag; `None` when unrecognized
fn parse_serviceable(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "" | "sprawne" | "sprawny" | "operational" | "ok" => Some(true),
        "niesprawne" | "niesprawny" | "out-of-service" | "serwis" => Some(false),
        _ => None,
    }
}

fn parse_vehicle(
    record: &csv::StringRecord,
    columns: &HashMap<String, usize>,
    row_num: usize,
) -> Option<Vehicle> {
    let id = match field(record, columns, "rejestracja") {
        "" => field(record, columns, "nazwa"),
        id => id,
    };
    if id.is_empty() {
        warn!(row = row_num, "vehicle row without registration skipped");
        return None;
    }

    let status_text = field(record, columns, "status");
    let serviceable = parse_serviceable(status_text).unwrap_or_else(|| {
        warn!(
            row = row_num,
            vehicle = id,
            status = status_text,
            "unknown vehicle status, marked out of service"
        );
        false
    });

    let label = format!(
        "{} {}",
        field(record, columns, "marka"),
        field(record, columns, "model")
    )
    .trim()
    .to_string();

    Some(Vehicle {
        id: id.to_string(),
        required_qualifications: split_categories(field(record, columns, "kategorie")),
        serviceable,
        label: if label.is_empty() { None } else { Some(label) },
    })
}
