//! CSV-backed implementation of DriverRepository

use std::path::PathBuf;

use kursy_domain::repository::DriverRepository;
use kursy_domain::Driver;
use kursy_types::Error;

use crate::csv_loader::load_drivers;

/// Driver list read from a CSV file on every `find_all`
pub struct CsvDriverRepository {
    csv_path: PathBuf,
    strict: bool,
}

impl CsvDriverRepository {
    /// With `strict`, a missing file is an error instead of sample data
    pub fn new(csv_path: PathBuf, strict: bool) -> Self {
        Self { csv_path, strict }
    }
}

impl DriverRepository for CsvDriverRepository {
    fn find_all(&self) -> Result<Vec<Driver>, Error> {
        load_drivers(&self.csv_path, self.strict).map_err(Into::into)
    }
}
