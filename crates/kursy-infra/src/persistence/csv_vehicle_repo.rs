//! CSV-backed implementation of VehicleRepository

use std::path::PathBuf;

use kursy_domain::repository::VehicleRepository;
use kursy_domain::Vehicle;
use kursy_types::Error;

use crate::csv_loader::load_vehicles;

/// Vehicle list read from a CSV file on every `find_all`
pub struct CsvVehicleRepository {
    csv_path: PathBuf,
    strict: bool,
}

impl CsvVehicleRepository {
    /// With `strict`, a missing file is an error instead of sample data
    pub fn new(csv_path: PathBuf, strict: bool) -> Self {
        Self { csv_path, strict }
    }
}

impl VehicleRepository for CsvVehicleRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        load_vehicles(&self.csv_path, self.strict).map_err(Into::into)
    }
}
