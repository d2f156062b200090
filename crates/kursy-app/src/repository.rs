//! Repository adapters for the infrastructure layer

use std::path::PathBuf;

use kursy_infra::persistence::{CsvDriverRepository, CsvVehicleRepository};
use kursy_types::Result;

use crate::config::Config;
use crate::session::Session;

/// Open the driver repository configured for this run
pub fn open_driver_repo(config: &Config) -> CsvDriverRepository {
    CsvDriverRepository::new(config.drivers_csv.clone(), config.strict_sources)
}

/// Open the vehicle repository configured for this run
pub fn open_vehicle_repo(config: &Config) -> CsvVehicleRepository {
    CsvVehicleRepository::new(config.vehicles_csv.clone(), config.strict_sources)
}

/// Load a fresh session from the configured CSV files
pub fn open_session(config: &Config) -> Result<Session> {
    Session::load(&open_driver_repo(config), &open_vehicle_repo(config))
}

/// Load a fresh session from explicit CSV paths
pub fn open_session_at(drivers_csv: PathBuf, vehicles_csv: PathBuf, strict: bool) -> Result<Session> {
    Session::load(
        &CsvDriverRepository::new(drivers_csv, strict),
        &CsvVehicleRepository::new(vehicles_csv, strict),
    )
}
