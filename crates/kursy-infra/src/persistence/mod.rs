//! Repository implementations
//!
//! CSV-backed implementations of the domain repository traits.

mod csv_driver_repo;
mod csv_vehicle_repo;

pub use csv_driver_repo::CsvDriverRepository;
pub use csv_vehicle_repo::CsvVehicleRepository;
