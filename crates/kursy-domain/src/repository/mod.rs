//! Read-side traits over the loaded entities

use kursy_types::Error;

use crate::model::{Driver, Vehicle};

/// Read access to the drivers and vehicles of a session.
///
/// Iteration order is the source order and drives candidate ordering.
pub trait Roster {
    /// All drivers in source order
    fn drivers(&self) -> &[Driver];

    /// All vehicles in source order
    fn vehicles(&self) -> &[Vehicle];

    /// Find a driver by full name
    fn driver(&self, name: &str) -> Option<&Driver> {
        self.drivers().iter().find(|d| d.name == name)
    }

    /// Find a vehicle by registration
    fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles().iter().find(|v| v.id == id)
    }
}

/// Source of driver records
pub trait DriverRepository {
    /// Load all drivers in source order
    fn find_all(&self) -> Result<Vec<Driver>, Error>;
}

/// Source of vehicle records
pub trait VehicleRepository {
    /// Load all vehicles in source order
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;
}
