//! Built-in records used when no data files are present

use kursy_domain::{Driver, Vehicle};
use kursy_types::DriverStatus;

pub fn sample_drivers() -> Vec<Driver> {
    vec![
        Driver::new("Jan Kowalski", ["B"]),
        Driver::new("Anna Nowak", ["B", "C"]).with_status(DriverStatus::Sick),
        Driver::new("Piotr Zielinski", ["B", "C"]).with_status(DriverStatus::OnLeave),
    ]
}

pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("ABC123").with_label("Toyota Corolla"),
        Vehicle::new("XYZ987")
            .with_label("Ford Transit")
            .out_of_service(),
    ]
}
