//! Driver and vehicle records with their mutable status

use std::collections::HashMap;

use kursy_domain::{Driver, Roster, Vehicle};
use kursy_types::{DriverStatus, Error, Result};
use tracing::{info, warn};

/// Canonical drivers and vehicles, kept in source order
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
    driver_index: HashMap<String, usize>,
    vehicle_index: HashMap<String, usize>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded records.
    ///
    /// A repeated driver name replaces the earlier record in place, so the
    /// last row wins but keeps the first row's position. A repeated vehicle
    /// registration is dropped.
    pub fn from_records(drivers: Vec<Driver>, vehicles: Vec<Vehicle>) -> Self {
        let mut store = Self::new();
        for driver in drivers {
            store.add_driver(driver);
        }
        for vehicle in vehicles {
            store.add_vehicle(vehicle);
        }
        info!(
            drivers = store.drivers.len(),
            vehicles = store.vehicles.len(),
            "entity store ready"
        );
        store
    }

    /// Add a driver; returns false if it replaced a record with the same name
    pub fn add_driver(&mut self, driver: Driver) -> bool {
        if let Some(&idx) = self.driver_index.get(&driver.name) {
            warn!(driver = %driver.name, "duplicate driver replaces earlier record");
            self.drivers[idx] = driver;
            return false;
        }
        self.driver_index
            .insert(driver.name.clone(), self.drivers.len());
        self.drivers.push(driver);
        true
    }

    /// Add a vehicle; returns false if the registration is already taken
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> bool {
        if self.vehicle_index.contains_key(&vehicle.id) {
            warn!(vehicle = %vehicle.id, "duplicate vehicle skipped");
            return false;
        }
        self.vehicle_index
            .insert(vehicle.id.clone(), self.vehicles.len());
        self.vehicles.push(vehicle);
        true
    }

    /// Overwrite a driver's stored availability
    pub fn set_driver_status(&mut self, name: &str, status: DriverStatus) -> Result<()> {
        let idx = *self
            .driver_index
            .get(name)
            .ok_or_else(|| Error::UnknownDriver(name.to_string()))?;
        let driver = &mut self.drivers[idx];
        let previous = std::mem::replace(&mut driver.status, status);
        info!(driver = name, %previous, %status, "driver status changed");
        Ok(())
    }

    /// Mark a vehicle operational or out of service
    pub fn set_vehicle_serviceable(&mut self, id: &str, serviceable: bool) -> Result<()> {
        let idx = *self
            .vehicle_index
            .get(id)
            .ok_or_else(|| Error::UnknownVehicle(id.to_string()))?;
        self.vehicles[idx].serviceable = serviceable;
        info!(vehicle = id, serviceable, "vehicle serviceability changed");
        Ok(())
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

impl Roster for EntityStore {
    fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn driver(&self, name: &str) -> Option<&Driver> {
        self.driver_index.get(name).map(|&idx| &self.drivers[idx])
    }

    fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicle_index.get(id).map(|&idx| &self.vehicles[idx])
    }
}
