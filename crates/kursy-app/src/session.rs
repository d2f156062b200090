//! One operator's planning session: entities, assignment board and the
//! slot currently selected on screen.

use chrono::NaiveDate;
use kursy_domain::repository::{DriverRepository, VehicleRepository};
use kursy_domain::{effective_status, eligible_candidates, AssignmentBoard, Candidates};
use kursy_domain::{Course, Driver, Roster, Slot, Vehicle};
use kursy_store::EntityStore;
use kursy_types::{DriverStatus, Error, Result};
use tracing::{debug, info, warn};

use crate::snapshot::{BoardSnapshot, DriverRow, VehicleRow};

/// Owned session state. Every mutation path goes through the same
/// eligibility check inside [`AssignmentBoard::set`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: EntityStore,
    board: AssignmentBoard,
    active: Option<Slot>,
}

impl Session {
    pub fn new(store: EntityStore) -> Self {
        Self {
            store,
            board: AssignmentBoard::new(),
            active: None,
        }
    }

    /// Load drivers and vehicles and start with an empty board
    pub fn load<D, V>(drivers: &D, vehicles: &V) -> Result<Self>
    where
        D: DriverRepository + ?Sized,
        V: VehicleRepository + ?Sized,
    {
        let store = EntityStore::from_records(drivers.find_all()?, vehicles.find_all()?);
        if store.driver_count() == 0 {
            warn!("no driver data to display");
        }
        if store.vehicle_count() == 0 {
            warn!("no vehicle data to display");
        }
        Ok(Self::new(store))
    }

    pub fn list_drivers(&self) -> &[Driver] {
        self.store.drivers()
    }

    pub fn list_vehicles(&self) -> &[Vehicle] {
        self.store.vehicles()
    }

    pub fn list_courses(&self) -> &'static [Course] {
        &Course::ALL
    }

    /// Driver availability on `today`, leave dates applied
    pub fn driver_status(&self, name: &str, today: NaiveDate) -> Result<DriverStatus> {
        let driver = self
            .store
            .driver(name)
            .ok_or_else(|| Error::UnknownDriver(name.to_string()))?;
        Ok(effective_status(driver, today))
    }

    pub fn get_assignment(&self, vehicle: &str, course: Course) -> Result<Option<&str>> {
        self.vehicle(vehicle)?;
        Ok(self.board.get(vehicle, course))
    }

    /// Drivers that may be placed in the slot now; recomputed on every call
    pub fn eligible_candidates(&self, vehicle: &str, course: Course, today: NaiveDate) -> Result<Candidates> {
        let vehicle = self.vehicle(vehicle)?;
        Ok(eligible_candidates(&self.store, &self.board, vehicle, course, today))
    }

    /// Place a driver in a slot, or clear it with `None`.
    ///
    /// Returns the driver previously in the slot.
    pub fn assign(
        &mut self,
        vehicle: &str,
        course: Course,
        driver: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<String>> {
        self.board.set(&self.store, vehicle, course, driver, today)
    }

    /// Change stored availability. Existing assignments are kept.
    pub fn set_driver_status(&mut self, name: &str, status: DriverStatus) -> Result<()> {
        self.store.set_driver_status(name, status)
    }

    /// Serviceability is informational; assignments are not touched.
    pub fn set_vehicle_serviceable(&mut self, id: &str, serviceable: bool) -> Result<()> {
        self.store.set_vehicle_serviceable(id, serviceable)
    }

    /// Remember the slot the operator is working on
    pub fn select_slot(&mut self, vehicle: &str, course: Course) -> Result<()> {
        self.vehicle(vehicle)?;
        let slot = Slot::new(vehicle, course);
        debug!(%slot, "active slot selected");
        self.active = Some(slot);
        Ok(())
    }

    pub fn active_slot(&self) -> Option<&Slot> {
        self.active.as_ref()
    }

    /// Assign a driver to the selected slot
    pub fn assign_to_active(&mut self, driver: &str, today: NaiveDate) -> Result<Option<String>> {
        let slot = self.active.clone().ok_or(Error::NoActiveSlot)?;
        self.assign(&slot.vehicle, slot.course, Some(driver), today)
    }

    /// Put the driver in the first empty slot they are eligible for,
    /// scanning vehicles in list order and courses in board order.
    pub fn assign_first_free(&mut self, driver: &str, today: NaiveDate) -> Result<Slot> {
        if self.store.driver(driver).is_none() {
            return Err(Error::UnknownDriver(driver.to_string()));
        }

        let free = self.store.vehicles().iter().find_map(|vehicle| {
            Course::ALL.iter().copied().find_map(|course| {
                if self.board.get(&vehicle.id, course).is_some() {
                    return None;
                }
                eligible_candidates(&self.store, &self.board, vehicle, course, today)
                    .contains(driver)
                    .then(|| Slot::new(vehicle.id.as_str(), course))
            })
        });

        let slot = free.ok_or_else(|| Error::NoFreeSlot(driver.to_string()))?;
        self.assign(&slot.vehicle, slot.course, Some(driver), today)?;
        info!(%slot, driver, "placed in first free slot");
        Ok(slot)
    }

    /// Read-only view of the whole board for display
    pub fn snapshot(&self, today: NaiveDate) -> BoardSnapshot {
        let vehicles = self
            .store
            .vehicles()
            .iter()
            .map(|vehicle| VehicleRow {
                id: vehicle.id.clone(),
                label: vehicle.label.clone(),
                display_name: vehicle.display_name(),
                serviceable: vehicle.serviceable,
                required_qualifications: vehicle.required_qualifications.iter().cloned().collect(),
                assignments: Course::ALL
                    .iter()
                    .map(|&course| self.board.get(&vehicle.id, course).map(str::to_string))
                    .collect(),
            })
            .collect();

        let drivers = self
            .store
            .drivers()
            .iter()
            .map(|driver| DriverRow {
                name: driver.name.clone(),
                qualifications: driver.qualifications.iter().cloned().collect(),
                status: driver.status,
                effective_status: effective_status(driver, today),
            })
            .collect();

        BoardSnapshot {
            date: today,
            courses: Course::ALL.to_vec(),
            vehicles,
            drivers,
            active_slot: self.active.clone(),
        }
    }

    fn vehicle(&self, id: &str) -> Result<&Vehicle> {
        self.store
            .vehicle(id)
            .ok_or_else(|| Error::UnknownVehicle(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn session() -> Session {
        Session::new(EntityStore::from_records(
            vec![
                Driver::new("Anna Nowak", ["B", "C"]),
                Driver::new("Jan Kowalski", ["B"]),
            ],
            vec![
                Vehicle::new("ABC123"),
                Vehicle::new("XYZ987").requiring(["C"]),
            ],
        ))
    }

    #[test]
    fn test_assign_to_active_requires_selection() {
        let mut session = session();
        let err = session.assign_to_active("Anna Nowak", today()).unwrap_err();
        assert!(matches!(err, Error::NoActiveSlot));
    }

    #[test]
    fn test_assign_to_active() {
        let mut session = session();
        session.select_slot("XYZ987", Course::Second).unwrap();
        session.assign_to_active("Anna Nowak", today()).unwrap();
        assert_eq!(
            session.get_assignment("XYZ987", Course::Second).unwrap(),
            Some("Anna Nowak")
        );
    }

    #[test]
    fn test_select_unknown_vehicle() {
        let mut session = session();
        assert!(matches!(
            session.select_slot("NOPE", Course::First),
            Err(Error::UnknownVehicle(_))
        ));
        assert!(session.active_slot().is_none());
    }

    #[test]
    fn test_assign_first_free_skips_ineligible_and_occupied() {
        let mut session = session();
        session
            .assign("ABC123", Course::First, Some("Jan Kowalski"), today())
            .unwrap();

        // ABC123 / I kurs is taken and Jan lacks C for XYZ987
        let slot = session.assign_first_free("Jan Kowalski", today()).unwrap();
        assert_eq!(slot, Slot::new("ABC123", Course::Second));

        let slot = session.assign_first_free("Anna Nowak", today()).unwrap();
        assert_eq!(slot, Slot::new("ABC123", Course::Further));
    }

    #[test]
    fn test_assign_first_free_exhausted() {
        let mut session = session();
        // Jan only qualifies for ABC123, which has three courses
        for _ in 0..3 {
            session.assign_first_free("Jan Kowalski", today()).unwrap();
        }
        let err = session.assign_first_free("Jan Kowalski", today()).unwrap_err();
        assert!(matches!(err, Error::NoFreeSlot(_)));
    }

    #[test]
    fn test_assign_first_free_unknown_driver() {
        let mut session = session();
        let err = session.assign_first_free("Nikt", today()).unwrap_err();
        assert!(matches!(err, Error::UnknownDriver(_)));
    }

    #[test]
    fn test_get_assignment_unknown_vehicle() {
        let session = session();
        assert!(matches!(
            session.get_assignment("NOPE", Course::First),
            Err(Error::UnknownVehicle(_))
        ));
    }

    #[test]
    fn test_snapshot_rows() {
        let mut session = session();
        session
            .assign("XYZ987", Course::First, Some("Anna Nowak"), today())
            .unwrap();
        session.set_vehicle_serviceable("ABC123", false).unwrap();

        let snapshot = session.snapshot(today());
        assert_eq!(snapshot.courses.len(), 3);
        assert!(!snapshot.vehicles[0].serviceable);
        assert_eq!(snapshot.vehicles[0].display_name, "ABC123");
        assert_eq!(
            snapshot.vehicles[1].assignments,
            vec![Some("Anna Nowak".to_string()), None, None]
        );
        assert_eq!(snapshot.drivers[1].effective_status, DriverStatus::Available);
    }
}
