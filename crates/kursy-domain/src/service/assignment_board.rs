//! The (vehicle, course) → driver grid

use std::collections::HashMap;

use chrono::NaiveDate;
use kursy_types::{Error, Result};
use tracing::{debug, info};

use super::eligible_candidates;
use crate::model::{Course, Slot};
use crate::repository::Roster;

/// Assignment grid for one session.
///
/// Every placement is re-validated against the eligibility resolver at the
/// moment it is applied. Occupants are never displaced to resolve a
/// conflict; conflicting drivers are simply not offered.
#[derive(Debug, Clone, Default)]
pub struct AssignmentBoard {
    slots: HashMap<Slot, String>,
}

impl AssignmentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver occupying the slot, if any
    pub fn get(&self, vehicle: &str, course: Course) -> Option<&str> {
        self.slots
            .get(&Slot::new(vehicle, course))
            .map(String::as_str)
    }

    /// Vehicle the driver runs on `course`, if any
    pub fn vehicle_for(&self, course: Course, driver: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(slot, occupant)| slot.course == course && occupant.as_str() == driver)
            .map(|(slot, _)| slot.vehicle.as_str())
    }

    /// Place `driver` in the slot, or clear it with `None`.
    ///
    /// Clearing is always allowed. Placing requires the driver to be among
    /// the slot's current candidates. Returns the previous occupant.
    pub fn set<R: Roster + ?Sized>(
        &mut self,
        roster: &R,
        vehicle_id: &str,
        course: Course,
        driver: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<String>> {
        let vehicle = roster
            .vehicle(vehicle_id)
            .ok_or_else(|| Error::UnknownVehicle(vehicle_id.to_string()))?;
        let slot = Slot::new(vehicle_id, course);

        let Some(driver) = driver else {
            let previous = self.slots.remove(&slot);
            if let Some(ref previous) = previous {
                info!(%slot, driver = %previous, "slot cleared");
            }
            return Ok(previous);
        };

        let candidates = eligible_candidates(roster, self, vehicle, course, today);
        if !candidates.contains(driver) {
            debug!(%slot, driver, "rejected: not among current candidates");
            return Err(Error::IneligibleAssignment {
                driver: driver.to_string(),
                vehicle: vehicle_id.to_string(),
                course: course.to_string(),
            });
        }

        if !vehicle.serviceable {
            debug!(%slot, "assigning to an out-of-service vehicle");
        }

        let previous = self.slots.insert(slot.clone(), driver.to_string());
        info!(%slot, driver, previous = ?previous, "assignment committed");
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::{roster, today};
    use kursy_types::DriverStatus;

    #[test]
    fn test_assign_and_get() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        let previous = board
            .set(&roster, "XYZ987", Course::First, Some("Anna Nowak"), today())
            .unwrap();
        assert_eq!(previous, None);
        assert_eq!(board.get("XYZ987", Course::First), Some("Anna Nowak"));
        assert_eq!(board.get("XYZ987", Course::Second), None);
    }

    #[test]
    fn test_unknown_driver_is_ineligible() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        let err = board
            .set(&roster, "ABC123", Course::First, Some("NonexistentDriver"), today())
            .unwrap_err();
        assert!(matches!(err, Error::IneligibleAssignment { ref driver, .. } if driver == "NonexistentDriver"));
        assert_eq!(board.get("ABC123", Course::First), None);
    }

    #[test]
    fn test_unknown_vehicle() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        let err = board
            .set(&roster, "NOPE", Course::First, Some("Anna Nowak"), today())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownVehicle(_)));
    }

    #[test]
    fn test_missing_qualification_rejected() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        let err = board
            .set(&roster, "XYZ987", Course::First, Some("Jan Kowalski"), today())
            .unwrap_err();
        assert!(matches!(err, Error::IneligibleAssignment { .. }));
    }

    #[test]
    fn test_unavailable_driver_rejected() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        let err = board
            .set(&roster, "ABC123", Course::First, Some("Piotr Zielinski"), today())
            .unwrap_err();
        assert!(matches!(err, Error::IneligibleAssignment { .. }));
    }

    #[test]
    fn test_same_course_conflict_rejected_without_displacing() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "XYZ987", Course::First, Some("Anna Nowak"), today())
            .unwrap();
        let err = board
            .set(&roster, "ABC123", Course::First, Some("Anna Nowak"), today())
            .unwrap_err();
        assert!(matches!(err, Error::IneligibleAssignment { .. }));
        assert_eq!(board.get("XYZ987", Course::First), Some("Anna Nowak"));
        assert_eq!(board.get("ABC123", Course::First), None);
    }

    #[test]
    fn test_same_driver_on_different_courses() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "XYZ987", Course::First, Some("Anna Nowak"), today())
            .unwrap();
        board
            .set(&roster, "ABC123", Course::Second, Some("Anna Nowak"), today())
            .unwrap();
        assert_eq!(board.get("XYZ987", Course::First), Some("Anna Nowak"));
        assert_eq!(board.get("ABC123", Course::Second), Some("Anna Nowak"));
    }

    #[test]
    fn test_reselecting_incumbent_is_allowed() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "ABC123", Course::First, Some("Jan Kowalski"), today())
            .unwrap();
        let previous = board
            .set(&roster, "ABC123", Course::First, Some("Jan Kowalski"), today())
            .unwrap();
        assert_eq!(previous.as_deref(), Some("Jan Kowalski"));
    }

    #[test]
    fn test_replace_occupant_leaves_other_slots() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "ABC123", Course::First, Some("Jan Kowalski"), today())
            .unwrap();
        board
            .set(&roster, "ABC123", Course::Second, Some("Jan Kowalski"), today())
            .unwrap();
        let previous = board
            .set(&roster, "ABC123", Course::First, Some("Anna Nowak"), today())
            .unwrap();
        assert_eq!(previous.as_deref(), Some("Jan Kowalski"));
        assert_eq!(board.get("ABC123", Course::First), Some("Anna Nowak"));
        assert_eq!(board.get("ABC123", Course::Second), Some("Jan Kowalski"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "ABC123", Course::First, Some("Jan Kowalski"), today())
            .unwrap();
        assert_eq!(
            board.set(&roster, "ABC123", Course::First, None, today()).unwrap().as_deref(),
            Some("Jan Kowalski")
        );
        assert_eq!(board.set(&roster, "ABC123", Course::First, None, today()).unwrap(), None);
        assert_eq!(board.get("ABC123", Course::First), None);
    }

    #[test]
    fn test_clear_ignores_eligibility() {
        let mut roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "ABC123", Course::First, Some("Jan Kowalski"), today())
            .unwrap();
        roster.drivers[1].status = DriverStatus::Sick;
        assert!(board.set(&roster, "ABC123", Course::First, None, today()).is_ok());
    }

    #[test]
    fn test_status_change_keeps_existing_assignment() {
        let mut roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "ABC123", Course::First, Some("Jan Kowalski"), today())
            .unwrap();
        roster.drivers[1].status = DriverStatus::Sick;
        assert_eq!(board.get("ABC123", Course::First), Some("Jan Kowalski"));
        let err = board
            .set(&roster, "ABC123", Course::Second, Some("Jan Kowalski"), today())
            .unwrap_err();
        assert!(matches!(err, Error::IneligibleAssignment { .. }));
    }

    #[test]
    fn test_out_of_service_vehicle_accepts_assignment() {
        let mut roster = roster();
        roster.vehicles[0].serviceable = false;
        let mut board = AssignmentBoard::new();
        assert!(board
            .set(&roster, "ABC123", Course::Further, Some("Jan Kowalski"), today())
            .is_ok());
    }
}
