//! Eligibility resolver: who may take a given (vehicle, course) slot right now

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use super::{effective_status, AssignmentBoard};
use crate::model::{Course, Vehicle};
use crate::repository::Roster;

/// Drivers that may be placed in one slot, in roster order.
///
/// The unassign option is implicit and always offered first by `options()`.
/// Serialized as `{ vehicle, course, options }` with `null` as the first option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub vehicle: String,
    pub course: Course,
    drivers: Vec<String>,
}

impl Candidates {
    /// Eligible driver names, without the unassign option
    pub fn drivers(&self) -> &[String] {
        &self.drivers
    }

    /// Selection options: `None` (unassign) followed by every eligible driver
    pub fn options(&self) -> impl Iterator<Item = Option<&str>> {
        std::iter::once(None).chain(self.drivers.iter().map(|d| Some(d.as_str())))
    }

    pub fn contains(&self, driver: &str) -> bool {
        self.drivers.iter().any(|d| d == driver)
    }

    /// True when only the unassign option is left
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }
}

impl Serialize for Candidates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Candidates", 3)?;
        state.serialize_field("vehicle", &self.vehicle)?;
        state.serialize_field("course", &self.course)?;
        state.serialize_field("options", &self.options().collect::<Vec<_>>())?;
        state.end()
    }
}

/// Compute the candidates for `vehicle` on `course`.
///
/// A driver qualifies when their effective status is available, they hold
/// every category the vehicle requires, and they are not already running a
/// different vehicle on the same course. The slot's own occupant passes the
/// last rule. Serviceability of the vehicle is not considered.
pub fn eligible_candidates<R: Roster + ?Sized>(
    roster: &R,
    board: &AssignmentBoard,
    vehicle: &Vehicle,
    course: Course,
    today: NaiveDate,
) -> Candidates {
    let drivers = roster
        .drivers()
        .iter()
        .filter(|driver| {
            let status = effective_status(driver, today);
            if !status.is_available() {
                debug!(driver = %driver.name, %status, "not available");
                return false;
            }
            if !driver.qualifies_for(vehicle) {
                debug!(driver = %driver.name, vehicle = %vehicle.id, "missing qualifications");
                return false;
            }
            match board.vehicle_for(course, &driver.name) {
                Some(other) if other != vehicle.id => {
                    debug!(driver = %driver.name, %course, other, "already assigned on this course");
                    false
                }
                _ => true,
            }
        })
        .map(|driver| driver.name.clone())
        .collect();

    Candidates {
        vehicle: vehicle.id.clone(),
        course,
        drivers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Driver;
    use crate::service::fixtures::{roster, today};
    use kursy_types::DriverStatus;

    #[test]
    fn test_filters_by_qualification() {
        let roster = roster();
        let board = AssignmentBoard::new();
        let candidates = eligible_candidates(&roster, &board, &roster.vehicles[1], Course::First, today());
        assert_eq!(candidates.drivers(), &["Anna Nowak".to_string()]);
    }

    #[test]
    fn test_filters_unavailable_and_keeps_roster_order() {
        let roster = roster();
        let board = AssignmentBoard::new();
        let candidates = eligible_candidates(&roster, &board, &roster.vehicles[0], Course::First, today());
        assert_eq!(
            candidates.drivers(),
            &["Anna Nowak".to_string(), "Jan Kowalski".to_string()]
        );
    }

    #[test]
    fn test_options_start_with_unassign() {
        let roster = roster();
        let board = AssignmentBoard::new();
        let candidates = eligible_candidates(&roster, &board, &roster.vehicles[0], Course::First, today());
        let options: Vec<_> = candidates.options().collect();
        assert_eq!(options, vec![None, Some("Anna Nowak"), Some("Jan Kowalski")]);
    }

    #[test]
    fn test_json_lists_unassign_first() {
        let roster = roster();
        let board = AssignmentBoard::new();
        let candidates = eligible_candidates(&roster, &board, &roster.vehicles[1], Course::First, today());
        let json = serde_json::to_value(&candidates).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vehicle": "XYZ987",
                "course": "I kurs",
                "options": [null, "Anna Nowak"],
            })
        );
    }

    #[test]
    fn test_no_candidates_is_not_an_error() {
        let mut roster = roster();
        for driver in &mut roster.drivers {
            driver.status = DriverStatus::Sick;
        }
        let board = AssignmentBoard::new();
        let candidates = eligible_candidates(&roster, &board, &roster.vehicles[0], Course::First, today());
        assert!(candidates.is_empty());
        assert_eq!(candidates.options().collect::<Vec<_>>(), vec![None]);
    }

    #[test]
    fn test_leave_dates_exclude_available_driver() {
        let mut roster = roster();
        let start = today().pred_opt().unwrap();
        let end = today().succ_opt().unwrap();
        roster.drivers[1] = Driver::new("Jan Kowalski", ["B"]).with_leave(start, end);
        let board = AssignmentBoard::new();
        let candidates = eligible_candidates(&roster, &board, &roster.vehicles[0], Course::First, today());
        assert!(!candidates.contains("Jan Kowalski"));
        assert_eq!(roster.drivers[1].status, DriverStatus::Available);
    }

    #[test]
    fn test_same_course_elsewhere_is_excluded_but_incumbent_kept() {
        let roster = roster();
        let mut board = AssignmentBoard::new();
        board
            .set(&roster, "XYZ987", Course::First, Some("Anna Nowak"), today())
            .unwrap();

        let here = eligible_candidates(&roster, &board, &roster.vehicles[1], Course::First, today());
        assert!(here.contains("Anna Nowak"));

        let elsewhere = eligible_candidates(&roster, &board, &roster.vehicles[0], Course::First, today());
        assert!(!elsewhere.contains("Anna Nowak"));

        let next_course = eligible_candidates(&roster, &board, &roster.vehicles[0], Course::Second, today());
        assert!(next_course.contains("Anna Nowak"));
    }

    #[test]
    fn test_out_of_service_vehicle_still_has_candidates() {
        let mut roster = roster();
        roster.vehicles[0].serviceable = false;
        let board = AssignmentBoard::new();
        let candidates = eligible_candidates(&roster, &board, &roster.vehicles[0], Course::First, today());
        assert_eq!(candidates.len(), 2);
    }
}
