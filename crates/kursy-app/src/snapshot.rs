//! Display view of a session

use chrono::NaiveDate;
use kursy_domain::{Course, Slot};
use kursy_types::DriverStatus;
use serde::Serialize;

/// Whole-board view for table or JSON output
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub date: NaiveDate,
    pub courses: Vec<Course>,
    pub vehicles: Vec<VehicleRow>,
    pub drivers: Vec<DriverRow>,
    pub active_slot: Option<Slot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleRow {
    pub id: String,
    pub label: Option<String>,
    /// "ABC123 (Toyota Corolla)"
    pub display_name: String,
    pub serviceable: bool,
    pub required_qualifications: Vec<String>,
    /// Occupant per course, in `courses` order
    pub assignments: Vec<Option<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverRow {
    pub name: String,
    pub qualifications: Vec<String>,
    pub status: DriverStatus,
    pub effective_status: DriverStatus,
}

impl BoardSnapshot {
    /// Occupied slots out of all slots
    pub fn fill(&self) -> (usize, usize) {
        let total = self.vehicles.len() * self.courses.len();
        let occupied = self
            .vehicles
            .iter()
            .flat_map(|v| v.assignments.iter())
            .filter(|a| a.is_some())
            .count();
        (occupied, total)
    }
}
