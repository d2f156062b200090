use serde::{Deserialize, Serialize};

use super::Course;

/// A (vehicle, course) cell of the assignment board
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub vehicle: String,
    pub course: Course,
}

impl Slot {
    pub fn new(vehicle: impl Into<String>, course: Course) -> Self {
        Self {
            vehicle: vehicle.into(),
            course,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.vehicle, self.course)
    }
}
