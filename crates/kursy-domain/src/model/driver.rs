//! Driver record

use std::collections::BTreeSet;

use chrono::NaiveDate;
use kursy_types::DriverStatus;
use serde::{Deserialize, Serialize};

use super::Vehicle;

/// A driver as loaded from the driver source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// "Imię Nazwisko", unique within a store
    pub name: String,
    /// Licence categories held (B, C, C+E, ...)
    pub qualifications: BTreeSet<String>,
    /// Stored availability, changed only by operator action
    pub status: DriverStatus,
    /// First day of planned leave
    #[serde(default)]
    pub leave_start: Option<NaiveDate>,
    /// Last day of planned leave (inclusive)
    #[serde(default)]
    pub leave_end: Option<NaiveDate>,
}

impl Driver {
    pub fn new<I, S>(name: impl Into<String>, qualifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            qualifications: qualifications.into_iter().map(Into::into).collect(),
            status: DriverStatus::Available,
            leave_start: None,
            leave_end: None,
        }
    }

    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_leave(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.leave_start = Some(start);
        self.leave_end = Some(end);
        self
    }

    /// Whether the driver holds every category the vehicle requires
    pub fn qualifies_for(&self, vehicle: &Vehicle) -> bool {
        vehicle
            .required_qualifications
            .is_subset(&self.qualifications)
    }
}
