//! Domain services

pub mod assignment_board;
pub mod eligibility;
pub mod status_lifecycle;

pub use assignment_board::AssignmentBoard;
pub use eligibility::{eligible_candidates, Candidates};
pub use status_lifecycle::{effective_status, parse_leave_date};

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use kursy_types::DriverStatus;

    use crate::model::{Driver, Vehicle};
    use crate::repository::Roster;

    pub struct TestRoster {
        pub drivers: Vec<Driver>,
        pub vehicles: Vec<Vehicle>,
    }

    impl Roster for TestRoster {
        fn drivers(&self) -> &[Driver] {
            &self.drivers
        }

        fn vehicles(&self) -> &[Vehicle] {
            &self.vehicles
        }
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    /// Anna Nowak {B, C}, Jan Kowalski {B}, Piotr Zielinski {B, C} sick;
    /// ABC123 requires nothing, XYZ987 requires C
    pub fn roster() -> TestRoster {
        TestRoster {
            drivers: vec![
                Driver::new("Anna Nowak", ["B", "C"]),
                Driver::new("Jan Kowalski", ["B"]),
                Driver::new("Piotr Zielinski", ["B", "C"]).with_status(DriverStatus::Sick),
            ],
            vehicles: vec![
                Vehicle::new("ABC123").with_label("Toyota Corolla"),
                Vehicle::new("XYZ987").requiring(["C"]).with_label("Ford Transit"),
            ],
        }
    }
}
