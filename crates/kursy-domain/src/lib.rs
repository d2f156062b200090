//! Domain layer: drivers, vehicles, courses and the rules that connect them

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Course, Driver, Slot, Vehicle};
pub use repository::Roster;
pub use service::{effective_status, eligible_candidates, AssignmentBoard, Candidates};
