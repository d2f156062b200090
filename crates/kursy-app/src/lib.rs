//! Application service layer - config, repositories and the assignment session

pub mod config;
pub mod repository;
pub mod session;
pub mod snapshot;

pub use config::Config;
pub use session::Session;
pub use snapshot::{BoardSnapshot, DriverRow, VehicleRow};
