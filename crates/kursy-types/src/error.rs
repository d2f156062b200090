//! Error types for kursy

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("Data source not found: {0}")]
    DataSourceMissing(String),

    #[error("Unknown driver: {0}")]
    UnknownDriver(String),

    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Unrecognized status: {0}")]
    InvalidStatus(String),

    #[error("Driver '{driver}' is not eligible for vehicle {vehicle}, course {course}")]
    IneligibleAssignment {
        driver: String,
        vehicle: String,
        course: String,
    },

    #[error("No active slot selected")]
    NoActiveSlot,

    #[error("No free slot available for driver '{0}'")]
    NoFreeSlot(String),
}

pub type Result<T> = std::result::Result<T, Error>;
