use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Driver availability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverStatus {
    #[default]
    Available,
    Sick,
    OnLeave,
}

impl DriverStatus {
    /// Normalize free status text from a data source or operator input.
    ///
    /// Empty text means available. Returns `None` for unrecognized text.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "" | "dostepny" | "dostępny" | "available" => Some(DriverStatus::Available),
            "choroba" | "chory" | "sick" => Some(DriverStatus::Sick),
            "urlop" | "on-leave" | "on_leave" | "leave" => Some(DriverStatus::OnLeave),
            _ => None,
        }
    }

    /// Display label in Polish
    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::Available => "dostępny",
            DriverStatus::Sick => "zwolnienie chorobowe",
            DriverStatus::OnLeave => "urlop",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DriverStatus::Available)
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverStatus::Available => write!(f, "available"),
            DriverStatus::Sick => write!(f, "sick"),
            DriverStatus::OnLeave => write!(f, "on-leave"),
        }
    }
}

impl FromStr for DriverStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DriverStatus::parse(s).ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}
