//! Configuration management for kursy
//!
//! Config stored at: ~/.config/kursy/config.json

use kursy_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Driver list (imie, nazwisko, kategorie, status, urlop_od, urlop_do)
    #[serde(default = "default_drivers_csv")]
    pub drivers_csv: PathBuf,

    /// Vehicle list (rejestracja, marka, model, status, kategorie)
    #[serde(default = "default_vehicles_csv")]
    pub vehicles_csv: PathBuf,

    /// Fail on missing data files instead of using sample data
    #[serde(default)]
    pub strict_sources: bool,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_drivers_csv() -> PathBuf {
    PathBuf::from("kierowcy.csv")
}

fn default_vehicles_csv() -> PathBuf {
    PathBuf::from("auta.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drivers_csv: default_drivers_csv(),
            vehicles_csv: default_vehicles_csv(),
            strict_sources: false,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("kursy");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Kursy Configuration")?;
        writeln!(f, "===================")?;
        writeln!(f)?;
        writeln!(f, "Drivers CSV:    {}", self.drivers_csv.display())?;
        writeln!(f, "Vehicles CSV:   {}", self.vehicles_csv.display())?;
        writeln!(f, "Strict sources: {}", self.strict_sources)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
