//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kursy_domain::Course;
use kursy_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kursy")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Assign drivers to vehicles for each daily course")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Driver CSV file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub drivers: Option<PathBuf>,

    /// Vehicle CSV file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub vehicles: Option<PathBuf>,

    /// Fail if a data file is missing instead of using sample data
    #[arg(long, global = true)]
    pub strict: bool,

    /// Planning date (YYYY-MM-DD) used for leave checks. Defaults to today.
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List drivers with their stored and effective status
    Drivers,

    /// List vehicles with required categories and serviceability
    Vehicles,

    /// List the daily courses
    Courses,

    /// Show drivers that may take a slot
    Candidates {
        /// Vehicle registration (e.g. "XYZ987")
        vehicle: String,

        /// Course ("I kurs", "II kurs", "Dalsze kursy", or 1/2/3)
        course: Course,
    },

    /// Show the assignment board
    Board,

    /// Interactive operator console (reads commands from stdin)
    Console,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default driver CSV path
        #[arg(long)]
        set_drivers: Option<PathBuf>,

        /// Set default vehicle CSV path
        #[arg(long)]
        set_vehicles: Option<PathBuf>,

        /// Require data files to exist
        #[arg(long)]
        set_strict: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
