//! Command handlers

use chrono::{Local, NaiveDate};
use kursy_app::repository::open_session;
use kursy_app::{Config, Session};
use kursy_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::console::run_console;
use crate::output::{print_board, print_candidates, print_courses, print_drivers, print_vehicles};

/// Session plus the date and format it is displayed with
struct Context {
    session: Session,
    today: NaiveDate,
    format: OutputFormat,
}

impl Context {
    /// Load config, apply command-line overrides and open the session
    fn open(cli: &Cli) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(ref path) = cli.drivers {
            config.drivers_csv = path.clone();
        }
        if let Some(ref path) = cli.vehicles {
            config.vehicles_csv = path.clone();
        }
        if cli.strict {
            config.strict_sources = true;
        }
        let format = cli.format.unwrap_or(config.output_format);
        let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

        let session = open_session(&config)?;
        debug!(
            drivers = session.list_drivers().len(),
            vehicles = session.list_vehicles().len(),
            %today,
            "session opened"
        );
        Ok(Self {
            session,
            today,
            format,
        })
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Config {
            show,
            set_drivers,
            set_vehicles,
            set_strict,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_drivers.clone(),
            set_vehicles.clone(),
            *set_strict,
            *set_output,
            *reset,
        ),
        Commands::Drivers => {
            let ctx = Context::open(&cli)?;
            print_drivers(ctx.format, &ctx.session.snapshot(ctx.today))
        }
        Commands::Vehicles => {
            let ctx = Context::open(&cli)?;
            print_vehicles(ctx.format, &ctx.session.snapshot(ctx.today))
        }
        Commands::Courses => {
            let ctx = Context::open(&cli)?;
            print_courses(ctx.format, ctx.session.list_courses())
        }
        Commands::Candidates { vehicle, course } => {
            let ctx = Context::open(&cli)?;
            let candidates = ctx.session.eligible_candidates(vehicle, *course, ctx.today)?;
            print_candidates(ctx.format, &candidates)
        }
        Commands::Board => {
            let ctx = Context::open(&cli)?;
            print_board(ctx.format, &ctx.session.snapshot(ctx.today))
        }
        Commands::Console => {
            let mut ctx = Context::open(&cli)?;
            run_console(&mut ctx.session, ctx.today, ctx.format)
        }
    }
}

fn cmd_config(
    show: bool,
    set_drivers: Option<PathBuf>,
    set_vehicles: Option<PathBuf>,
    set_strict: Option<bool>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(path) = set_drivers {
        config.drivers_csv = path;
        changed = true;
    }
    if let Some(path) = set_vehicles {
        config.vehicles_csv = path;
        changed = true;
    }
    if let Some(strict) = set_strict {
        config.strict_sources = strict;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

