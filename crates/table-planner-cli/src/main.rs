//! `planner` CLI: inspect and drive an in-process table planner from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # The sample floor plan
//! planner tables
//!
//! # Bookings for one day, with the clock pinned
//! planner --today 2026-03-16 --now 07:30 reservations --date 2026-03-16
//!
//! # The slot grid for a date
//! planner slots --date 2026-03-16
//!
//! # Execute a JSON command script (stdin → stdout)
//! echo '[{"op":"list_tables"}]' | planner run
//!
//! # Script from file to file, starting from an empty planner
//! planner --empty run -i commands.json -o responses.json
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde_json::Value;
use table_planner::{Clock, Command, FixedClock, Planner, PlannerConfig, Response, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planner", version, about = "Restaurant table planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON planner configuration (defaults apply to missing fields)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start without the sample tables and reservations
    #[arg(long, global = true)]
    empty: bool,

    /// Pin today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Pin the current time of day (HH:mm)
    #[arg(long, global = true, value_parser = parse_clock_time)]
    now: Option<NaiveTime>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table list
    Tables,
    /// Print reservations, optionally for one date
    Reservations {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the slot grid for a date (today if omitted)
    Slots {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Report double bookings and reservations without a table
    Audit,
    /// Execute a JSON command script and print the responses
    Run {
        /// Script file: one command or an array of commands (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli.config.as_deref())?;

    // Any pinned part of the clock freezes it; the other part comes from the system.
    if cli.today.is_some() || cli.now.is_some() {
        let system = SystemClock.now();
        let date = cli.today.unwrap_or(system.date());
        let time = cli.now.unwrap_or(system.time());
        let clock = FixedClock(date.and_time(time));
        execute(build_planner(config, clock, cli.empty), cli.command)
    } else {
        execute(build_planner(config, SystemClock, cli.empty), cli.command)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    PlannerConfig::from_json(&raw)
        .with_context(|| format!("Invalid planner config: {}", path.display()))
}

fn build_planner<C: Clock>(config: PlannerConfig, clock: C, empty: bool) -> Planner<C> {
    if empty {
        Planner::with_clock(config, clock)
    } else {
        Planner::seeded(config, clock)
    }
}

fn execute<C: Clock>(mut planner: Planner<C>, command: Commands) -> Result<()> {
    let single = match command {
        Commands::Tables => Command::ListTables,
        Commands::Reservations { date } => Command::ListReservations { date },
        Commands::Slots { date } => Command::Slots {
            date: date.unwrap_or_else(|| planner.clock().today()),
        },
        Commands::Audit => Command::Audit,
        Commands::Run { input, output } => {
            let script = read_input(input.as_deref())?;
            let commands = parse_script(&script)?;
            let count = commands.len();

            let responses: Vec<Response> = commands
                .into_iter()
                .map(|command| planner.execute(command))
                .collect();
            let failures = responses
                .iter()
                .filter(|r| matches!(r, Response::Failure(_)))
                .count();
            info!(commands = count, failures, "script finished");

            let json = serde_json::to_string_pretty(&responses)?;
            return write_output(output.as_deref(), &json);
        }
    };

    let response = planner.execute(single);
    let json = serde_json::to_string_pretty(&response)?;
    write_output(None, &json)
}

/// Parse a script holding either one command object or an array of them.
fn parse_script(script: &str) -> Result<Vec<Command>> {
    let value: Value = serde_json::from_str(script).context("Command script is not valid JSON")?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("Invalid command at index {}", index))
            })
            .collect(),
        single => Ok(vec![serde_json::from_value(single).context("Invalid command")?]),
    }
}

fn parse_clock_time(raw: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| format!("expected HH:mm, got '{}'", raw))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
