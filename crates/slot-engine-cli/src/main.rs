//! `slots` CLI: compute free appointment slots and manage bookings from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots on a date (one "HH:MM" per line)
//! slots --data salon.json free --date 2026-03-02
//!
//! # Same, as a JSON array, with a 15-minute grid and custom hours
//! slots --data salon.json --granularity 15 --open 09:00 --close 18:00 free --date 2026-03-02 --json
//!
//! # Slot settings from a TOML file (granularity_minutes, open, close)
//! slots --data salon.json --config slots.toml free --date 2026-03-02
//!
//! # Earliest start with room for a cut and a wash
//! slots --data salon.json next --date 2026-03-02 --services cut,wash
//!
//! # Book and cancel
//! slots --data salon.json book --date 2026-03-02 --start 10:00 --client "Ana" --services cut
//! slots --data salon.json cancel --id bk-0001
//!
//! # List the service catalog
//! slots --data salon.json services
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use slot_engine::{BookingRequest, JsonFileBookingStore, SlotConfig, TimeOfDay};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Appointment slot availability and booking CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON data file holding services and bookings (created on first booking)
    #[arg(short, long)]
    data: PathBuf,

    /// TOML file with slot settings (granularity_minutes, open, close)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Slot size in minutes (overrides the config file)
    #[arg(long)]
    granularity: Option<u32>,

    /// Opening time, HH:MM (overrides the config file)
    #[arg(long)]
    open: Option<TimeOfDay>,

    /// Closing time, HH:MM; a slot starting exactly then is offered (overrides the config file)
    #[arg(long)]
    close: Option<TimeOfDay>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List free slot start times on a date
    Free {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Print a JSON array instead of one time per line
        #[arg(long)]
        json: bool,
    },
    /// Show the earliest start with room for the given services
    Next {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Comma-separated service ids, performed back to back
        #[arg(long, value_delimiter = ',', required = true)]
        services: Vec<String>,
    },
    /// Book services at a start time, failing if the slots are taken
    Book {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Start time, HH:MM
        #[arg(long)]
        start: TimeOfDay,
        /// Client name
        #[arg(long)]
        client: String,
        /// Comma-separated service ids
        #[arg(long, value_delimiter = ',', required = true)]
        services: Vec<String>,
        /// Booking id (defaults to the next unused bk-NNNN)
        #[arg(long)]
        id: Option<String>,
    },
    /// Cancel a booking, releasing its slots
    Cancel {
        /// Booking id
        #[arg(long)]
        id: String,
    },
    /// List the service catalog
    Services,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    debug!(?config, "slot settings");

    let mut store = JsonFileBookingStore::open(&cli.data)
        .with_context(|| format!("Failed to open data file: {}", cli.data.display()))?;
    let catalog = store.catalog().clone();

    match cli.command {
        Commands::Free { date, json } => {
            let free = slot_engine::free_slots_for_date(&store, &catalog, date, &config)
                .with_context(|| format!("Failed to compute free slots for {}", date))?;
            let labels: Vec<String> = free.iter().map(|s| s.to_string()).collect();
            if json {
                println!("{}", serde_json::to_string(&labels)?);
            } else {
                for label in labels {
                    println!("{}", label);
                }
            }
        }
        Commands::Next { date, services } => {
            let next = slot_engine::next_available(&store, &catalog, date, &services, &config)
                .with_context(|| format!("Failed to search availability for {}", date))?;
            match next {
                Some(start) => println!("{}", start),
                None => println!("none"),
            }
        }
        Commands::Book {
            date,
            start,
            client,
            services,
            id,
        } => {
            let id = id.unwrap_or_else(|| slot_engine::next_booking_id(&store));
            let request = BookingRequest {
                id,
                client,
                date,
                start,
                service_ids: services,
            };
            let booking = slot_engine::book(&mut store, &catalog, request, &config)
                .context("Failed to book appointment")?;
            println!("{}", booking.id);
        }
        Commands::Cancel { id } => {
            slot_engine::cancel(&mut store, &id)
                .with_context(|| format!("Failed to cancel booking: {}", id))?;
            println!("cancelled {}", id);
        }
        Commands::Services => {
            for service in catalog.services() {
                println!(
                    "{}\t{}\t{} min",
                    service.id, service.name, service.duration_minutes
                );
            }
        }
    }

    Ok(())
}

/// Start from the TOML config file (or defaults), then apply flag overrides.
fn build_config(cli: &Cli) -> Result<SlotConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => SlotConfig::default(),
    };

    if let Some(granularity) = cli.granularity {
        config.granularity_minutes = granularity;
    }
    if let Some(open) = cli.open {
        config.open = open;
    }
    if let Some(close) = cli.close {
        config.close = close;
    }

    config.validate().context("Invalid slot settings")?;
    Ok(config)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
