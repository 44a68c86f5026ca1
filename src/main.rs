use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use happy_hour::commands::{self, OutputFormat};
use happy_hour::config::Config;
use happy_hour::dates::parse_date_time;
use happy_hour::logging;
use happy_hour::types::EventRequest;
use happy_hour::{EventError, SystemInventory};

#[derive(Parser)]
#[command(name = "happy-hour")]
#[command(about = "Happy hour defaults, events, menu and host info")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (falls back to $HAPPY_HOUR_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Suppress diagnostic log lines on stderr
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the default happy hour settings
    Defaults,
    /// Show happy hour info for a location and date
    Info {
        /// Venue name (defaults to the configured location)
        #[arg(long)]
        location: Option<String>,
        /// Date as YYYY-MM-DD or YYYY-MM-DDTHH:MM (defaults to now)
        #[arg(long)]
        date: Option<String>,
    },
    /// Create a new happy hour event
    CreateEvent {
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        location: String,
        /// Date as YYYY-MM-DD or YYYY-MM-DDTHH:MM
        #[arg(long)]
        date: String,
        /// Attendee name, repeat the flag for each attendee
        #[arg(long = "attendee")]
        attendees: Vec<String>,
        #[arg(long)]
        theme: Option<String>,
        /// Report what would be created without creating it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the happy hour menu
    Menu {
        /// All, Drinks or Food
        #[arg(long, default_value = "All")]
        category: String,
        #[arg(long)]
        include_prices: bool,
    },
    /// Look up the host's hardware serial number
    Serial,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guard = logging::init_logging(&config.logging, cli.quiet);

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
    let defaults = config.defaults.to_record();
    let mut stdout = io::stdout().lock();

    let result = match cli.command {
        Commands::Defaults => commands::show_defaults(&mut stdout, format, &defaults),
        Commands::Info { location, date } => date
            .as_deref()
            .map(parse_date_time)
            .transpose()
            .and_then(|date| {
                commands::show_info(&mut stdout, format, &defaults, location.as_deref(), date)
            })
            .map(|_| ()),
        Commands::CreateEvent { location, date, attendees, theme, dry_run } => {
            parse_date_time(&date).and_then(|date_time| {
                let mut request = EventRequest::new(location, date_time).with_attendees(attendees);
                request.theme = theme;
                commands::create_event(&mut stdout, format, request, dry_run).map(|_| ())
            })
        }
        Commands::Menu { category, include_prices } => {
            commands::show_menu(&mut stdout, format, &category, include_prices)
        }
        Commands::Serial => {
            commands::show_host_serial(&mut stdout, format, &SystemInventory::new()).map(|_| ())
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ (EventError::InvalidArgument(_) | EventError::HostQuery(_))) => {
            eprintln!("❌ {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Command failed"),
    }
}
