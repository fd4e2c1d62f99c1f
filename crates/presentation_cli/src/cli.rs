//! Command-line argument definitions for the WeatherBot CLI

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use domain::{BotCommand, LocationQuery, MapLayer};

/// WeatherBot CLI
#[derive(Debug, Parser)]
#[command(name = "weatherbot-cli")]
#[command(author, version, about = "WeatherBot command-line interface", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print replies as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show current weather for a city
    Weather {
        /// City name
        city: String,

        /// ISO country code to disambiguate the city
        #[arg(short, long)]
        country: Option<String>,

        /// Include cloud cover, wind gusts and pressure
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the daily forecast for a city
    Forecast {
        /// City name
        city: String,

        /// ISO country code to disambiguate the city
        #[arg(short, long)]
        country: Option<String>,

        /// Number of days (1-16, default from config)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Show current air quality for a city
    AirQuality {
        /// City name
        city: String,

        /// ISO country code to disambiguate the city
        #[arg(short, long)]
        country: Option<String>,
    },

    /// Show a weather map link for a city
    Map {
        /// City name
        city: String,

        /// ISO country code to disambiguate the city
        #[arg(short, long)]
        country: Option<String>,

        /// Map layer (temperature, precipitation, wind, clouds, pressure)
        #[arg(short, long, default_value = "clouds")]
        layer: String,
    },

    /// Show active weather alerts for a city
    Alert {
        /// City name
        city: String,

        /// ISO country code to disambiguate the city
        #[arg(short, long)]
        country: Option<String>,
    },

    /// Summarise the 30 days of observations up to a date
    History {
        /// City name
        city: String,

        /// ISO country code to disambiguate the city
        #[arg(short, long)]
        country: Option<String>,

        /// Last day of the window as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Register the slash and context-menu commands with Discord
    ///
    /// Uses the guild from config unless --guild or --global is given.
    RegisterCommands {
        /// Register in this guild only
        #[arg(long, conflicts_with = "global")]
        guild: Option<String>,

        /// Register globally even if a guild is configured
        #[arg(long)]
        global: bool,
    },

    /// Check server health (used by Docker healthcheck)
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        url: String,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Build the bot command for a weather subcommand
pub fn weather_command(command: &Commands, default_days: u32) -> Option<BotCommand> {
    let location = |city: &str, country: &Option<String>| LocationQuery::new(city, country.clone());

    match command {
        Commands::Weather {
            city,
            country,
            detailed,
        } => Some(BotCommand::CurrentWeather {
            location: location(city, country),
            detailed: *detailed,
        }),
        Commands::Forecast {
            city,
            country,
            days,
        } => Some(BotCommand::Forecast {
            location: location(city, country),
            days: days.unwrap_or(default_days),
        }),
        Commands::AirQuality { city, country } => Some(BotCommand::AirQuality {
            location: location(city, country),
        }),
        Commands::Map {
            city,
            country,
            layer,
        } => Some(BotCommand::WeatherMap {
            location: location(city, country),
            layer: MapLayer::from_slug(layer),
        }),
        Commands::Alert { city, country } => Some(BotCommand::WeatherAlert {
            location: location(city, country),
        }),
        Commands::History {
            city,
            country,
            date,
        } => Some(BotCommand::History {
            location: location(city, country),
            date: *date,
        }),
        Commands::RegisterCommands { .. } | Commands::Health { .. } => None,
    }
}
