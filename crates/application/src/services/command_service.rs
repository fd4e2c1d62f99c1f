//! Command service
//!
//! Entry point for every bot command. Maps a `BotCommand` onto the weather
//! use cases and formats the result as a `Reply`.

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::BotCommand;
use tracing::{error, info, instrument, warn};

use super::{
    reply::Reply,
    reply_formatter,
    weather_service::WeatherService,
};
use crate::error::ApplicationError;

/// Executes bot commands against the weather service
#[derive(Clone)]
pub struct CommandService {
    weather: Arc<WeatherService>,
}

impl fmt::Debug for CommandService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandService").finish_non_exhaustive()
    }
}

impl CommandService {
    pub const fn new(weather: Arc<WeatherService>) -> Self {
        Self { weather }
    }

    /// Execute a command, turning any failure into a user-facing text reply
    pub async fn handle(&self, command: BotCommand) -> Reply {
        match self.execute(&command).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    ApplicationError::NotFound(what) => {
                        info!(command = command.name(), %what, "Location not found");
                    },
                    ApplicationError::Domain(_) | ApplicationError::Unsupported(_) => {
                        info!(command = command.name(), error = %e, "Command rejected");
                    },
                    err if err.is_upstream() => {
                        warn!(command = command.name(), error = %e, "Weather provider failed");
                    },
                    _ => error!(command = command.name(), error = %e, "Command failed"),
                }
                Reply::text(e.user_message())
            },
        }
    }

    /// Execute a command, propagating failures
    #[instrument(skip(self, command), fields(command = command.name(), city = %command.location().city))]
    pub async fn execute(&self, command: &BotCommand) -> Result<Reply, ApplicationError> {
        command.validate()?;

        let embed = match command {
            BotCommand::CurrentWeather { location, detailed } => {
                let (resolved, current) = self.weather.current(location).await?;
                reply_formatter::current_weather(&resolved, &current, *detailed)
            },
            BotCommand::Forecast { location, days } => {
                let (resolved, forecast) = self.weather.forecast(location, *days).await?;
                reply_formatter::forecast(&resolved, &forecast, Utc::now())
            },
            BotCommand::AirQuality { location } => {
                let (resolved, air) = self.weather.air_quality(location).await?;
                reply_formatter::air_quality(&resolved, &air, Utc::now())
            },
            BotCommand::WeatherMap { location, layer } => {
                let resolved = self.weather.locate(location).await?;
                reply_formatter::weather_map(&resolved, *layer, Utc::now())
            },
            BotCommand::WeatherAlert { location } => {
                let (resolved, alerts) = self.weather.alerts(location).await?;
                reply_formatter::weather_alerts(&resolved, &alerts, Utc::now())
            },
            BotCommand::QuickWeather { location } => {
                let (resolved, current) = self.weather.current(location).await?;
                reply_formatter::quick_weather(&resolved, &current, Utc::now())
            },
            BotCommand::History { location, date } => {
                let now = Utc::now();
                let end = date.unwrap_or_else(|| now.date_naive());
                let (resolved, history) = self.weather.history(location, end).await?;
                reply_formatter::history(&resolved, &history, now)
            },
        };

        Ok(embed.into())
    }
}
