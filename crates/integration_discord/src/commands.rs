//! Application command definitions and parsing
//!
//! The slash commands and the message context menu the bot registers, and
//! the conversion of invocations back into `BotCommand`s.

use domain::{BotCommand, LocationQuery, MapLayer};
use serde::Serialize;

use crate::{error::DiscordError, interaction::CommandData};

pub const WEATHER: &str = "weather";
pub const FORECAST: &str = "forecast";
pub const AIR_QUALITY: &str = "airquality";
pub const WEATHER_MAP: &str = "weathermap";
pub const WEATHER_ALERT: &str = "weatheralert";
/// Message context-menu entry
pub const WEATHER_FROM_MESSAGE: &str = "Weather from message";

const CHAT_INPUT: u8 = 1;
const MESSAGE: u8 = 3;

const OPTION_STRING: u8 = 3;
const OPTION_INTEGER: u8 = 4;
const OPTION_BOOLEAN: u8 = 5;

/// Default forecast length when the `days` option is omitted
const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Command registration body
#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub command_type: u8,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionDefinition {
    #[serde(rename = "type")]
    pub option_type: u8,
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: String,
}

impl CommandDefinition {
    fn slash(name: &str, description: &str, options: Vec<OptionDefinition>) -> Self {
        Self {
            name: name.to_string(),
            command_type: CHAT_INPUT,
            description: description.to_string(),
            options,
        }
    }

    fn message_menu(name: &str) -> Self {
        Self {
            name: name.to_string(),
            command_type: MESSAGE,
            description: String::new(),
            options: Vec::new(),
        }
    }
}

impl OptionDefinition {
    fn new(option_type: u8, name: &str, description: &str, required: bool) -> Self {
        Self {
            option_type,
            name: name.to_string(),
            description: description.to_string(),
            required,
            choices: Vec::new(),
            min_value: None,
            max_value: None,
        }
    }
}

fn city_option() -> OptionDefinition {
    OptionDefinition::new(OPTION_STRING, "city", "City name", true)
}

fn country_option() -> OptionDefinition {
    OptionDefinition::new(
        OPTION_STRING,
        "country",
        "Country code (VN, JP, ...)",
        false,
    )
}

/// Every command the bot registers
pub fn command_definitions() -> Vec<CommandDefinition> {
    let days = OptionDefinition {
        min_value: Some(1),
        max_value: Some(16),
        ..OptionDefinition::new(OPTION_INTEGER, "days", "Number of days (1-16)", false)
    };

    let layer = OptionDefinition {
        choices: MapLayer::ALL
            .iter()
            .map(|layer| OptionChoice {
                name: layer.display_name().to_string(),
                value: layer.slug().to_string(),
            })
            .collect(),
        ..OptionDefinition::new(OPTION_STRING, "type", "Map type", false)
    };

    vec![
        CommandDefinition::slash(
            WEATHER,
            "Current weather for a city",
            vec![
                city_option(),
                country_option(),
                OptionDefinition::new(OPTION_BOOLEAN, "detailed", "Show details?", false),
            ],
        ),
        CommandDefinition::slash(
            FORECAST,
            "Daily weather forecast",
            vec![city_option(), country_option(), days],
        ),
        CommandDefinition::slash(
            AIR_QUALITY,
            "Air quality index",
            vec![city_option(), country_option()],
        ),
        CommandDefinition::slash(
            WEATHER_MAP,
            "Weather map",
            vec![city_option(), country_option(), layer],
        ),
        CommandDefinition::slash(
            WEATHER_ALERT,
            "Weather alerts",
            vec![city_option(), country_option()],
        ),
        CommandDefinition::message_menu(WEATHER_FROM_MESSAGE),
    ]
}

/// Convert an invocation into a bot command
pub fn parse_command(data: &CommandData) -> Result<BotCommand, DiscordError> {
    if data.command_type == MESSAGE {
        return parse_message_menu(data);
    }

    match data.name.as_str() {
        WEATHER => Ok(BotCommand::CurrentWeather {
            location: location(data)?,
            detailed: bool_option(data, "detailed").unwrap_or(false),
        }),
        FORECAST => Ok(BotCommand::Forecast {
            location: location(data)?,
            days: int_option(data, "days").map_or(DEFAULT_FORECAST_DAYS, |d| {
                u32::try_from(d.max(0)).unwrap_or(u32::MAX)
            }),
        }),
        AIR_QUALITY => Ok(BotCommand::AirQuality {
            location: location(data)?,
        }),
        WEATHER_MAP => Ok(BotCommand::WeatherMap {
            location: location(data)?,
            layer: str_option(data, "type").map_or_else(MapLayer::default, MapLayer::from_slug),
        }),
        WEATHER_ALERT => Ok(BotCommand::WeatherAlert {
            location: location(data)?,
        }),
        other => Err(DiscordError::UnknownCommand(other.to_string())),
    }
}

fn parse_message_menu(data: &CommandData) -> Result<BotCommand, DiscordError> {
    if data.name != WEATHER_FROM_MESSAGE {
        return Err(DiscordError::UnknownCommand(data.name.clone()));
    }
    let content = data.target_message_content().unwrap_or_default();
    LocationQuery::from_message_text(content)
        .map(|location| BotCommand::QuickWeather { location })
        .ok_or(DiscordError::NoCityInMessage)
}

fn location(data: &CommandData) -> Result<LocationQuery, DiscordError> {
    let city = str_option(data, "city")
        .filter(|c| !c.trim().is_empty())
        .ok_or(DiscordError::MissingOption("city"))?;
    let country = str_option(data, "country").map(str::to_string);
    Ok(LocationQuery::new(city, country))
}

fn str_option<'a>(data: &'a CommandData, name: &str) -> Option<&'a str> {
    data.option(name).and_then(serde_json::Value::as_str)
}

fn int_option(data: &CommandData, name: &str) -> Option<i64> {
    data.option(name).and_then(serde_json::Value::as_i64)
}

fn bool_option(data: &CommandData, name: &str) -> Option<bool> {
    data.option(name).and_then(serde_json::Value::as_bool)
}
