//! Reply formatting
//!
//! Pure functions turning weather records into embeds.

use chrono::{DateTime, Utc};
use domain::{
    AirQuality, AqiCategory, CompassDirection, Coordinate, CurrentConditions, ForecastSet,
    MapLayer, ResolvedLocation, WeatherAlert, WeatherHistory, lookup::colors,
};

use super::reply::Embed;

/// Most forecast days shown in one embed
pub const MAX_FORECAST_FIELDS: usize = 7;

const MAP_IMAGE_BASE: &str = "https://open-meteo.com/images";
const DATA_ATTRIBUTION: &str = "Data from Open-Meteo";
const NO_ALERTS: &str = "No weather alerts are available for this location.";
const NO_HISTORY: &str = "No archived observations are available for this period yet.";

// ── Current conditions ──────────────────────────────────────────

/// Current weather card, optionally with cloud cover, gusts and pressure
#[must_use]
pub fn current_weather(
    location: &ResolvedLocation,
    current: &CurrentConditions,
    detailed: bool,
) -> Embed {
    let code = current.weather_code;
    let day_night = if current.is_day {
        "☀️ Daytime"
    } else {
        "🌙 Night"
    };

    let mut embed = Embed::new(
        format!("{} Weather in {location}", code.emoji()),
        code.embed_color(current.is_day),
    )
    .description(format!(
        "**{:.1}°C** (feels like {:.1}°C)\n{}",
        current.temperature,
        current.feels_like,
        code.description()
    ))
    .field(
        "💨 Wind",
        format!(
            "{:.1} km/h ({})",
            current.wind_speed,
            CompassDirection::label_or_unknown(current.compass())
        ),
    )
    .field("💧 Humidity", format!("{:.0}%", current.humidity))
    .field("🌧️ Precipitation", format!("{:.1} mm", current.precipitation))
    .field(
        "📊 UV",
        format!("{:.1} ({})", current.uv_index, current.uv_category()),
    )
    .field("🕒 Time of day", day_night)
    .field("👁️ Visibility", format!("{:.1} km", current.visibility_km()));

    if detailed {
        embed = embed
            .field("☁️ Cloud cover", format!("{:.0}%", current.cloud_cover))
            .field("💨 Wind gusts", format!("{:.1} km/h", current.wind_gusts))
            .field("📏 Pressure", format!("{:.1} hPa", current.pressure));
    }

    embed
        .footer(format!("Updated: {}", current.observed_at.format("%H:%M")))
        .timestamp(current.observed_at_utc())
}

/// Compact card used by the message context menu
#[must_use]
pub fn quick_weather(
    location: &ResolvedLocation,
    current: &CurrentConditions,
    now: DateTime<Utc>,
) -> Embed {
    Embed::new(format!("🌤️ Weather in {location}"), colors::BLURPLE)
        .description(format!(
            "**{:.1}°C** - {}",
            current.temperature,
            current.weather_code.description()
        ))
        .field("💨 Wind", format!("{:.1} km/h", current.wind_speed))
        .field("💧 Humidity", format!("{:.0}%", current.humidity))
        .timestamp(now)
}

// ── Forecast ────────────────────────────────────────────────────

/// Daily forecast card showing at most seven days
#[must_use]
pub fn forecast(location: &ResolvedLocation, forecast: &ForecastSet, now: DateTime<Utc>) -> Embed {
    let mut embed = Embed::new(format!("📅 Forecast - {location}"), colors::SPRING_GREEN)
        .description(format!("{}-day forecast", forecast.len()));

    for day in forecast.days.iter().take(MAX_FORECAST_FIELDS) {
        embed = embed.field(
            format!("{} {}", day.weather_code.emoji(), day.date.format("%d/%m (%a)")),
            format!(
                "**{:.1}°C** / **{:.1}°C**\n{}",
                day.temperature_max,
                day.temperature_min,
                day.weather_code.description()
            ),
        );
    }

    embed
        .footer(coordinates_footer(&forecast.coordinate))
        .timestamp(now)
}

// ── Air quality ─────────────────────────────────────────────────

#[must_use]
pub fn air_quality(location: &ResolvedLocation, air: &AirQuality, now: DateTime<Utc>) -> Embed {
    let category = air.category();

    Embed::new(format!("🌬️ Air quality - {location}"), category.color())
        .description(format!("**AQI: {}** ({category})", air.aqi))
        .field("🧪 PM2.5", concentration(air.pm2_5))
        .field("🌫️ PM10", concentration(air.pm10))
        .field("🚗 CO", concentration(air.carbon_monoxide))
        .field("🏭 NO₂", concentration(air.nitrogen_dioxide))
        .field("⚡ O₃", concentration(air.ozone))
        .field("🏭 SO₂", concentration(air.sulphur_dioxide))
        .footer(format!("AQI {}", AqiCategory::legend()))
        .timestamp(now)
}

fn concentration(value: f64) -> String {
    format!("{value:.1} µg/m³")
}

// ── Weather map ─────────────────────────────────────────────────

/// Map image URL for a coordinate and layer
#[must_use]
pub fn map_image_url(coordinate: &Coordinate, layer: MapLayer) -> String {
    format!(
        "{MAP_IMAGE_BASE}/{}?latitude={}&longitude={}",
        layer.slug(),
        coordinate.latitude(),
        coordinate.longitude()
    )
}

#[must_use]
pub fn weather_map(location: &ResolvedLocation, layer: MapLayer, now: DateTime<Utc>) -> Embed {
    Embed::new(format!("🗺️ Weather map - {location}"), colors::BLUE)
        .description(format!("Layer: **{}**", layer.display_name()))
        .image_url(map_image_url(location.coordinate(), layer))
        .footer(coordinates_footer(location.coordinate()))
        .timestamp(now)
}

// ── Alerts ──────────────────────────────────────────────────────

/// Alert card; an empty list renders the all-clear placeholder
#[must_use]
pub fn weather_alerts(
    location: &ResolvedLocation,
    alerts: &[WeatherAlert],
    now: DateTime<Utc>,
) -> Embed {
    let title = format!("⚠️ Weather alerts - {location}");

    if alerts.is_empty() {
        return Embed::new(title, colors::GREEN)
            .description(NO_ALERTS)
            .footer(DATA_ATTRIBUTION)
            .timestamp(now);
    }

    let mut embed =
        Embed::new(title, colors::ORANGE).description(format!("{} active alert(s)", alerts.len()));
    for alert in alerts {
        let until = alert.ends_at.map_or_else(
            || "until further notice".to_string(),
            |end| format!("until {}", end.format("%d/%m %H:%M")),
        );
        embed = embed.field(
            format!("{}: {}", alert.severity, alert.headline),
            format!("{}\n{until}", alert.description),
        );
    }
    embed.footer(DATA_ATTRIBUTION).timestamp(now)
}

// ── History ─────────────────────────────────────────────────────

/// Summary of archived observations over the requested window
#[must_use]
pub fn history(location: &ResolvedLocation, history: &WeatherHistory, now: DateTime<Utc>) -> Embed {
    let embed = Embed::new(format!("🕰️ Past weather - {location}"), colors::NAVY)
        .description(format!(
            "{} to {}",
            history.start.format("%d/%m/%Y"),
            history.end.format("%d/%m/%Y")
        ));

    let (Some(mean_max), Some(mean_min), Some(windiest)) =
        (history.mean_max(), history.mean_min(), history.windiest())
    else {
        return embed
            .field("📭 No data", NO_HISTORY)
            .footer(coordinates_footer(&history.coordinate))
            .timestamp(now);
    };

    embed
        .field("🌡️ Average high", format!("{mean_max:.1}°C"))
        .field("🌡️ Average low", format!("{mean_min:.1}°C"))
        .field(
            "🌧️ Precipitation",
            format!(
                "{:.1} mm over {} wet day(s)",
                history.total_precipitation(),
                history.wet_days()
            ),
        )
        .field(
            "💨 Windiest day",
            format!(
                "{} - {:.1} km/h",
                windiest.date.format("%d/%m"),
                windiest.wind_speed_max
            ),
        )
        .field("📆 Days observed", history.len().to_string())
        .footer(coordinates_footer(&history.coordinate))
        .timestamp(now)
}

// ── Helpers ─────────────────────────────────────────────────────

fn coordinates_footer(coordinate: &Coordinate) -> String {
    format!("Coordinates: {}", coordinate.short_label())
}
