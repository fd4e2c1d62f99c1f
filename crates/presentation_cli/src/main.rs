//! WeatherBot CLI
//!
//! Runs weather commands locally, registers Discord commands and checks a
//! running server.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use application::{CommandService, Reply, WeatherService};
use clap::Parser;
use infrastructure::{AppConfig, LoggingConfig, WeatherAdapter, init_logging};
use integration_discord::{DiscordClient, command_definitions};
use presentation_cli::{
    Cli, Commands,
    cli::{endpoint_url, log_filter_from_verbosity, weather_command},
};

fn print_reply(reply: &Reply, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reply)?);
    } else {
        println!("{}", reply.to_plain_text());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    // Set up logging based on verbosity
    init_logging(&LoggingConfig {
        filter: log_filter_from_verbosity(cli.verbose).to_string(),
        format: config.logging.format,
    })?;

    if let Some(command) = weather_command(&cli.command, config.weather.default_forecast_days) {
        let adapter = Arc::new(WeatherAdapter::with_config((&config.weather).into())?);
        let weather = Arc::new(WeatherService::new(adapter.clone(), adapter));
        let service = CommandService::new(weather);

        match service.execute(&command).await {
            Ok(reply) => print_reply(&reply, cli.json)?,
            Err(e) => {
                println!("{}", e.user_message());
                tracing::debug!(error = %e, "Command failed");
                std::process::exit(1);
            },
        }
        return Ok(());
    }

    match cli.command {
        Commands::RegisterCommands { guild, global } => {
            let Some(client_config) = config.discord.client_config() else {
                println!("❌ discord.application_id is not configured");
                std::process::exit(1);
            };
            let client = DiscordClient::new(client_config)?;

            let guild = if global {
                None
            } else {
                guild.or(config.discord.guild_id)
            };
            let scope = guild.as_deref().map_or_else(
                || "globally".to_string(),
                |id| format!("in guild {id}"),
            );

            match client
                .register_commands(guild.as_deref(), &command_definitions())
                .await
            {
                Ok(registered) => {
                    println!("✅ Registered {} command(s) {scope}:", registered.len());
                    for command in registered {
                        println!("   • {} ({})", command.name, command.id);
                    }
                },
                Err(e) => {
                    println!("❌ Registration failed: {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Health { url } => {
            let client = reqwest::Client::new();
            match client.get(endpoint_url(&url, "/health")).send().await {
                Ok(resp) if resp.status().is_success() => {
                    println!("✅ Healthy");
                },
                Ok(resp) => {
                    println!("❌ Unhealthy: HTTP {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    println!("❌ Unhealthy: {e}");
                    std::process::exit(1);
                },
            }
        },

        _ => {},
    }

    Ok(())
}
